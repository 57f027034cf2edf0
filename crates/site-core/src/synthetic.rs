//! Deterministic large-volume stand-in data.
//!
//! Output has the same shape as the remote API projections. Roughly one in
//! five translatable fields is left with a single language so that volume
//! runs also exercise the fallback path.

use rand::prelude::*;
use serde_json::{json, Value};

use crate::fetch::Collection;

const WORDS: &[&str] = &[
    "cisza", "echo", "linia", "pole", "światło", "ruch", "rezonans", "oddech", "szum", "puls",
    "fala", "cień", "próg", "ślad", "krąg", "ziarno",
];

const VENUES: &[&str] = &["NOSPR", "ICE Kraków", "Radialsystem", "Studio S1", "Muzeum Sztuki", "Filharmonia Łódzka"];

pub fn generate(collection: Collection, count: usize, seed: u64) -> Value {
    // Mix the collection into the seed so collections differ.
    let mix = seed ^ (collection as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = StdRng::seed_from_u64(mix);
    match collection {
        Collection::Foundation => foundation(&mut rng),
        _ => Value::Array((0..count).map(|i| record(collection, i, &mut rng)).collect()),
    }
}

fn record(collection: Collection, i: usize, rng: &mut StdRng) -> Value {
    match collection {
        Collection::Events => json!({
            "id": format!("synthetic-event-{i}"),
            "date": format!(
                "{:04}-{:02}-{:02}",
                rng.gen_range(2018..=2030),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            ),
            "time": format!("{:02}:{:02}", rng.gen_range(17..=21), [0, 15, 30, 45][rng.gen_range(0..4)]),
            "title": text(rng, 3),
            "venue": {
                "pl": VENUES[rng.gen_range(0..VENUES.len())],
                "en": VENUES[rng.gen_range(0..VENUES.len())]
            },
            "description": text(rng, 24),
        }),
        Collection::Bio => json!({
            "name": format!("Muzyk {i}"),
            "order": i,
            "role": text(rng, 1),
            "bio": text(rng, 60),
        }),
        Collection::Albums => {
            let photos: Vec<Value> = (0..rng.gen_range(1..=12))
                .map(|p| json!({ "url": format!("/img/synthetic/{i}-{p}.webp"), "caption": text(rng, 4) }))
                .collect();
            json!({ "id": format!("synthetic-album-{i}"), "title": text(rng, 2), "photos": photos })
        }
        Collection::Videos => json!({
            "youtubeId": format!("synthetic{i:05}"),
            "title": text(rng, 4),
        }),
        Collection::HomeSlides => json!({
            "word": text(rng, 1),
            "tagline": text(rng, 3),
        }),
        Collection::Composers => {
            let works: Vec<Value> = (0..rng.gen_range(1..=6))
                .map(|_| json!({
                    "title": text(rng, 2),
                    "year": rng.gen_range(1950..=2026),
                    "instrumentation": text(rng, 2),
                }))
                .collect();
            json!({
                "name": format!("Kompozytor {i}"),
                "country": text(rng, 1),
                "specialProject": rng.gen_bool(0.15),
                "works": works,
            })
        }
        Collection::Foundation => foundation(rng),
    }
}

fn foundation(rng: &mut StdRng) -> Value {
    json!({
        "name": "Fundacja Syntetyczna",
        "address": "ul. Testowa 1, 00-001 Warszawa",
        "krs": format!("{:010}", rng.gen_range(0..10_000_000_000u64)),
        "nip": format!("{:010}", rng.gen_range(0..10_000_000_000u64)),
        "account": "PL00 0000 0000 0000 0000 0000 0000",
        "email": "synthetic@example.org",
        "description": text(rng, 30),
    })
}

fn text(rng: &mut StdRng, words: usize) -> Value {
    let mut phrase = || {
        (0..words.max(1))
            .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ")
    };
    let pl = phrase();
    let en = phrase();
    match rng.gen_range(0..10) {
        0 => json!({ "pl": pl }),
        1 => json!({ "en": en }),
        _ => json!({ "pl": pl, "en": en }),
    }
}
