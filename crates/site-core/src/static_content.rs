// Built-in content used when the remote query API is switched off. Same
// shape as the API projections, so both paths go through one decoder.

use serde_json::{json, Value};

use crate::fetch::Collection;

pub fn table(collection: Collection) -> Value {
    match collection {
        Collection::Events => events(),
        Collection::Bio => bio(),
        Collection::Albums => albums(),
        Collection::Videos => videos(),
        Collection::HomeSlides => home_slides(),
        Collection::Composers => composers(),
        Collection::Foundation => foundation(),
    }
}

fn events() -> Value {
    json!([
        {
            "id": "ev-2024-warsaw-autumn",
            "date": "2024-09-21",
            "time": "19:30",
            "title": { "pl": "Warszawska Jesień: Nowe Głosy", "en": "Warsaw Autumn: New Voices" },
            "venue": { "pl": "Studio Koncertowe Polskiego Radia", "en": "Polish Radio Concert Studio" },
            "description": {
                "pl": "Prawykonania czterech utworów napisanych dla zespołu.",
                "en": "World premieres of four pieces written for the ensemble."
            },
            "image": "/img/events/warsaw-autumn.webp"
        },
        {
            "id": "ev-2025-nospr",
            "date": "2025-03-14",
            "time": "20:00",
            "title": { "pl": "Przestrzenie ciszy", "en": "Spaces of Silence" },
            "venue": { "pl": "NOSPR, Sala Kameralna", "en": "NOSPR, Chamber Hall" },
            "description": { "pl": "Muzyka spektralna i elektronika na żywo." },
            "ticketUrl": "https://nospr.org.pl"
        },
        {
            "id": "ev-2026-krakow",
            "date": "2026-11-07",
            "time": "19:00",
            "title": { "pl": "Sacrum Profanum: Maszyny", "en": "Sacrum Profanum: Machines" },
            "venue": { "pl": "ICE Kraków" },
            "description": {
                "pl": "Program na zespół, taśmę i ruchome światło.",
                "en": "A programme for ensemble, tape and moving light."
            },
            "ticketUrl": "https://sacrumprofanum.com"
        },
        {
            "id": "ev-2027-berlin",
            "date": "2027-02-19",
            "time": "20:00",
            "title": { "pl": "Ultraschall Berlin", "en": "Ultraschall Berlin" },
            "venue": { "pl": "Radialsystem", "en": "Radialsystem" },
            "description": { "en": "Guest appearance at the Ultraschall festival." }
        }
    ])
}

fn bio() -> Value {
    json!([
        {
            "name": "Anna Zielińska",
            "order": 1,
            "role": { "pl": "flet, dyrekcja artystyczna", "en": "flute, artistic director" },
            "bio": {
                "pl": "Flecistka specjalizująca się w muzyce najnowszej, założycielka zespołu.",
                "en": "Flautist devoted to new music and founder of the ensemble."
            },
            "image": "/img/bio/zielinska.webp"
        },
        {
            "name": "Tomasz Wrona",
            "order": 2,
            "role": { "pl": "klarnet", "en": "clarinet" },
            "bio": { "pl": "Klarnecista, wykonawca ponad stu prawykonań." },
            "image": "/img/bio/wrona.webp"
        },
        {
            "name": "Marta Kos",
            "order": 3,
            "role": { "pl": "fortepian", "en": "piano" },
            "bio": {
                "pl": "Pianistka i improwizatorka, laureatka konkursów kameralnych.",
                "en": "Pianist and improviser, prize-winner of chamber competitions."
            },
            "image": "/img/bio/kos.webp"
        },
        {
            "name": "Paweł Nowicki",
            "order": 4,
            "role": { "pl": "perkusja", "en": "percussion" },
            "bio": {
                "pl": "Perkusista, współpracuje z teatrem i tańcem współczesnym.",
                "en": "Percussionist working across theatre and contemporary dance."
            },
            "image": "/img/bio/nowicki.webp"
        }
    ])
}

fn albums() -> Value {
    json!([
        {
            "id": "album-sacrum-2023",
            "title": { "pl": "Sacrum Profanum 2023", "en": "Sacrum Profanum 2023" },
            "photos": [
                { "url": "/img/gallery/sp-2023-1.webp", "caption": { "pl": "Próba generalna", "en": "Dress rehearsal" } },
                { "url": "/img/gallery/sp-2023-2.webp", "caption": { "pl": "Koncert" } },
                { "url": "/img/gallery/sp-2023-3.webp", "caption": { "en": "Backstage" } }
            ]
        },
        {
            "id": "album-studio",
            "title": { "pl": "Sesja w studiu", "en": "Studio session" },
            "cover": "/img/gallery/studio-cover.webp",
            "photos": [
                { "url": "/img/gallery/studio-1.webp", "caption": { "pl": "Nagranie płyty", "en": "Recording the album" } }
            ]
        }
    ])
}

fn videos() -> Value {
    json!([
        { "youtubeId": "dQw4w9WgXcQ", "title": { "pl": "Przestrzenie ciszy (fragment)", "en": "Spaces of Silence (excerpt)" } },
        { "youtubeId": "oHg5SJYRHA0", "title": { "pl": "Maszyny, na żywo z ICE" } }
    ])
}

fn home_slides() -> Value {
    json!([
        { "word": { "pl": "dźwięk", "en": "sound" }, "tagline": { "pl": "słuchamy uważnie", "en": "we listen closely" } },
        { "word": { "pl": "przestrzeń", "en": "space" }, "tagline": { "pl": "gramy miejsce", "en": "we play the room" } },
        { "word": { "pl": "czas", "en": "time" }, "tagline": { "pl": "rozciągamy chwilę", "en": "we stretch the moment" } },
        { "word": { "pl": "teraz", "en": "now" }, "tagline": { "pl": "muzyka powstaje dziś" } }
    ])
}

fn composers() -> Value {
    json!([
        {
            "name": "Agata Zubel",
            "country": { "pl": "Polska", "en": "Poland" },
            "works": [
                { "title": { "pl": "Not I", "en": "Not I" }, "year": 2010, "instrumentation": { "pl": "głos i zespół", "en": "voice and ensemble" } }
            ]
        },
        {
            "name": "Georg Friedrich Haas",
            "country": { "pl": "Austria", "en": "Austria" },
            "works": [
                { "title": { "pl": "tria ex uno", "en": "tria ex uno" }, "year": 2001, "instrumentation": { "pl": "sekstet", "en": "sextet" } }
            ]
        },
        {
            "name": "Jagoda Szmytka",
            "country": { "pl": "Polska", "en": "Poland" },
            "specialProject": true,
            "works": [
                { "title": { "pl": "LOST GAMES COLLECTION", "en": "LOST GAMES COLLECTION" }, "year": 2016, "instrumentation": { "pl": "zespół, wideo i elektronika" } }
            ]
        },
        {
            "name": "Salvatore Sciarrino",
            "country": { "pl": "Włochy", "en": "Italy" },
            "works": [
                { "title": { "pl": "Lo spazio inverso", "en": "Lo spazio inverso" }, "year": 1985, "instrumentation": { "pl": "kwintet", "en": "quintet" } }
            ]
        }
    ])
}

fn foundation() -> Value {
    json!({
        "name": "Fundacja Muzyki Nowej",
        "address": "ul. Mokotowska 12/4, 00-561 Warszawa",
        "krs": "0000123456",
        "nip": "5260000000",
        "account": "PL61 1090 1014 0000 0712 1981 2874",
        "email": "kontakt@example.org",
        "description": {
            "pl": "Fundacja wspiera działalność zespołu i edukację muzyczną.",
            "en": "The foundation supports the ensemble and music education."
        }
    })
}
