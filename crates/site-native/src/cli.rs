// Command-line surface of the native preview. Free of I/O so host tests can
// include it directly.

use clap::{Parser, Subcommand};
use site_core::{Collection, Locale};

#[derive(Debug, Parser)]
#[command(
    name = "site-native",
    about = "Native preview of the site's layout, content and slide navigation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print layout kind, scale, header box and guide lines for a window size
    Layout {
        width: f32,
        #[arg(default_value_t = 800.0)]
        height: f32,
    },
    /// Load a collection through the configured source and print it resolved
    Content {
        #[arg(value_parser = parse_collection)]
        collection: Collection,
        #[arg(value_parser = parse_locale)]
        locale: Locale,
        /// Only the record with this id (events)
        id: Option<String>,
    },
    /// Replay a timed wheel trace through a four-slide navigator
    Wheel {
        /// Entries of the form `<t_ms>:<delta>`
        #[arg(required = true, value_parser = parse_wheel_sample)]
        trace: Vec<WheelSample>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    pub t_ms: f64,
    pub delta: f32,
}

pub fn parse_collection(raw: &str) -> Result<Collection, String> {
    Collection::parse(raw).ok_or_else(|| {
        let names: Vec<_> = Collection::ALL.iter().map(|c| c.name()).collect();
        format!("unknown collection {raw:?}, expected one of {}", names.join(", "))
    })
}

pub fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unknown locale {raw:?}, expected pl or en"))
}

pub fn parse_wheel_sample(raw: &str) -> Result<WheelSample, String> {
    let (t, delta) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <t_ms>:<delta>, got {raw:?}"))?;
    let t_ms: f64 = t
        .trim()
        .parse()
        .map_err(|e| format!("bad time in {raw:?}: {e}"))?;
    let delta: f32 = delta
        .trim()
        .parse()
        .map_err(|e| format!("bad delta in {raw:?}: {e}"))?;
    if !t_ms.is_finite() || !delta.is_finite() {
        return Err(format!("non-finite value in {raw:?}"));
    }
    Ok(WheelSample { t_ms, delta })
}
