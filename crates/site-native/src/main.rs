//! Native preview of the site's platform-neutral logic.
//!
//! ```text
//! site-native layout <width> [height]
//! site-native content <collection> <pl|en> [id]
//! site-native wheel <t_ms:delta>...
//! ```

mod cli;

use anyhow::{anyhow, bail};
use clap::Parser;
use cli::{Cli, Command, WheelSample};
use site_core::content::*;
use site_core::fetch::{Record, StaticSource, SyntheticSource};
use site_core::layout::{guides_aligned, BodyGeometry, HeaderGeometry};
use site_core::viewport::compute;
use site_core::{
    Collection, ContentError, ContentLoader, ContentSource, LoadState, Locale, NavOutcome, Query,
    SiteConfig, SlideNavigator, SourceKind, ViewportState,
};

/// No HTTP client in the native build; the remote API falls back to the
/// static tables.
enum NativeSource {
    Static(StaticSource),
    Synthetic(SyntheticSource),
}

impl NativeSource {
    fn for_config(config: &SiteConfig) -> Self {
        match SourceKind::for_config(config) {
            SourceKind::Synthetic => NativeSource::Synthetic(SyntheticSource::default()),
            SourceKind::Remote => {
                log::warn!("[content] remote source not available natively; using static content");
                NativeSource::Static(StaticSource)
            }
            SourceKind::Static => NativeSource::Static(StaticSource),
        }
    }
}

impl ContentSource for NativeSource {
    async fn fetch(&self, query: &Query) -> Result<Option<serde_json::Value>, ContentError> {
        match self {
            NativeSource::Static(source) => source.fetch(query).await,
            NativeSource::Synthetic(source) => source.fetch(query).await,
        }
    }
}

fn layout(width: f32, height: f32, config: &SiteConfig) {
    let vp = compute(&config.viewport, ViewportState::new(width, height));
    let geometry = HeaderGeometry::for_layout(vp.kind);
    let header = geometry.scaled(vp.scale);
    let body_xs = BodyGeometry::for_layout(vp.kind).guide_xs(vp.scale);
    println!("layout    {:?} ({})", vp.kind, vp.kind.css_class());
    println!("reference {}px", vp.reference_width);
    println!("scale     {:.4}", vp.scale.factor());
    println!(
        "header    {:.1}x{:.1} at ({:.1}, {:.1})",
        header.rect.width(),
        header.rect.height(),
        header.rect.x(),
        header.rect.y()
    );
    let xs: Vec<String> = header.guide_xs.iter().map(|x| format!("{:.1}", x)).collect();
    println!(
        "guides    {:?} -> [{}]",
        geometry.guides.design_xs(),
        xs.join(", ")
    );
    println!("aligned   {}", guides_aligned(&header, &body_xs));
}

fn load<R>(source: &NativeSource, query: &Query, locale: Locale) -> anyhow::Result<()>
where
    R: Record,
    R::Resolved: std::fmt::Debug,
{
    let mut loader = ContentLoader::<R>::new();
    match pollster::block_on(loader.load(source, query, locale)) {
        LoadState::Loaded(items) => {
            println!("{} records", items.len());
            for item in items {
                println!("{:#?}", item);
            }
            Ok(())
        }
        LoadState::Failed(e) => Err(anyhow!(e.clone())),
        LoadState::Loading => bail!("load did not finish"),
    }
}

fn content(
    collection: Collection,
    locale: Locale,
    id: Option<&str>,
    config: &SiteConfig,
) -> anyhow::Result<()> {
    let mut query = Query::new(collection);
    if let Some(id) = id {
        query = query.with_param("id", id);
    }
    let source = NativeSource::for_config(config);
    match collection {
        Collection::Events => load::<RawEvent>(&source, &query, locale),
        Collection::Bio => load::<RawBioProfile>(&source, &query, locale),
        Collection::Albums => load::<RawPhotoAlbum>(&source, &query, locale),
        Collection::Videos => load::<RawVideo>(&source, &query, locale),
        Collection::HomeSlides => load::<RawHomeSlideText>(&source, &query, locale),
        Collection::Composers => load::<RawComposer>(&source, &query, locale),
        Collection::Foundation => load::<RawFoundationInfo>(&source, &query, locale),
    }
}

/// Replays a wheel trace through a four-slide navigator.
fn wheel(trace: &[WheelSample], config: &SiteConfig) {
    let mut nav = SlideNavigator::new(4, config.navigation);
    for &WheelSample { t_ms: t, delta } in trace {
        let outcome = nav.on_wheel(delta, t);
        let shown = match outcome {
            NavOutcome::Committed(tr) => format!("{} -> {}", tr.from, tr.to),
            other => format!("{:?}", other),
        };
        println!(
            "t={:>7.1} delta={:>7.1} total={:>7.1} index={} {}",
            t,
            delta,
            nav.wheel_total(),
            nav.target(),
            shown
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::from_lookup(|key| std::env::var(key).ok())?;
    match cli.command {
        Command::Layout { width, height } => layout(width, height, &config),
        Command::Content {
            collection,
            locale,
            id,
        } => content(collection, locale, id.as_deref(), &config)?,
        Command::Wheel { trace } => wheel(&trace, &config),
    }
    Ok(())
}
