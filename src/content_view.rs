//! Loads the current page's collection and renders it into
//! `#content-region`. Loading, failure and empty states replace only that
//! region; the header, slides and surfaces are never touched from here.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use site_core::content::*;
use site_core::fetch::Record;
use site_core::i18n::Translations;
use site_core::routes::Route;
use site_core::slides::SlideSet;
use site_core::{Collection, ContentLoader, ContentSource, Query};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::cms::SiteSource;
use crate::constants::{CAPTION_IMAGE_ATTR, CONTENT_REGION_ID, DESIGN_X_ATTR, DESIGN_Y_ATTR};
use crate::markup::{calendar_date, escape_html};
use crate::slides::SharedDeck;
use crate::viewport::{self, SharedViewport};

pub struct PageContext {
    pub document: web::Document,
    pub route: Route,
    pub source: Rc<SiteSource>,
    pub translations: Rc<Translations>,
    pub viewport: SharedViewport,
    /// Deck to rebind once slides have been rendered from content.
    pub deck: Option<SharedDeck>,
}

/// Starts (or restarts) the page load for a language.
pub type Reload = Rc<dyn Fn(Locale)>;

type Renderer<T> = fn(&[T], &PageContext, Locale) -> String;

pub fn bind_route(ctx: PageContext) -> Option<Reload> {
    let route = ctx.route.clone();
    let ctx = Rc::new(ctx);
    let reload = match route {
        Route::Home => bind::<RawHomeSlideText>(
            ctx,
            Query::new(Collection::HomeSlides),
            render_home_captions,
        ),
        Route::Biography => bind::<RawBioProfile>(ctx, Query::new(Collection::Bio), render_bio),
        Route::Calendar | Route::Archive => {
            bind::<RawEvent>(ctx, Query::new(Collection::Events), render_events)
        }
        Route::Event(id) => bind::<RawEvent>(
            ctx,
            Query::new(Collection::Events).with_param("id", &id),
            render_event_detail,
        ),
        Route::Media | Route::Gallery(_) => {
            bind::<RawPhotoAlbum>(ctx, Query::new(Collection::Albums), render_albums)
        }
        Route::Videos => bind::<RawVideo>(ctx, Query::new(Collection::Videos), render_videos),
        Route::Repertoire | Route::SpecialProjects => {
            bind::<RawComposer>(ctx, Query::new(Collection::Composers), render_repertoire)
        }
        Route::Foundation | Route::Contact => bind::<RawFoundationInfo>(
            ctx,
            Query::new(Collection::Foundation),
            render_foundation,
        ),
        Route::NotFound => return None,
    };
    Some(reload)
}

fn bind<R>(ctx: Rc<PageContext>, query: Query, render: Renderer<R::Resolved>) -> Reload
where
    R: Record + 'static,
    R::Resolved: 'static,
{
    let loader = Rc::new(RefCell::new(ContentLoader::<R>::new()));
    let query = Rc::new(query);
    Rc::new(move |locale: Locale| {
        let ticket = loader.borrow_mut().begin(locale);
        show(&ctx, &LoadState::Loading, render, locale);

        let ctx = ctx.clone();
        let loader = loader.clone();
        let query = query.clone();
        spawn_local(async move {
            let result = ctx.source.fetch(&query).await;
            let fresh = loader.borrow_mut().finish(ticket, result);
            if fresh {
                show(&ctx, loader.borrow().state(), render, locale);
            }
        });
    })
}

fn show<T>(ctx: &PageContext, state: &LoadState<T>, render: Renderer<T>, locale: Locale) {
    let Some(region) = ctx.document.get_element_by_id(CONTENT_REGION_ID) else {
        log::warn!("[content] page has no #{}", CONTENT_REGION_ID);
        return;
    };
    let t = &ctx.translations;
    let html = match state {
        LoadState::Loading => status(t, "ui.loading", locale, "content-status"),
        LoadState::Failed(_) => status(t, "ui.load_failed", locale, "content-error"),
        // The homepage still has its built-in captions
        LoadState::Loaded(items) if items.is_empty() && ctx.route != Route::Home => {
            status(t, "ui.empty", locale, "content-status")
        }
        LoadState::Loaded(items) => render(items, ctx, locale),
    };
    region.set_inner_html(&html);
    viewport::place_design_boxes(&ctx.document, &ctx.viewport.borrow().current());
    _ = region.set_attribute(
        "aria-busy",
        if state.is_loading() { "true" } else { "false" },
    );
    if !state.is_loading() {
        if let Some(deck) = &ctx.deck {
            deck.borrow_mut().rebind(&ctx.document);
        }
    }
}

fn status(t: &Translations, key: &str, locale: Locale, class: &str) -> String {
    let role = if class == "content-error" { " role=\"alert\"" } else { "" };
    format!(
        "<p class=\"{}\"{}>{}</p>",
        class,
        role,
        escape_html(&t.get(key, locale))
    )
}

fn image(url: Option<&str>, alt: &str) -> String {
    match url {
        Some(url) if !url.is_empty() => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(url),
            escape_html(alt)
        ),
        _ => String::new(),
    }
}

fn render_home_captions(items: &[HomeSlideText], ctx: &PageContext, locale: Locale) -> String {
    let set = ctx
        .deck
        .as_ref()
        .and_then(|deck| deck.borrow().themes().cloned())
        .unwrap_or_else(SlideSet::homepage);
    let mut html = String::new();
    for (i, caption) in set.captions(items, &ctx.translations, locale).iter().enumerate() {
        _ = write!(
            html,
            "<div class=\"slide-caption\" data-index=\"{i}\" {image_attr}=\"{image}\" {x_attr}=\"{x}\" {y_attr}=\"{y}\"><span class=\"slide-word\">{word}</span><p>{tagline}</p></div>",
            image_attr = CAPTION_IMAGE_ATTR,
            image = escape_html(&caption.image),
            x_attr = DESIGN_X_ATTR,
            x = caption.offset.x,
            y_attr = DESIGN_Y_ATTR,
            y = caption.offset.y,
            word = escape_html(&caption.word),
            tagline = escape_html(&caption.tagline),
        );
    }
    html
}

fn render_bio(items: &[BioProfile], _ctx: &PageContext, _locale: Locale) -> String {
    let mut html = String::new();
    for profile in items {
        _ = write!(
            html,
            "<section class=\"slide bio-slide\">{}<h2>{}</h2><h3>{}</h3>",
            image(profile.image.as_deref(), &profile.name),
            escape_html(&profile.name),
            escape_html(&profile.role)
        );
        for paragraph in profile.bio.split("\n\n").filter(|p| !p.trim().is_empty()) {
            _ = write!(html, "<p>{}</p>", escape_html(paragraph.trim()));
        }
        html.push_str("</section>");
    }
    html
}

/// Today in the visitor's time zone; event dates are local calendar days.
fn today() -> String {
    let now = js_sys::Date::new_0();
    calendar_date(now.get_full_year(), now.get_month(), now.get_date())
}

fn render_events(items: &[Event], ctx: &PageContext, locale: Locale) -> String {
    let (upcoming, archived) = split_events(items.to_vec(), &today());
    let events = if ctx.route == Route::Archive {
        archived
    } else {
        upcoming
    };
    if events.is_empty() {
        return status(&ctx.translations, "ui.empty", locale, "content-status");
    }
    let mut html = String::from("<ul class=\"event-list\">");
    for event in &events {
        let href = Route::Event(event.id.clone()).localized_path(locale);
        _ = write!(
            html,
            "<li class=\"event\"><time datetime=\"{date}\">{date} {time}</time><a href=\"{href}\">{title}</a><span class=\"venue\">{venue}</span></li>",
            date = escape_html(&event.date),
            time = escape_html(event.time.as_deref().unwrap_or("")),
            href = escape_html(&href),
            title = escape_html(&event.title),
            venue = escape_html(&event.venue),
        );
    }
    html.push_str("</ul>");
    html
}

fn render_event_detail(items: &[Event], ctx: &PageContext, locale: Locale) -> String {
    let Some(event) = items.first() else {
        return status(&ctx.translations, "ui.not_found", locale, "content-status");
    };
    let mut html = format!(
        "<article class=\"event-detail\">{}<h1>{}</h1><p class=\"when\">{} {}</p><p class=\"venue\">{}</p><p>{}</p>",
        image(event.image.as_deref(), &event.title),
        escape_html(&event.title),
        escape_html(&event.date),
        escape_html(event.time.as_deref().unwrap_or("")),
        escape_html(&event.venue),
        escape_html(&event.description)
    );
    if let Some(url) = &event.ticket_url {
        _ = write!(
            html,
            "<a class=\"tickets\" href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a>",
            escape_html(url),
            escape_html(&ctx.translations.get("ui.tickets", locale))
        );
    }
    html.push_str("</article>");
    html
}

fn render_albums(items: &[PhotoAlbum], ctx: &PageContext, locale: Locale) -> String {
    match &ctx.route {
        Route::Gallery(id) => match items.iter().find(|a| &a.id == id) {
            Some(album) => {
                let mut html = format!("<h1>{}</h1>", escape_html(&album.title));
                for photo in &album.photos {
                    _ = write!(
                        html,
                        "<figure class=\"slide photo-slide\">{}<figcaption>{}</figcaption></figure>",
                        image(Some(&photo.url), &photo.caption),
                        escape_html(&photo.caption)
                    );
                }
                html
            }
            None => status(&ctx.translations, "ui.not_found", locale, "content-status"),
        },
        _ => {
            let mut html = String::from("<ul class=\"album-list\">");
            for album in items {
                let href = Route::Gallery(album.id.clone()).localized_path(locale);
                _ = write!(
                    html,
                    "<li><a href=\"{}\">{}<span>{}</span></a></li>",
                    escape_html(&href),
                    image(album.cover.as_deref(), &album.title),
                    escape_html(&album.title)
                );
            }
            html.push_str("</ul>");
            html
        }
    }
}

fn render_videos(items: &[Video], _ctx: &PageContext, _locale: Locale) -> String {
    let mut html = String::from("<div class=\"video-list\">");
    for video in items {
        _ = write!(
            html,
            "<figure><iframe src=\"{}\" title=\"{}\" loading=\"lazy\" allowfullscreen></iframe><figcaption>{}</figcaption></figure>",
            escape_html(&video.embed_url()),
            escape_html(&video.title),
            escape_html(&video.title)
        );
    }
    html.push_str("</div>");
    html
}

fn render_repertoire(items: &[Composer], ctx: &PageContext, _locale: Locale) -> String {
    let (standard, special) = partition_repertoire(items.to_vec());
    let composers = if ctx.route == Route::SpecialProjects {
        special
    } else {
        standard
    };
    let mut html = String::from("<div class=\"repertoire\">");
    for composer in &composers {
        _ = write!(
            html,
            "<section><h2>{}</h2><p class=\"country\">{}</p><ul>",
            escape_html(&composer.name),
            escape_html(&composer.country)
        );
        for work in &composer.works {
            let year = work.year.map(|y| format!(" ({})", y)).unwrap_or_default();
            _ = write!(
                html,
                "<li><em>{}</em>{}<span>{}</span></li>",
                escape_html(&work.title),
                year,
                escape_html(&work.instrumentation)
            );
        }
        html.push_str("</ul></section>");
    }
    html.push_str("</div>");
    html
}

fn render_foundation(items: &[FoundationInfo], ctx: &PageContext, locale: Locale) -> String {
    let Some(info) = items.first() else {
        return status(&ctx.translations, "ui.empty", locale, "content-status");
    };
    let t = &ctx.translations;
    format!(
        "<section class=\"foundation\"><h1>{}</h1><p>{}</p><address>{}<br><a href=\"mailto:{email}\">{email}</a></address><dl><dt>{}</dt><dd>{}</dd><dt>NIP</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd></dl></section>",
        escape_html(&info.name),
        escape_html(&info.description),
        escape_html(&info.address),
        escape_html(&t.get("foundation.krs", locale)),
        escape_html(&info.krs),
        escape_html(&info.nip),
        escape_html(&t.get("foundation.account", locale)),
        escape_html(&info.account),
        email = escape_html(&info.email),
    )
}
