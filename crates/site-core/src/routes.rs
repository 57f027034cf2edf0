use crate::content::Locale;
use crate::navigator::EdgePolicy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Biography,
    Calendar,
    Archive,
    Event(String),
    Media,
    Videos,
    Gallery(String),
    Repertoire,
    SpecialProjects,
    Foundation,
    Contact,
    NotFound,
}

/// How a page drives its slide navigator, if it has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidePolicy {
    pub edge: EdgePolicy,
    pub reset_scroll: bool,
}

impl Route {
    /// Parses a location path. A leading `/en` segment selects English.
    pub fn parse(path: &str) -> (Route, Option<Locale>) {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let locale = match segments.first().and_then(|s| Locale::parse(s)) {
            Some(locale) => {
                segments.remove(0);
                Some(locale)
            }
            None => None,
        };
        let route = match segments.as_slice() {
            [] => Route::Home,
            ["biography"] => Route::Biography,
            ["calendar"] => Route::Calendar,
            ["calendar", "archive"] => Route::Archive,
            ["event", id] => Route::Event((*id).to_string()),
            ["media"] => Route::Media,
            ["media", "video"] => Route::Videos,
            ["media", "gallery", id] => Route::Gallery((*id).to_string()),
            ["repertoire"] => Route::Repertoire,
            ["repertoire", "special-projects"] => Route::SpecialProjects,
            ["foundation"] => Route::Foundation,
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        };
        (route, locale)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Biography => "/biography".to_string(),
            Route::Calendar => "/calendar".to_string(),
            Route::Archive => "/calendar/archive".to_string(),
            Route::Event(id) => format!("/event/{id}"),
            Route::Media => "/media".to_string(),
            Route::Videos => "/media/video".to_string(),
            Route::Gallery(id) => format!("/media/gallery/{id}"),
            Route::Repertoire => "/repertoire".to_string(),
            Route::SpecialProjects => "/repertoire/special-projects".to_string(),
            Route::Foundation => "/foundation".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Path with the language prefix used for English pages.
    pub fn localized_path(&self, locale: Locale) -> String {
        match locale {
            Locale::Pl => self.path(),
            Locale::En if *self == Route::Home => "/en".to_string(),
            Locale::En => format!("/en{}", self.path()),
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Biography => "nav.bio",
            Route::Calendar | Route::Event(_) => "nav.calendar",
            Route::Archive => "nav.archive",
            Route::Media => "nav.media",
            Route::Videos => "nav.videos",
            Route::Gallery(_) => "nav.gallery",
            Route::Repertoire => "nav.repertoire",
            Route::SpecialProjects => "nav.special_projects",
            Route::Foundation => "nav.foundation",
            Route::Contact => "nav.contact",
            Route::NotFound => "ui.not_found",
        }
    }

    /// Home and biography page through slides with wheel/swipe; biography
    /// slides own scrollable text so a commit scrolls back to the top. The
    /// gallery lightbox wraps around.
    pub fn slide_policy(&self) -> Option<SlidePolicy> {
        match self {
            Route::Home => Some(SlidePolicy {
                edge: EdgePolicy::Clamp,
                reset_scroll: false,
            }),
            Route::Biography => Some(SlidePolicy {
                edge: EdgePolicy::Clamp,
                reset_scroll: true,
            }),
            Route::Gallery(_) => Some(SlidePolicy {
                edge: EdgePolicy::Wrap,
                reset_scroll: false,
            }),
            _ => None,
        }
    }
}
