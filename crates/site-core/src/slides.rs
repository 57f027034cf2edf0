use glam::Vec2;

use crate::content::{HomeSlideText, Locale};
use crate::error::SlideSetError;
use crate::i18n::Translations;

/// Colours one slide paints the page with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub background: &'static str,
    pub line: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub theme: ColorTheme,
    pub image: String,
    /// Translation key of the large word shown on the slide.
    pub word_key: &'static str,
    pub tagline_key: &'static str,
    /// Design-space offset of the word block.
    pub offset: Vec2,
}

/// Text and placement shown on one slide once content has loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideCaption {
    pub word: String,
    pub tagline: String,
    pub image: String,
    pub offset: Vec2,
}

/// Ordered, non-empty, immutable sequence of slides owned by one page.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self, SlideSetError> {
        if slides.is_empty() {
            return Err(SlideSetError::Empty);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // Never empty; kept for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// One caption per slide. Loaded texts fill slides in order; slides the
    /// CMS has no (or blank) text for use their built-in translation keys.
    /// Loaded entries past the last slide have nowhere to go and are dropped.
    pub fn captions(
        &self,
        loaded: &[HomeSlideText],
        translations: &Translations,
        locale: Locale,
    ) -> Vec<SlideCaption> {
        if loaded.len() > self.slides.len() {
            log::warn!(
                "[slides] {} captions for {} slides",
                loaded.len(),
                self.slides.len()
            );
        }
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let text = loaded.get(i);
                let pick = |value: Option<&String>, key: &str| match value {
                    Some(s) if !s.trim().is_empty() => s.clone(),
                    _ => translations.get(key, locale).into_owned(),
                };
                SlideCaption {
                    word: pick(text.map(|t| &t.word), slide.word_key),
                    tagline: pick(text.map(|t| &t.tagline), slide.tagline_key),
                    image: text
                        .and_then(|t| t.image.clone())
                        .filter(|url| !url.is_empty())
                        .unwrap_or_else(|| slide.image.clone()),
                    offset: slide.offset,
                }
            })
            .collect()
    }

    /// The four homepage slides.
    pub fn homepage() -> Self {
        let slides = vec![
            Slide {
                theme: ColorTheme {
                    background: "#0d0d0d",
                    line: "#3a3a3a",
                    text: "#f5f5f5",
                },
                image: "/img/home/slide-1.webp".to_string(),
                word_key: "home.word.sound",
                tagline_key: "home.tagline.sound",
                offset: Vec2::new(120.0, 260.0),
            },
            Slide {
                theme: ColorTheme {
                    background: "#e9e4da",
                    line: "#b9b1a3",
                    text: "#141414",
                },
                image: "/img/home/slide-2.webp".to_string(),
                word_key: "home.word.space",
                tagline_key: "home.tagline.space",
                offset: Vec2::new(480.0, 180.0),
            },
            Slide {
                theme: ColorTheme {
                    background: "#1d2b3a",
                    line: "#3e5168",
                    text: "#f0f4f8",
                },
                image: "/img/home/slide-3.webp".to_string(),
                word_key: "home.word.time",
                tagline_key: "home.tagline.time",
                offset: Vec2::new(820.0, 320.0),
            },
            Slide {
                theme: ColorTheme {
                    background: "#a33b20",
                    line: "#c75c40",
                    text: "#fff6ef",
                },
                image: "/img/home/slide-4.webp".to_string(),
                word_key: "home.word.now",
                tagline_key: "home.tagline.now",
                offset: Vec2::new(375.0, 420.0),
            },
        ];
        Self { slides }
    }
}
