//! Page copy and layout. Every variant of the site is the same template fed
//! with a different JSON document from `content/`.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content for `{variant}` is not valid JSON: {source}")]
    Decode {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("gallery `{0}` has no places")]
    EmptyGallery(String),
    #[error("section anchor `{0}` is used twice")]
    DuplicateAnchor(String),
    #[error("ticker `{0}` has zero velocity")]
    StillTicker(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Tour,
    Business,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "tour" => Some(Variant::Tour),
            "business" => Some(Variant::Business),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Tour => "tour",
            Variant::Business => "business",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Variant::Tour => include_str!("../content/tour.json"),
            Variant::Business => include_str!("../content/business.json"),
        }
    }

    /// Reads the variant name off the root `<html>` element, falling back
    /// to the tour page.
    pub fn from_document() -> Self {
        let requested = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute(crate::config::VARIANT_ATTRIBUTE));
        match requested {
            Some(name) => Self::from_name(&name).unwrap_or_else(|| {
                log::warn!("unknown page variant `{}`, using tour", name);
                Variant::Tour
            }),
            None => Variant::Tour,
        }
    }

    pub fn load(self) -> Result<PageContent, ContentError> {
        let content: PageContent =
            serde_json::from_str(self.source()).map_err(|source| ContentError::Decode {
                variant: self.name(),
                source,
            })?;
        content.validate()?;
        Ok(content)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub badge: String,
    pub tagline: String,
    pub cta: String,
    #[serde(default)]
    pub cta_target: Option<String>,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl PageContent {
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut anchors = HashSet::new();
        for section in &self.sections {
            if let Some(anchor) = section.anchor() {
                if !anchors.insert(anchor) {
                    return Err(ContentError::DuplicateAnchor(anchor.to_string()));
                }
            }
            match section {
                Section::Gallery(g) if g.places.is_empty() => {
                    return Err(ContentError::EmptyGallery(g.heading.clone()));
                }
                Section::Ticker(t) if t.velocity == 0.0 => {
                    return Err(ContentError::StillTicker(t.text.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Stats(StatsSection),
    Ticker(TickerSection),
    KhanShatyr(FeatureSection),
    Gallery(GallerySection),
    Infrastructure(InfoGrid),
    Why(WhySection),
    Contact(ContactSection),
}

impl Section {
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Section::Stats(s) => s.id.as_deref(),
            Section::Ticker(_) => None,
            Section::KhanShatyr(s) => s.id.as_deref(),
            Section::Gallery(s) => s.id.as_deref(),
            Section::Infrastructure(s) => s.id.as_deref(),
            Section::Why(s) => s.id.as_deref(),
            Section::Contact(s) => s.id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSection {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub intro: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerSection {
    pub text: String,
    /// Percent of the strip per second; the sign picks the resting direction.
    pub velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fact {
    pub icon: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureSection {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub intro: String,
    pub image: String,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GallerySection {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub intro: String,
    /// CSS gradient used for the heading text.
    pub accent: String,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoGroup {
    pub icon: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoGrid {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub intro: String,
    pub accent: String,
    pub groups: Vec<InfoGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reason {
    pub icon: String,
    pub title: String,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhySection {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSection {
    #[serde(default)]
    pub id: Option<String>,
    pub heading: String,
    pub intro: String,
    pub submit_label: String,
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub title: String,
    pub tagline: String,
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_variants_load() {
        for variant in [Variant::Tour, Variant::Business] {
            let content = variant.load().unwrap_or_else(|e| panic!("{}: {e}", variant.name()));
            assert!(!content.sections.is_empty());
        }
    }

    #[test]
    fn tour_has_three_galleries() {
        let content = Variant::Tour.load().unwrap();
        let galleries = content
            .sections
            .iter()
            .filter(|s| matches!(s, Section::Gallery(_)))
            .count();
        assert_eq!(galleries, 3);
        assert_eq!(content.title, "ASTANA");
    }

    #[test]
    fn business_page_has_contact_form() {
        let content = Variant::Business.load().unwrap();
        assert!(content
            .sections
            .iter()
            .any(|s| matches!(s, Section::Contact(_))));
    }

    #[test]
    fn variant_names_round_trip() {
        assert_eq!(Variant::from_name("business"), Some(Variant::Business));
        assert_eq!(Variant::from_name(" tour "), Some(Variant::Tour));
        assert_eq!(Variant::from_name("admin"), None);
        assert_eq!(Variant::default(), Variant::Tour);
    }

    fn page(sections: &str) -> PageContent {
        let json = format!(
            r#"{{"title":"T","badge":"B","tagline":"L","cta":"Go","sections":{sections},
               "footer":{{"title":"F","tagline":"x","copyright":"c"}}}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn rejects_duplicate_anchor() {
        let content = page(
            r#"[{"kind":"why","id":"why","heading":"a","reasons":[]},
                {"kind":"contact","id":"why","heading":"b","intro":"","submit_label":"s","success":"ok"}]"#,
        );
        assert!(matches!(content.validate(), Err(ContentError::DuplicateAnchor(a)) if a == "why"));
    }

    #[test]
    fn rejects_empty_gallery_and_still_ticker() {
        let empty = page(
            r#"[{"kind":"gallery","heading":"Hotels","intro":"","accent":"","places":[]}]"#,
        );
        assert!(matches!(empty.validate(), Err(ContentError::EmptyGallery(h)) if h == "Hotels"));

        let still = page(r#"[{"kind":"ticker","text":"A • B","velocity":0}]"#);
        assert!(matches!(still.validate(), Err(ContentError::StillTicker(_))));
    }

    #[test]
    fn unknown_section_kind_is_a_decode_error() {
        let json = r#"{"title":"T","badge":"B","tagline":"L","cta":"Go",
            "sections":[{"kind":"carousel"}],
            "footer":{"title":"F","tagline":"x","copyright":"c"}}"#;
        assert!(serde_json::from_str::<PageContent>(json).is_err());
    }
}
