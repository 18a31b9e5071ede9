use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A deck: an ordered, immutable sequence of slides plus presentation-level
/// metadata. Constructed once at load time and never mutated during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Branding strip text shown along the bottom edge of every slide card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    pub slides: Vec<Slide>,
}

/// One slide, discriminated by its `type` tag. An unrecognized tag fails
/// deserialization outright; there is no fallback variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Title {
        id: u32,
        title: String,
        subtitle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        eyebrow: Option<String>,
        /// Final slides swap the watermark for the radiating thank-you decor.
        #[serde(default, rename = "final", skip_serializing_if = "std::ops::Not::not")]
        is_final: bool,
    },
    Bullets {
        id: u32,
        title: String,
        points: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accent: Option<String>,
        /// One decorative glyph per point; points beyond the list fall back
        /// to a numbered badge.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        icons: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
    Quote {
        id: u32,
        title: String,
        quote: String,
        attribution: String,
    },
    TwoCol {
        id: u32,
        title: String,
        left: Column,
        right: Column,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
    Profile {
        id: u32,
        title: String,
        name: String,
        role: String,
        org: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        left: Column,
        right: Column,
    },
}

/// A labeled column of points, used by two-col and profile slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub heading: String,
    pub points: Vec<String>,
}

/// Variant tag, used for the per-slide top band and category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Bullets,
    Quote,
    TwoCol,
    Profile,
}

impl Slide {
    pub fn id(&self) -> u32 {
        match self {
            Slide::Title { id, .. }
            | Slide::Bullets { id, .. }
            | Slide::Quote { id, .. }
            | Slide::TwoCol { id, .. }
            | Slide::Profile { id, .. } => *id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Slide::Title { title, .. }
            | Slide::Bullets { title, .. }
            | Slide::Quote { title, .. }
            | Slide::TwoCol { title, .. }
            | Slide::Profile { title, .. } => title,
        }
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Title { .. } => SlideKind::Title,
            Slide::Bullets { .. } => SlideKind::Bullets,
            Slide::Quote { .. } => SlideKind::Quote,
            Slide::TwoCol { .. } => SlideKind::TwoCol,
            Slide::Profile { .. } => SlideKind::Profile,
        }
    }

    /// Badge label shown in the slide card's top-right corner.
    pub fn badge_label(&self) -> &str {
        match self {
            Slide::Title { is_final: true, .. } => "Wrap-Up",
            Slide::Title { .. } => "Welcome",
            Slide::Bullets { accent, .. } => accent.as_deref().unwrap_or("Info"),
            Slide::Quote { .. } => "Quote",
            Slide::TwoCol { .. } => "Comparison",
            Slide::Profile { .. } => "Speaker",
        }
    }
}

/// The deck source text embedded in the binary.
pub const BUILTIN_DECK: &str = include_str!("../../../sample-decks/city-archive.yaml");

impl Deck {
    /// The deck shipped inside the binary, shown when no file is given.
    /// The asset is validated by tests; a parse failure here is a build
    /// defect, not a runtime condition.
    pub fn builtin() -> Self {
        serde_yaml::from_str(BUILTIN_DECK).expect("embedded sample deck is valid YAML")
    }

    pub fn parse(content: &str) -> Result<Self> {
        let deck: Deck = serde_yaml::from_str(content).context("failed to parse deck")?;
        if deck.slides.is_empty() {
            anyhow::bail!("deck contains no slides");
        }
        Ok(deck)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled deck")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_parses() {
        let deck = Deck::builtin();
        assert!(deck.len() >= 8, "expected at least 8 slides, got {}", deck.len());
        assert_eq!(deck.theme.as_deref(), Some("warm"));
        assert!(matches!(deck.slides[0], Slide::Title { .. }));
        assert!(matches!(
            deck.slides.last(),
            Some(Slide::Title { is_final: true, .. })
        ));
    }

    #[test]
    fn builtin_deck_covers_every_variant() {
        let deck = Deck::builtin();
        for kind in [
            SlideKind::Title,
            SlideKind::Bullets,
            SlideKind::Quote,
            SlideKind::TwoCol,
            SlideKind::Profile,
        ] {
            assert!(
                deck.slides.iter().any(|s| s.kind() == kind),
                "sample deck is missing a {kind:?} slide"
            );
        }
    }

    #[test]
    fn parses_minimal_title_slide() {
        let yaml = "slides:\n  - type: title\n    id: 1\n    title: Hello\n    subtitle: World\n";
        let deck = Deck::parse(yaml).unwrap();
        assert_eq!(deck.len(), 1);
        let Slide::Title {
            id,
            eyebrow,
            is_final,
            ..
        } = &deck.slides[0]
        else {
            panic!("expected a title slide");
        };
        assert_eq!(*id, 1);
        assert!(eyebrow.is_none());
        assert!(!is_final);
    }

    #[test]
    fn parses_two_col_tag() {
        let yaml = "slides:\n  - type: two-col\n    id: 4\n    title: Compare\n    left:\n      heading: A\n      points: [one]\n    right:\n      heading: B\n      points: [two]\n";
        let deck = Deck::parse(yaml).unwrap();
        assert_eq!(deck.slides[0].kind(), SlideKind::TwoCol);
    }

    #[test]
    fn unknown_variant_tag_is_fatal() {
        let yaml = "slides:\n  - type: hologram\n    id: 1\n    title: Nope\n";
        assert!(Deck::parse(yaml).is_err());
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(Deck::parse("slides: []\n").is_err());
    }

    #[test]
    fn duplicate_ids_are_tolerated() {
        let yaml = "slides:\n  - type: title\n    id: 7\n    title: A\n    subtitle: a\n  - type: title\n    id: 7\n    title: B\n    subtitle: b\n";
        let deck = Deck::parse(yaml).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0].id(), deck.slides[1].id());
    }

    #[test]
    fn badge_labels_follow_variant() {
        let deck = Deck::builtin();
        let badges: Vec<&str> = deck.slides.iter().map(|s| s.badge_label()).collect();
        assert_eq!(badges[0], "Welcome");
        assert_eq!(badges.last(), Some(&"Wrap-Up"));
        assert!(badges.contains(&"Speaker"));
        assert!(badges.contains(&"Comparison"));
    }
}
