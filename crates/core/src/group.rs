//! Group sections and their expand/collapse state

use crate::card::{CardView, Layout};
use crate::catalog::Catalog;

pub const TITLE_FALLBACK: &str = "Grupo sin título";

/// Expanded/collapsed state of a group body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupToggle {
    #[default]
    Expanded,
    Collapsed,
}

impl GroupToggle {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Header icon: minus sign when open, plus when closed
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Expanded => "\u{2212}",
            Self::Collapsed => "+",
        }
    }

    pub const fn aria_expanded(self) -> &'static str {
        match self {
            Self::Expanded => "true",
            Self::Collapsed => "false",
        }
    }

    /// CSS `display` value for the body
    pub const fn display(self) -> &'static str {
        match self {
            Self::Expanded => "block",
            Self::Collapsed => "none",
        }
    }
}

/// One rendered group with its cards in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub description: Option<String>,
    pub cards: Vec<CardView>,
}

impl Layout {
    pub fn sections(&self, catalog: &Catalog) -> Vec<SectionView> {
        catalog
            .groups
            .iter()
            .map(|group| SectionView {
                title: group
                    .title
                    .clone()
                    .unwrap_or_else(|| TITLE_FALLBACK.to_string()),
                description: group.description.clone(),
                cards: group
                    .projects
                    .iter()
                    .map(|project| self.card(group, project))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn catalog_json(groups: usize, projects: usize) -> String {
        let project = r#"{"name": "p", "folderName": "f", "download": "p.zip"}"#;
        let projects = vec![project; projects].join(",");
        let group = format!(r#"{{"title": "g", "folder": "d", "projects": [{projects}]}}"#);
        format!(r#"{{"groups": [{}]}}"#, vec![group; groups].join(","))
    }

    #[test]
    fn test_section_and_card_counts() {
        for (n, m) in [(0, 0), (1, 1), (3, 4), (2, 0)] {
            let catalog = parse_catalog(&catalog_json(n, m)).unwrap();
            let sections = Layout::default().sections(&catalog);
            assert_eq!(sections.len(), n);
            let cards: usize = sections.iter().map(|s| s.cards.len()).sum();
            assert_eq!(cards, n * m);
        }
    }

    #[test]
    fn test_section_title_fallback_and_description() {
        let catalog =
            parse_catalog(r#"{"groups": [{"description": "Cosas"}, {"title": "Web"}]}"#).unwrap();
        let sections = Layout::default().sections(&catalog);
        assert_eq!(sections[0].title, TITLE_FALLBACK);
        assert_eq!(sections[0].description.as_deref(), Some("Cosas"));
        assert_eq!(sections[1].title, "Web");
        assert_eq!(sections[1].description, None);
    }

    #[test]
    fn test_cards_keep_catalog_order() {
        let catalog = parse_catalog(
            r#"{"groups": [{"projects": [{"name": "a"}, {"name": "b"}, {"name": "c"}]}]}"#,
        )
        .unwrap();
        let names: Vec<_> = Layout::default().sections(&catalog)[0]
            .cards
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_starts_expanded_and_flips() {
        let state = GroupToggle::default();
        assert_eq!(state, GroupToggle::Expanded);
        assert_eq!(state.glyph(), "−");
        assert_eq!(state.aria_expanded(), "true");

        let closed = state.toggled();
        assert_eq!(closed.glyph(), "+");
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.display(), "none");
        assert_eq!(closed.toggled(), GroupToggle::Expanded);
    }
}
