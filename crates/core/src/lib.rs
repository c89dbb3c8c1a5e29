//! Platform-independent core of the folio portfolio page
//!
//! Parses the project catalog, lays it out into section and card view
//! models, and holds the theme preference logic. Nothing in here touches
//! the DOM; `folio-ui` turns these values into nodes.

pub mod card;
pub mod catalog;
pub mod description;
pub mod error;
pub mod group;
pub mod theme;

pub use card::{metadata_line, ActionKind, ActionLink, CardView, Layout, Thumbnail};
pub use catalog::{catalog_from_fetch, parse_catalog, Catalog, Project, ProjectGroup};
pub use description::Description;
pub use error::CatalogError;
pub use group::{GroupToggle, SectionView};
pub use theme::{ThemeController, ThemePreference, ThemeStore};
