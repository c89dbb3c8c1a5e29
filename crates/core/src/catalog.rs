//! Project catalog loaded from `data/projects.json`
//!
//! The catalog is hand-edited, so parsing is forgiving: numbers are
//! accepted where text is expected, empty strings count as missing, and a
//! malformed group or project degrades to an entry with every field absent.
//! Only a missing or non-array `groups` rejects the whole document.

use std::num::FpCategory;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::error::CatalogError;

/// Top-level catalog document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub groups: Vec<ProjectGroup>,
}

impl Catalog {
    /// Total number of projects across all groups
    pub fn project_count(&self) -> usize {
        self.groups.iter().map(|g| g.projects.len()).sum()
    }
}

/// A collapsible cluster of projects sharing a base folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectGroup {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub folder: Option<String>,
    #[serde(default, deserialize_with = "lenient_projects")]
    pub projects: Vec<Project>,
}

impl ProjectGroup {
    /// Base path for a project's assets: `<folder>/<folderName>` without
    /// trailing slashes
    pub fn asset_path(&self, project: &Project) -> String {
        let joined = format!(
            "{}/{}",
            self.folder.as_deref().unwrap_or_default(),
            project.folder_name.as_deref().unwrap_or_default()
        );
        joined.trim_end_matches('/').to_string()
    }
}

/// One portfolio entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub folder_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub download: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub open_file: Option<String>,
}

/// Parse and validate a catalog document
pub fn parse_catalog(body: &str) -> Result<Catalog, CatalogError> {
    let document: Value = serde_json::from_str(body)?;
    let groups = document
        .get("groups")
        .and_then(Value::as_array)
        .ok_or(CatalogError::InvalidShape)?;

    let catalog = Catalog {
        groups: groups.iter().map(entry::<ProjectGroup>).collect(),
    };
    tracing::debug!(
        groups = catalog.groups.len(),
        projects = catalog.project_count(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// Turn the outcome of the catalog request into a catalog.
///
/// Transport errors (`Network`, `Status`) pass through untouched; a body
/// that arrived is validated with [`parse_catalog`].
pub fn catalog_from_fetch(
    fetched: Result<String, CatalogError>,
) -> Result<Catalog, CatalogError> {
    parse_catalog(&fetched?)
}

/// Deserialize a group or project; anything but an object is blank.
///
/// Derived structs also accept sequences positionally, so arrays must be
/// rejected before serde sees them.
fn entry<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_object() {
        T::deserialize(value).unwrap_or_default()
    } else {
        T::default()
    }
}

/// Text form of a scalar, `None` for anything the page would treat as blank
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => number_text(n),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Integral values print without a fraction (`2024.0` shows as `2024`)
fn number_text(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    n.as_f64()
        .filter(|f| !matches!(f.classify(), FpCategory::Zero | FpCategory::Nan))
        .map(|f| f.to_string())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().filter_map(text_of).collect())
        .unwrap_or_default())
}

fn lenient_projects<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().map(entry::<Project>).collect())
        .unwrap_or_default())
}
