//! Card view model: what a single project renders as
//!
//! `Layout` decides every piece of text, path and link on a card so the
//! DOM layer only has to copy fields into elements.

use crate::catalog::{Project, ProjectGroup};

pub const NAME_FALLBACK: &str = "Proyecto sin nombre";
pub const PREVIEW_LABEL: &str = "Ver en navegador";
pub const DOWNLOAD_LABEL: &str = "Descargar proyecto (.zip)";
/// `rel` for every link that opens a new tab
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// Card layout settings shared by every card on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Folder name whose projects get an in-browser preview link
    pub preview_folder: String,
    /// Per-project description file, relative to the asset path
    pub info_file: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            preview_folder: "neon-dodge".to_string(),
            info_file: "info.txt".to_string(),
        }
    }
}

/// Optional project thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Opens the project's entry file in a new tab
    Preview,
    /// Relative archive, fetched with the `download` attribute
    Download,
    /// Absolute archive URL, opened in a new tab
    ExternalDownload,
}

/// The single link a card may carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub kind: ActionKind,
    pub href: String,
    pub label: &'static str,
}

impl ActionLink {
    pub const fn opens_new_tab(&self) -> bool {
        matches!(self.kind, ActionKind::Preview | ActionKind::ExternalDownload)
    }

    pub const fn forces_download(&self) -> bool {
        matches!(self.kind, ActionKind::Download)
    }
}

/// Everything needed to paint one project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub meta: String,
    pub thumbnail: Option<Thumbnail>,
    pub tags: Vec<String>,
    pub action: Option<ActionLink>,
    /// Where the description text lives
    pub info_url: String,
}

impl Layout {
    /// Lay out one project of `group`
    pub fn card(&self, group: &ProjectGroup, project: &Project) -> CardView {
        let asset_path = group.asset_path(project);

        let thumbnail = project.image.as_ref().map(|image| Thumbnail {
            src: format!("{asset_path}/{image}"),
            alt: format!(
                "Vista previa de {}",
                project.name.as_deref().unwrap_or("proyecto")
            ),
        });

        CardView {
            name: project
                .name
                .clone()
                .unwrap_or_else(|| NAME_FALLBACK.to_string()),
            meta: metadata_line(project),
            thumbnail,
            tags: project.tech.clone(),
            action: self.action_for(project, &asset_path),
            info_url: format!("{asset_path}/{}", self.info_file),
        }
    }

    /// Pick the card's link.
    ///
    /// Preview wins for the reserved folder when an entry file is declared;
    /// otherwise a declared download gets a link. A project with neither has
    /// no link at all.
    pub fn action_for(&self, project: &Project, asset_path: &str) -> Option<ActionLink> {
        let is_preview = project.folder_name.as_deref() == Some(self.preview_folder.as_str());

        if let (true, Some(open_file)) = (is_preview, project.open_file.as_deref()) {
            return Some(ActionLink {
                kind: ActionKind::Preview,
                href: format!("{asset_path}/{open_file}"),
                label: PREVIEW_LABEL,
            });
        }

        let download = project.download.as_deref()?;
        let link = if is_full_url(download) {
            ActionLink {
                kind: ActionKind::ExternalDownload,
                href: download.to_string(),
                label: DOWNLOAD_LABEL,
            }
        } else {
            ActionLink {
                kind: ActionKind::Download,
                href: format!("{asset_path}/{download}"),
                label: DOWNLOAD_LABEL,
            }
        };
        Some(link)
    }
}

/// `year – semester · status`, leaving out separators for missing parts
pub fn metadata_line(project: &Project) -> String {
    let year = project.year.as_deref().unwrap_or_default();
    let semester = project.semester.as_deref().unwrap_or_default();

    let mut line = String::from(year);
    if !year.is_empty() && !semester.is_empty() {
        line.push_str(" – ");
    }
    line.push_str(semester);
    if let Some(status) = project.status.as_deref() {
        line.push_str(" · ");
        line.push_str(status);
    }
    line
}

/// `http://` or `https://`, any case
fn is_full_url(target: &str) -> bool {
    let has_prefix = |prefix: &str| {
        target
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    has_prefix("http://") || has_prefix("https://")
}
