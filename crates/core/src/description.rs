/// State of a card's description paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Loading,
    Loaded(String),
    /// File exists but holds only whitespace
    Empty,
    /// Fetch failed or the file is absent
    Missing,
}

impl Description {
    /// Outcome of a description fetch; `None` means the file could not be read
    pub fn from_body(body: Option<&str>) -> Self {
        match body.map(str::trim) {
            None => Self::Missing,
            Some("") => Self::Empty,
            Some(text) => Self::Loaded(text.to_string()),
        }
    }

    /// Outcome of a description request; any error means no file
    pub fn from_fetch<E>(fetched: Result<String, E>) -> Self {
        Self::from_body(fetched.ok().as_deref())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Loading => "Cargando descripción...",
            Self::Loaded(text) => text,
            Self::Empty => "Sin descripción.",
            Self::Missing => "Sin descripción (no se encontró info.txt).",
        }
    }
}
