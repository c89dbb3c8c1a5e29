/// Why the catalog could not be turned into sections
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Network(String),
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no `groups` array")]
    InvalidShape,
    #[error("could not build project list: {0}")]
    Render(String),
}

impl CatalogError {
    /// Same rule as `Response.ok`: any 2xx passes
    pub const fn check_status(status: u16) -> Result<(), Self> {
        if matches!(status, 200..=299) {
            Ok(())
        } else {
            Err(Self::Status(status))
        }
    }

    /// Text shown in place of the project list
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) | Self::Render(_) => "Error al cargar los proyectos.",
            Self::Status(_) => "No se pudo cargar la lista de proyectos.",
            Self::Parse(_) => "Error al leer los datos de los proyectos.",
            Self::InvalidShape => "Formato de proyectos inválido.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_distinct() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let messages = [
            CatalogError::Network("offline".into()).user_message(),
            CatalogError::Status(404).user_message(),
            CatalogError::Parse(parse_err).user_message(),
            CatalogError::InvalidShape.user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_check_status() {
        for ok in [200, 204, 299] {
            assert!(CatalogError::check_status(ok).is_ok(), "{ok}");
        }
        for bad in [0, 199, 301, 404, 500] {
            assert!(
                matches!(CatalogError::check_status(bad), Err(CatalogError::Status(s)) if s == bad),
                "{bad}"
            );
        }
        assert_eq!(
            CatalogError::check_status(404).unwrap_err().user_message(),
            "No se pudo cargar la lista de proyectos."
        );
    }

    #[test]
    fn test_render_failure_reads_as_load_error() {
        assert_eq!(
            CatalogError::Render("appendChild".into()).user_message(),
            CatalogError::Network("offline".into()).user_message()
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            CatalogError::Status(503).to_string(),
            "catalog request returned HTTP 503"
        );
    }
}
