//! Catalog Errors
//!
//! Raised while loading the compiled-in catalog. Any of these is fatal at
//! startup; a missing project at lookup time is not an error (see
//! `Catalog::find_by_id`).

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Embedded catalog data is not valid JSON for `Vec<Project>`
    Parse(String),
    /// Entry at this position has an empty id
    EmptyId(usize),
    /// Two entries share an id
    DuplicateId(String),
    /// A required display or asset field is empty
    MissingField { id: String, field: &'static str },
    /// Optional URL field is present but empty or a `#` placeholder
    InvalidUrl { id: String, field: &'static str },
    /// Theme color is not `#rgb` or `#rrggbb`
    InvalidColor { id: String, color: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Catalog parse error: {}", msg),
            CatalogError::EmptyId(idx) => write!(f, "Catalog entry #{} has an empty id", idx),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate project id: {}", id),
            CatalogError::MissingField { id, field } => {
                write!(f, "Project {} is missing {}", id, field)
            }
            CatalogError::InvalidUrl { id, field } => {
                write!(f, "Project {} has an empty or placeholder {}", id, field)
            }
            CatalogError::InvalidColor { id, color } => {
                write!(f, "Project {} has invalid color {}", id, color)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
