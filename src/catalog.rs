//! Project Catalog
//!
//! The fixed, ordered list of projects. Built once at startup from the
//! embedded `data/projects.json` and never mutated afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::models::Project;

const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Read-only project list, cheap to clone
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Arc<[Project]>,
}

impl Catalog {
    /// Parse and validate the embedded catalog
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(PROJECTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Validate ids, required fields and colors, keeping the given order
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (idx, project) in projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            require(project, "name", &project.name)?;
            require(project, "mediaUrl", &project.media_url)?;
            check_urls(project)?;
            if !is_hex_color(&project.color) {
                return Err(CatalogError::InvalidColor {
                    id: project.id.clone(),
                    color: project.color.clone(),
                });
            }
        }

        Ok(Self { projects: projects.into() })
    }

    /// All projects in catalog order
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by id. `None` for ids that come from a URL but match nothing.
    pub fn find_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn require(project: &Project, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField { id: project.id.clone(), field });
    }
    Ok(())
}

/// Present URLs must point somewhere; absence is how a button is hidden
fn check_urls(project: &Project) -> Result<(), CatalogError> {
    let fields = [
        ("demoUrl", &project.demo_url),
        ("androidUrl", &project.android_url),
        ("webTestUrl", &project.web_test_url),
        ("featuredUrl", &project.featured_url),
        ("logoUrl", &project.logo_url),
    ];
    for (field, url) in fields {
        if let Some(url) = url {
            let url = url.trim();
            if url.is_empty() || url == "#" {
                return Err(CatalogError::InvalidUrl { id: project.id.clone(), field });
            }
        }
    }
    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
