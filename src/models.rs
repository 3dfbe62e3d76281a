//! Portfolio Models
//!
//! Project records shown on the site. Optional fields drive which sections
//! and buttons are rendered: `None` means the section is hidden.

use serde::{Deserialize, Serialize};

/// A short display fact, e.g. `Status: Live`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// One app in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Route parameter and lookup key
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub long_description: Option<String>,
    pub about: Option<String>,
    pub purpose: Option<String>,
    /// Symbolic icon name, resolved by the icon set
    pub icon: String,
    /// Hex theme color
    pub color: String,
    pub demo_url: Option<String>,
    pub android_url: Option<String>,
    pub web_test_url: Option<String>,
    pub featured_url: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Hero video or image
    pub media_url: String,
    pub screenshots: Option<Vec<String>>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Kind of call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Android,
    WebTest,
    Demo,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Android => "Get it on Google Play",
            LinkKind::WebTest => "Join the Beta",
            LinkKind::Demo => "Live Demo",
        }
    }
}

impl Project {
    /// Present call-to-action links in display order
    pub fn links(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Android, &self.android_url),
            (LinkKind::WebTest, &self.web_test_url),
            (LinkKind::Demo, &self.demo_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|u| (kind, u)))
        .collect()
    }

    pub fn screenshots(&self) -> &[String] {
        self.screenshots.as_deref().unwrap_or_default()
    }

    /// Route to this project's detail page
    pub fn detail_href(&self) -> String {
        format!("/app/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r##"{
            "id": "demo",
            "name": "Demo",
            "tagline": "t",
            "description": "d",
            "icon": "Bell",
            "color": "#000",
            "mediaUrl": "/demo.png"
        }"##
    }

    #[test]
    fn test_optional_fields_absent() {
        let project: Project = serde_json::from_str(minimal_json()).unwrap();
        assert!(project.long_description.is_none());
        assert!(project.features.is_empty());
        assert!(project.stats.is_empty());
        assert!(project.screenshots().is_empty());
        assert!(project.links().is_empty());
    }

    #[test]
    fn test_links_skip_absent_in_order() {
        let mut project: Project = serde_json::from_str(minimal_json()).unwrap();
        project.demo_url = Some("https://demo.example/app".to_string());
        project.android_url = Some("https://play.example/app".to_string());

        let kinds: Vec<LinkKind> = project.links().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![LinkKind::Android, LinkKind::Demo]);
    }

    #[test]
    fn test_detail_href() {
        let project: Project = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(project.detail_href(), "/app/demo");
    }
}
