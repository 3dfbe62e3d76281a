//! Media Helpers
//!
//! Asset paths in the catalog are stored as written (`/the fold/logo.png`).
//! They are percent-encoded here before going into `src` attributes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in asset paths; `/` is kept as the separator
const ASSET_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// Encode a catalog asset path for use as a URL. External URLs pass through.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('#') {
        return path.to_string();
    }
    utf8_percent_encode(path, ASSET_PATH).to_string()
}

/// Fallback glyph for a symbolic icon name
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Bell" => "🔔",
        "Layers" => "📰",
        _ => "✦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind() {
        assert_eq!(MediaKind::from_url("/notibee/video/Recording 2026-01-24 142438.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("/clip.MOV?x=1"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("/notibee/logo.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("/no-extension"), MediaKind::Image);
    }

    #[test]
    fn test_asset_url_encodes_spaces() {
        assert_eq!(asset_url("/the fold/logo.png"), "/the%20fold/logo.png");
        assert_eq!(asset_url("/a#b?.png"), "/a%23b%3F.png");
    }

    #[test]
    fn test_external_urls_untouched() {
        let url = "https://play.google.com/store/apps/details?id=com.thefold.app";
        assert_eq!(asset_url(url), url);
        assert_eq!(asset_url("#"), "#");
    }

    #[test]
    fn test_icon_glyph() {
        assert_eq!(icon_glyph("Bell"), "🔔");
        assert_eq!(icon_glyph("Unknown"), "✦");
    }
}
