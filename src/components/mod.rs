//! UI Components
//!
//! Presentational building blocks shared by the page views.

mod navbar;
mod footer;
mod project_icon;
mod media_view;
mod project_card;
mod store_links;
mod stat_list;
mod screenshot_gallery;
mod text_section;

pub use navbar::Navbar;
pub use footer::Footer;
pub use project_icon::ProjectIcon;
pub use media_view::MediaView;
pub use project_card::ProjectCard;
pub use store_links::StoreLinks;
pub use stat_list::StatList;
pub use screenshot_gallery::ScreenshotGallery;
pub use text_section::TextSection;
