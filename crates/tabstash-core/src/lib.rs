//! tabstash core: collect page URLs into a persisted list with tracking
//! parameters stripped, then copy or clear the list.

pub mod config;
pub mod logging;

pub mod clipboard;
pub mod confirm;
pub mod list;
pub mod notice;
pub mod render;
pub mod store;
pub mod url_clean;

pub use list::ListController;
pub use url_clean::clean;
