//! Browser-facing half of the site: pages, shared components and the
//! reactive hooks that drive scroll reveals and counters.

pub mod api;
pub mod common;
pub mod header;
pub mod icon;
pub mod motion;
pub mod overlay;
pub mod pages;
pub mod site;

pub use header::Header;
pub use icon::{Icon, icons};
pub use motion::provide_motion_config;
pub use overlay::provide_overlay_context;
pub use site::provide_site_context;
