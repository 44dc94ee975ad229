//! Folder hierarchy construction and queries.

pub mod filter;
pub mod hierarchy;
pub mod navigation;
pub mod recent;

pub use filter::filter;
pub use hierarchy::{build, build_with_counts};
pub use navigation::{breadcrumbs, move_targets};
pub use recent::{DEFAULT_RECENT_LIMIT, recent};
