//! Menu filtering
//!
//! - **filter**: pure engine turning a tagged catalog plus a dietary
//!   profile into the subset of items safe for that user
//! - **service**: store-backed host attaching warning labels for display

pub mod filter;
pub mod service;

pub use filter::{compute_warnings, filter_menu, is_safe_for_all, item_permitted};
pub use service::{MenuEntry, MenuService};
