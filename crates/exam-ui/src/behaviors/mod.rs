//! The page behaviors
//!
//! Each behavior is a free function generic over [`crate::dom::Page`], so the
//! same code drives the live browser document and the in-memory one.

pub mod alerts;
pub mod confirm;
pub mod loading;
pub mod search;
pub mod validation;

pub use alerts::{DismissalPlan, dismiss_alerts};
pub use confirm::{confirm_delete, delete_prompt};
pub use loading::{hide_loading, is_loading_visible, show_loading};
pub use search::{SearchSummary, filter_rows, fold_case, row_matches, search_table};
pub use validation::{ValidationReport, inspect_form, is_filled, validate_form};
