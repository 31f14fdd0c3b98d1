//! Delete confirmation dialog

use tracing::debug;

use crate::config::{BehaviorConfig, ITEM_PLACEHOLDER};
use crate::dom::Page;

/// Confirmation wording for deleting `item_name`
#[must_use]
pub fn delete_prompt(item_name: &str, config: &BehaviorConfig) -> String {
    config.delete_prompt.replace(ITEM_PLACEHOLDER, item_name)
}

/// Ask the user to confirm deleting `item_name`
///
/// Blocks until the prompt is answered. Returns `false` when the user cancels
/// or the prompt cannot be shown.
pub fn confirm_delete<P: Page>(page: &P, item_name: &str, config: &BehaviorConfig) -> bool {
    let accepted = page.confirm(&delete_prompt(item_name, config));
    debug!(item = item_name, accepted, "delete confirmation answered");
    accepted
}
