//! Loading indicator toggle
//!
//! The indicator is optional markup: pages without it simply ignore the calls.

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::error::Result;

fn set_indicator_display<P: Page>(page: &P, config: &BehaviorConfig, display: &str) -> Result<()> {
    let Some(indicator) = page.element_by_id(&config.loading_id) else {
        debug!(id = %config.loading_id, "no loading indicator on this page");
        return Ok(());
    };
    page.set_style_property(&indicator, "display", display)
}

/// Show the loading indicator
///
/// # Errors
///
/// Returns an error only if the indicator exists and its style cannot be written.
pub fn show_loading<P: Page>(page: &P, config: &BehaviorConfig) -> Result<()> {
    set_indicator_display(page, config, &config.loading_display)
}

/// Hide the loading indicator
///
/// # Errors
///
/// Returns an error only if the indicator exists and its style cannot be written.
pub fn hide_loading<P: Page>(page: &P, config: &BehaviorConfig) -> Result<()> {
    set_indicator_display(page, config, "none")
}

/// Whether the indicator exists and was last shown
#[must_use]
pub fn is_loading_visible<P: Page>(page: &P, config: &BehaviorConfig) -> bool {
    page.element_by_id(&config.loading_id)
        .and_then(|indicator| page.style_property(&indicator, "display"))
        .is_some_and(|display| display == config.loading_display)
}
