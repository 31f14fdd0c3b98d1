//! JavaScript entry points
//!
//! These are the names the server-rendered templates call from inline
//! handlers (`onsubmit="return validateForm('exam-form')"` and friends).
//! Nothing here throws: failures are logged and answered conservatively.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::behaviors::{confirm_delete, hide_loading, search_table, show_loading, validate_form};
use crate::config::BehaviorConfig;
use crate::dom::WebPage;
use crate::error::{PageError, Result};
use crate::lifecycle::default_lifecycle;
use crate::logging;
use crate::timers::BrowserScheduler;

/// Page global holding configuration overrides
pub const CONFIG_GLOBAL: &str = "examUiConfig";

thread_local! {
    static CONFIG: RefCell<BehaviorConfig> = RefCell::new(BehaviorConfig::default());
}

fn config() -> BehaviorConfig {
    CONFIG.with(|config| config.borrow().clone())
}

fn page() -> Option<WebPage> {
    WebPage::current()
        .map_err(|e| warn!("page unavailable: {e}"))
        .ok()
}

fn read_page_config(page: &WebPage) -> Result<Option<BehaviorConfig>> {
    let value = js_sys::Reflect::get(page.window(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| PageError::Config(format!("cannot read {CONFIG_GLOBAL}: {e:?}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let config: BehaviorConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| PageError::Config(format!("{CONFIG_GLOBAL}: {e}")))?;
    config.validate()?;
    Ok(Some(config))
}

/// Module start: panic hook, logging, configuration, page-ready lifecycle
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(page) = WebPage::current() else {
        logging::install(BehaviorConfig::default().log_level);
        warn!("no document to attach page behaviors to");
        return;
    };

    let loaded = read_page_config(&page);
    let config = loaded.clone().ok().flatten().unwrap_or_default();
    logging::install(config.log_level);
    if let Err(e) = loaded {
        warn!("using default configuration: {e}");
    }
    CONFIG.with(|current| *current.borrow_mut() = config.clone());

    let mut lifecycle = default_lifecycle(Rc::new(page.clone()), BrowserScheduler, config);
    if let Err(e) = page.when_ready(move || {
        lifecycle.mount();
    }) {
        warn!("page-ready hook not registered: {e}");
    }
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(form_id: &str) -> bool {
    page().is_some_and(|page| validate_form(&page, form_id, &config()))
}

#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete_js(item_name: &str) -> bool {
    page().is_some_and(|page| confirm_delete(&page, item_name, &config()))
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading_js() {
    let Some(page) = page() else { return };
    if let Err(e) = show_loading(&page, &config()) {
        warn!("showLoading failed: {e}");
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading_js() {
    let Some(page) = page() else { return };
    if let Err(e) = hide_loading(&page, &config()) {
        warn!("hideLoading failed: {e}");
    }
}

#[wasm_bindgen(js_name = searchTable)]
pub fn search_table_js(input_id: &str, table_id: &str) {
    let Some(page) = page() else { return };
    if let Err(e) = search_table(&page, input_id, table_id) {
        warn!("searchTable failed: {e}");
    }
}
