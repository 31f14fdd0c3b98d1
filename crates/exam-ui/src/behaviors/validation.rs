//! Required-field form validation
//!
//! A client-side pre-check only: empty required fields get the danger border,
//! filled ones get the default border back. The server still enforces
//! requiredness.

use tracing::{debug, warn};

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::error::{PageError, Result};

/// Outcome of one validation pass over a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Number of required fields visited
    pub checked: usize,
    /// Labels of the empty required fields, in document order
    pub invalid: Vec<String>,
}

impl ValidationReport {
    /// True when no required field was empty
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Whether a field value counts as filled in
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate the required fields of the form with id `form_id`
///
/// A missing form is logged and reported as invalid.
pub fn validate_form<P: Page>(page: &P, form_id: &str, config: &BehaviorConfig) -> bool {
    match inspect_form(page, form_id, config) {
        Ok(report) => report.is_valid(),
        Err(PageError::ElementNotFound { id }) => {
            warn!("Form bulunamadı: {id}");
            false
        }
        Err(e) => {
            warn!(form = form_id, "form validation failed: {e}");
            false
        }
    }
}

/// Validate a form and report which required fields are empty
///
/// Every required field is visited so each one gets its border updated.
///
/// # Errors
///
/// Returns [`PageError::ElementNotFound`] if no element has id `form_id`, or
/// a DOM error if the fields cannot be queried.
pub fn inspect_form<P: Page>(
    page: &P,
    form_id: &str,
    config: &BehaviorConfig,
) -> Result<ValidationReport> {
    let form = page
        .element_by_id(form_id)
        .ok_or_else(|| PageError::not_found(form_id))?;
    let fields = page.select_within(&form, &config.required_selector)?;

    let mut report = ValidationReport {
        checked: fields.len(),
        invalid: Vec::new(),
    };

    for (position, field) in fields.iter().enumerate() {
        let filled = is_filled(&page.field_value(field));
        let color = if filled {
            &config.valid_border_color
        } else {
            &config.invalid_border_color
        };
        page.set_style_property(field, "border-color", color)?;

        if !filled {
            report.invalid.push(field_label(page, field, position));
        }
    }

    debug!(
        form = form_id,
        checked = report.checked,
        invalid = report.invalid.len(),
        "form validated"
    );
    Ok(report)
}

fn field_label<P: Page>(page: &P, field: &P::Element, position: usize) -> String {
    page.attribute(field, "id")
        .filter(|id| !id.is_empty())
        .or_else(|| page.attribute(field, "name").filter(|n| !n.is_empty()))
        .unwrap_or_else(|| format!("#{position}"))
}
