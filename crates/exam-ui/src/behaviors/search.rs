//! Client-side table filtering
//!
//! Rows of a table are shown or hidden depending on whether any of their data
//! cells contains the search text, ignoring case. The first row holds the
//! headers and is never touched.

use tracing::debug;

use crate::dom::Page;
use crate::error::{PageError, Result};

/// Outcome of one filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    /// Rows left visible (header excluded)
    pub visible: usize,
    /// Rows hidden
    pub hidden: usize,
}

/// Case folding used on both the filter and the cell text
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_uppercase()
}

/// Whether any cell contains `filter`; both sides must already be folded
///
/// Cells are scanned left to right and the scan stops at the first match. An
/// empty filter matches every row, including rows without cells.
#[must_use]
pub fn row_matches<I, S>(filter: &str, cells: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter.is_empty() || cells.into_iter().any(|cell| cell.as_ref().contains(filter))
}

/// Filter the rows of `table` with the folded `filter`
///
/// # Errors
///
/// Returns an error if a row's visibility cannot be written.
pub fn filter_rows<P: Page>(page: &P, table: &P::Element, filter: &str) -> Result<SearchSummary> {
    let mut summary = SearchSummary::default();

    for row in page.elements_by_tag(table, "tr").iter().skip(1) {
        let cells = page
            .elements_by_tag(row, "td")
            .into_iter()
            .map(|cell| fold_case(&page.text_content(&cell)));

        if row_matches(filter, cells) {
            page.set_style_property(row, "display", "")?;
            summary.visible = summary.visible.saturating_add(1);
        } else {
            page.set_style_property(row, "display", "none")?;
            summary.hidden = summary.hidden.saturating_add(1);
        }
    }

    Ok(summary)
}

/// Filter the table `table_id` by the current text of the input `input_id`
///
/// # Errors
///
/// Returns [`PageError::ElementNotFound`] if either element is missing, or a
/// DOM error if a row cannot be updated. Nothing is changed when an element
/// is missing.
pub fn search_table<P: Page>(page: &P, input_id: &str, table_id: &str) -> Result<SearchSummary> {
    let input = page
        .element_by_id(input_id)
        .ok_or_else(|| PageError::not_found(input_id))?;
    let table = page
        .element_by_id(table_id)
        .ok_or_else(|| PageError::not_found(table_id))?;

    let filter = fold_case(&page.field_value(&input));
    let summary = filter_rows(page, &table, &filter)?;

    debug!(
        table = table_id,
        filter = %filter,
        visible = summary.visible,
        hidden = summary.hidden,
        "table filtered"
    );
    Ok(summary)
}
