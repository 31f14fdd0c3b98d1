//! Behavioral tests for table search

use crate::behaviors::{SearchSummary, search_table};
use crate::dom::{ElementSpec, MemoryPage, NodeId, Page};
use crate::error::{PageError, Result};

struct ScheduleTable {
    page: MemoryPage,
    input: NodeId,
    header: NodeId,
    rows: Vec<NodeId>,
}

fn schedule_table(rows: &[[&str; 3]]) -> ScheduleTable {
    let page = MemoryPage::new();
    let input = page.append(page.root(), ElementSpec::new("input").id("search"));
    let table = page.append(page.root(), ElementSpec::new("table").id("exams"));

    let header = page.append(table, ElementSpec::new("tr"));
    for title in ["Ders", "Gözetmen", "Derslik"] {
        page.append(header, ElementSpec::new("th").text(title));
    }

    let rows = rows
        .iter()
        .map(|cells| {
            let row = page.append(table, ElementSpec::new("tr"));
            for cell in cells {
                page.append(row, ElementSpec::new("td").text(*cell));
            }
            row
        })
        .collect();

    ScheduleTable {
        page,
        input,
        header,
        rows,
    }
}

fn default_rows() -> ScheduleTable {
    schedule_table(&[
        ["Matematik", "Ayşe Yılmaz", "A-101"],
        ["Fizik", "John Doe", "B-204"],
        ["Kimya", "Mehmet Kaya", "C-310"],
    ])
}

fn visible(table: &ScheduleTable, row: NodeId) -> bool {
    table.page.style_property(&row, "display").as_deref() != Some("none")
}

#[test]
fn given_empty_filter_when_searching_then_all_rows_are_visible() -> Result<()> {
    // Given
    let table = default_rows();

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary, SearchSummary { visible: 3, hidden: 0 });
    assert!(table.rows.iter().all(|row| visible(&table, *row)));
    Ok(())
}

#[test]
fn given_filter_matching_second_cell_of_row_two_then_only_row_two_shows() -> Result<()> {
    // Given
    let table = default_rows();
    table.page.set_value(table.input, "john");

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary, SearchSummary { visible: 1, hidden: 2 });
    assert!(!visible(&table, table.rows[0]));
    assert!(visible(&table, table.rows[1]));
    assert!(!visible(&table, table.rows[2]));
    Ok(())
}

#[test]
fn given_any_filter_when_searching_then_header_row_is_untouched() -> Result<()> {
    // Given
    let table = default_rows();
    table.page.set_value(table.input, "no such exam");

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary.hidden, 3);
    assert_eq!(table.page.style_property(&table.header, "display"), None);
    Ok(())
}

#[test]
fn given_filtered_table_when_filter_cleared_then_rows_reappear() -> Result<()> {
    // Given
    let table = default_rows();
    table.page.set_value(table.input, "kimya");
    search_table(&table.page, "search", "exams")?;

    // When
    table.page.set_value(table.input, "");
    search_table(&table.page, "search", "exams")?;

    // Then
    assert!(table.rows.iter().all(|row| visible(&table, *row)));
    assert!(
        table
            .rows
            .iter()
            .all(|row| table.page.style_property(row, "display").is_none())
    );
    Ok(())
}

#[test]
fn given_partial_text_when_searching_then_substring_matches() -> Result<()> {
    // Given
    let table = default_rows();
    table.page.set_value(table.input, "-2");

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary.visible, 1);
    assert!(visible(&table, table.rows[1]));
    Ok(())
}

#[test]
fn given_filter_only_in_header_when_searching_then_no_row_matches() -> Result<()> {
    // Given
    let table = default_rows();
    table.page.set_value(table.input, "gözetmen");

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary, SearchSummary { visible: 0, hidden: 3 });
    Ok(())
}

#[test]
fn given_missing_table_when_searching_then_reports_not_found() {
    // Given
    let table = default_rows();

    // When
    let result = search_table(&table.page, "search", "missing");

    // Then
    assert_eq!(result, Err(PageError::not_found("missing")));
    assert!(table.rows.iter().all(|row| visible(&table, *row)));
}

#[test]
fn given_missing_input_when_searching_then_reports_not_found() {
    // Given
    let table = default_rows();

    // When
    let result = search_table(&table.page, "nope", "exams");

    // Then
    assert_eq!(result, Err(PageError::not_found("nope")));
}

#[test]
fn given_header_only_table_when_searching_then_nothing_changes() -> Result<()> {
    // Given
    let table = schedule_table(&[]);
    table.page.set_value(table.input, "x");

    // When
    let summary = search_table(&table.page, "search", "exams")?;

    // Then
    assert_eq!(summary, SearchSummary::default());
    Ok(())
}
