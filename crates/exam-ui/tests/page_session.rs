//! Integration tests for a full page session
//!
//! These tests mount the default lifecycle on an in-memory exam listing page
//! and drive the behaviors the way the rendered templates do.

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use exam_ui::behaviors::{confirm_delete, hide_loading, search_table, show_loading, validate_form};
use exam_ui::config::{BehaviorConfig, LogLevel};
use exam_ui::dom::{ElementSpec, MemoryPage, NodeId, Page};
use exam_ui::lifecycle::default_lifecycle;
use exam_ui::logging::{ConsoleLayer, ConsoleSink};
use exam_ui::timers::ManualScheduler;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<(Level, String)>>>);

impl ConsoleSink for Capture {
    fn write(&self, level: Level, line: &str) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

impl Capture {
    fn lines(&self) -> Vec<(Level, String)> {
        self.0.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

struct ExamListPage {
    page: Rc<MemoryPage>,
    flash: NodeId,
    loading: NodeId,
    rows: Vec<NodeId>,
}

fn exam_list_page() -> ExamListPage {
    let page = Rc::new(MemoryPage::new());
    let root = page.root();

    let flash = page.append(
        root,
        ElementSpec::new("div")
            .class("alert")
            .class("alert-success")
            .text("Sınav eklendi"),
    );
    let loading = page.append(root, ElementSpec::new("div").id("loading"));

    let form = page.append(root, ElementSpec::new("form").id("exam-form"));
    page.append(form, ElementSpec::new("input").id("course").required());
    page.append(form, ElementSpec::new("input").id("date").required());

    page.append(root, ElementSpec::new("input").id("search"));
    let table = page.append(root, ElementSpec::new("table").id("exam-table"));
    let header = page.append(table, ElementSpec::new("tr"));
    page.append(header, ElementSpec::new("th").text("Ders"));

    let rows = ["Matematik", "Fizik", "Tarih"]
        .into_iter()
        .map(|course| {
            let row = page.append(table, ElementSpec::new("tr"));
            page.append(row, ElementSpec::new("td").text(course));
            row
        })
        .collect();

    ExamListPage {
        page,
        flash,
        loading,
        rows,
    }
}

#[test]
fn test_mount_announces_ready_and_dismisses_alerts() {
    let listing = exam_list_page();
    let scheduler = ManualScheduler::new();
    let capture = Capture::default();
    let subscriber = Registry::default().with(ConsoleLayer::new(capture.clone(), LogLevel::Info));

    tracing::subscriber::with_default(subscriber, || {
        let mut lifecycle = default_lifecycle(
            Rc::clone(&listing.page),
            scheduler.clone(),
            BehaviorConfig::default(),
        );
        assert_eq!(lifecycle.hook_names(), vec!["announce-ready", "dismiss-alerts"]);
        assert_eq!(lifecycle.mount(), 2);
        assert_eq!(lifecycle.mount(), 0);
    });

    assert!(
        capture
            .lines()
            .iter()
            .any(|(level, line)| *level == Level::INFO
                && line.ends_with("Sınav Programı Uygulaması Yüklendi!"))
    );

    assert_eq!(scheduler.pending(), 1);
    scheduler.advance(5499);
    assert!(listing.page.is_attached(&listing.flash));
    scheduler.advance(1);
    assert!(!listing.page.is_attached(&listing.flash));
}

#[test]
fn test_missing_form_is_logged_as_warning() {
    let listing = exam_list_page();
    let capture = Capture::default();
    let subscriber = Registry::default().with(ConsoleLayer::new(capture.clone(), LogLevel::Info));

    let valid = tracing::subscriber::with_default(subscriber, || {
        validate_form(listing.page.as_ref(), "nonexistent", &BehaviorConfig::default())
    });

    assert!(!valid);
    assert!(
        capture
            .lines()
            .iter()
            .any(|(level, line)| *level == Level::WARN
                && line.ends_with("Form bulunamadı: nonexistent"))
    );
}

#[test]
fn test_submit_flow_with_loading_indicator() -> exam_ui::Result<()> {
    let listing = exam_list_page();
    let page = listing.page.as_ref();
    let config = BehaviorConfig::default();

    assert!(!validate_form(page, "exam-form", &config));

    let course = page
        .element_by_id("course")
        .ok_or_else(|| exam_ui::PageError::not_found("course"))?;
    let date = page
        .element_by_id("date")
        .ok_or_else(|| exam_ui::PageError::not_found("date"))?;
    page.set_value(course, "Fizik");
    page.set_value(date, "2026-06-15");
    assert!(validate_form(page, "exam-form", &config));

    show_loading(page, &config)?;
    assert_eq!(page.style_property(&listing.loading, "display").as_deref(), Some("flex"));
    hide_loading(page, &config)?;
    assert_eq!(page.style_property(&listing.loading, "display").as_deref(), Some("none"));
    Ok(())
}

#[test]
fn test_search_then_delete_confirmation() -> exam_ui::Result<()> {
    let listing = exam_list_page();
    let page = listing.page.as_ref();
    let search = page
        .element_by_id("search")
        .ok_or_else(|| exam_ui::PageError::not_found("search"))?;

    page.set_value(search, "fiz");
    let summary = search_table(page, "search", "exam-table")?;
    assert_eq!((summary.visible, summary.hidden), (1, 2));

    let shown: Vec<_> = listing
        .rows
        .iter()
        .filter(|row| page.style_property(*row, "display").is_none())
        .collect();
    assert_eq!(shown, vec![&listing.rows[1]]);

    page.answer_next_confirm(true);
    assert!(confirm_delete(page, "Fizik", &BehaviorConfig::default()));
    assert_eq!(page.prompts(), vec!["Fizik silinecek. Emin misiniz?"]);
    Ok(())
}
