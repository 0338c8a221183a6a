//! Catalogue integration tests
//!
//! Exercises the view-model properties end to end over the bundled data,
//! plus dataset overrides and the submission path against the mock client.

use geocat::catalog::{Catalog, CatalogView, PAGE_SIZE, Tool};
use geocat::config::{Config, DataConfig};
use geocat::content::{Announcement, load_contributors};
use geocat::submit::{ContactMessage, MockSubmitter, SubmissionPayload, Submitter};
use std::io::Write;

fn tool(name: &str, tags: &[&str]) -> Tool {
    Tool {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

/// Integration test: the bundled dataset loads and feeds the view model
#[test]
fn test_bundled_data_drives_view() {
    let catalog = Catalog::bundled().unwrap();
    let total = catalog.len();
    assert!(total > 0);

    let view = CatalogView::new(catalog.into_tools());
    assert_eq!(view.total(), total);
    assert!(!view.tags().is_empty());

    // Unfiltered, the view exposes at most one page
    assert!(view.visible().len() <= PAGE_SIZE);
    assert_eq!(view.filtered_len(), total);
}

/// Integration test: filtering is a subset and idempotent over real data
#[test]
fn test_filter_subset_and_idempotent() {
    let catalog = Catalog::bundled().unwrap();
    let mut view = CatalogView::new(catalog.into_tools());

    view.set_query("seis".to_string());
    let first: Vec<String> = view.filtered().iter().map(|t| t.name.clone()).collect();
    assert!(first.len() <= view.total());

    // Filtering the already-filtered set with the same query is a fixpoint
    let refiltered: Vec<Tool> = view.filtered().into_iter().cloned().collect();
    let mut again = CatalogView::new(refiltered);
    again.set_query("seis".to_string());
    let second: Vec<String> = again.filtered().iter().map(|t| t.name.clone()).collect();
    assert_eq!(first, second);
}

/// Integration test: clearing filters restores the full sorted list
#[test]
fn test_clear_restores_sorted_list() {
    let catalog = Catalog::bundled().unwrap();
    let tools = catalog.into_tools();

    let mut expected: Vec<String> = tools.iter().map(|t| t.name.clone()).collect();
    expected.sort_by_key(|name| name.to_lowercase());

    let mut view = CatalogView::new(tools);
    view.set_query("gis".to_string());
    view.select_tag(Some("python".to_string()));
    view.clear_filters();

    let names: Vec<String> = view.filtered().iter().map(|t| t.name.clone()).collect();
    assert_eq!(names, expected);
}

/// Integration test: pagination walks 20 → 40 → 45 over 45 records
#[test]
fn test_pagination_steps() {
    let tools: Vec<Tool> = (0..45).map(|i| tool(&format!("tool-{:03}", i), &[])).collect();
    let mut view = CatalogView::new(tools);

    assert_eq!(view.visible().len(), 20);
    view.show_more();
    assert_eq!(view.visible_count(), 40);
    view.show_more();
    assert_eq!(view.visible_count(), 45);
    assert!(!view.can_show_more());

    // Any filter change snaps back to the first page
    view.set_query("tool".to_string());
    assert_eq!(view.visible_count(), PAGE_SIZE);
}

/// Integration test: visible_count stays within its bounds
#[test]
fn test_visible_count_bounds() {
    let tools: Vec<Tool> = (0..45).map(|i| tool(&format!("tool-{:03}", i), &["bulk"])).collect();
    let mut view = CatalogView::new(tools);

    for _ in 0..5 {
        view.show_more();
        let len = view.filtered_len();
        assert!(view.visible_count() >= view.page_size());
        assert!(view.visible_count() <= len.max(view.page_size()));
    }

    view.select_tag(Some("bulk".to_string()));
    assert_eq!(view.visible_count(), view.page_size());
}

/// Integration test: tag vocabulary is unique and ascending over real data
#[test]
fn test_tag_vocabulary_sorted_unique() {
    let catalog = Catalog::bundled().unwrap();
    let view = CatalogView::new(catalog.into_tools());

    let tags = view.tags();
    let mut sorted = tags.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(tags, sorted.as_slice());
}

/// Integration test: a dataset override replaces the bundled list
#[test]
fn test_dataset_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Alpha", "tags": ["gis"]}}, {{"name": "Beta", "tags": ["seismic", "gis"]}}]"#
    )
    .unwrap();

    let data = DataConfig {
        tools_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let catalog = Catalog::load(&data).unwrap();
    let mut view = CatalogView::new(catalog.into_tools());

    view.select_tag(Some("gis".to_string()));
    let names: Vec<&str> = view.filtered().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    view.clear_filters();
    view.set_query("beta".to_string());
    let names: Vec<&str> = view.filtered().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Beta"]);
}

/// Integration test: bundled announcement and contributors parse
#[test]
fn test_site_content_loads() {
    let data = DataConfig::default();
    let announcement = Announcement::load(&data).unwrap();
    // The bundled banner is configured active with a CTA
    assert!(announcement.is_active());
    assert!(announcement.cta().is_some());

    let contributors = load_contributors(&data).unwrap();
    assert!(!contributors.is_empty());
    assert!(contributors.iter().all(|c| !c.initials().is_empty()));
}

/// Integration test: config file round-trips through load
#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "catalog:\n  page_size: 5\nsubmit:\n  endpoint: https://example.org/hook"
    )
    .unwrap();

    let path = file.path().to_path_buf();
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.catalog.page_size, 5);
    assert_eq!(config.submit.endpoint, "https://example.org/hook");

    let catalog = Catalog::bundled().unwrap();
    let view = CatalogView::with_page_size(catalog.into_tools(), config.catalog.page_size);
    assert!(view.visible().len() <= 5);
}

/// Integration test: submissions reach the submitter and errors surface
#[tokio::test]
async fn test_submission_round_trip() {
    let mock = MockSubmitter::new();
    let payload = SubmissionPayload::Contact(ContactMessage::new(
        "Ada",
        "ada@example.org",
        "The segyio link is stale.",
    ));

    mock.submit(&payload).await.unwrap();
    assert_eq!(mock.sent().len(), 1);
    assert_eq!(mock.sent()[0].kind(), "contact");

    let failing = MockSubmitter::failing("endpoint returned 503 Service Unavailable");
    let err = failing.submit(&payload).await.unwrap_err();
    assert!(err.to_string().contains("503"));
    assert!(failing.sent().is_empty());
}
