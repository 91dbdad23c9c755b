//! Export: CSV/JSON files for the filtered, sorted result set.

use gridwatch::domain::assets::{filter_sort, mock_assets, QueryState, SortKey};
use gridwatch::modules::export::{export_assets, ExportFormat};

#[test]
fn test_csv_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = mock_assets();
    let query = QueryState::default();
    let rows = filter_sort(&store, &query);

    let path = export_assets(&rows, ExportFormat::Csv, Some(dir.path())).expect("export");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

    let content = std::fs::read_to_string(&path).expect("read export");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), rows.len() + 1);
    assert_eq!(lines[0], "id,name,site,status,updated_at");
    // Default sort is by id ascending, so the battery system leads
    assert!(lines[1].contains("BMS-203"));
}

#[test]
fn test_json_export_round_trips_the_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = mock_assets();
    let mut query = QueryState::default();
    query.toggle_sort(SortKey::UpdatedAt);
    let rows = filter_sort(&store, &query);

    let path = export_assets(&rows, ExportFormat::Json, Some(dir.path())).expect("export");
    let content = std::fs::read_to_string(&path).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let array = parsed.as_array().expect("array");
    assert_eq!(array.len(), rows.len());

    // Order in the file follows the sorted result set
    let first = array[0].as_object().expect("object");
    assert_eq!(
        first.get("id").and_then(|v| v.as_str()),
        Some(rows[0].id.as_str()),
    );
    assert_eq!(
        first.get("status").and_then(|v| v.as_str()),
        Some(rows[0].status.title()),
    );
}

#[test]
fn test_export_respects_the_current_filter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = mock_assets();
    let mut query = QueryState::default();
    query.set_query("wtg");
    let rows = filter_sort(&store, &query);
    assert_eq!(rows.len(), 2);

    let path = export_assets(&rows, ExportFormat::Csv, Some(dir.path())).expect("export");
    let content = std::fs::read_to_string(&path).expect("read export");
    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("BMS-203"));
}
