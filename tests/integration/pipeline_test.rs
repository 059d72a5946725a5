//! Integration tests for the full pipeline: layout, merge, summary, reruns

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use typesift::{run, DocumentSource, SiftConfig};

fn write_doc(dir: &Path, file_name: &str, value: &Value) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn two_document_config(input: &Path, output: &Path) -> SiftConfig {
    let doc1 = json!({
        "screen": {
            "type": "Screen",
            "items": [{"type": "Button", "label": "ok"}, {"type": "Button", "label": "cancel"}]
        }
    });
    let doc2 = json!({
        "widgets": [{"type": "Button", "label": "retry"}, {"type": "Banner"}]
    });

    let path1 = write_doc(input, "first.json", &doc1);
    let path2 = write_doc(input, "second.json", &doc2);

    SiftConfig::new(output.to_path_buf())
        .with_document(DocumentSource::new("api1", path1))
        .with_document(DocumentSource::new("api3", path2))
        .with_quiet(true)
}

#[test]
fn pipeline_produces_per_document_merged_and_summary_trees() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = two_document_config(input.path(), output.path());

    let report = run(&config).unwrap();
    assert_eq!(report.documents_processed, 2);
    assert_eq!(report.total_types, 3);
    assert_eq!(report.total_objects, 5);

    // Per-document trees
    assert!(output.path().join("api1/Screen.json").exists());
    assert!(output.path().join("api1/Button.json").exists());
    assert!(output.path().join("api3/Button.json").exists());
    assert!(output.path().join("api3/Banner.json").exists());
    assert!(!output.path().join("api3/Screen.json").exists());

    // Per-document artifact shape
    let api1_buttons = read_json(&output.path().join("api1/Button.json"));
    assert_eq!(api1_buttons["type"], json!("Button"));
    assert_eq!(api1_buttons["count"], json!(2));
    assert_eq!(
        api1_buttons["count"].as_u64().unwrap() as usize,
        api1_buttons["items"].as_array().unwrap().len()
    );
}

#[test]
fn merged_artifacts_concatenate_in_document_order() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = two_document_config(input.path(), output.path());

    run(&config).unwrap();

    let merged = read_json(&output.path().join("merged/Button.json"));
    assert_eq!(merged["count"], json!(3));
    let labels: Vec<&str> = merged["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["label"].as_str().unwrap())
        .collect();
    // api1's buttons (traversal order) first, then api3's
    assert_eq!(labels, vec!["ok", "cancel", "retry"]);
}

#[test]
fn summary_orders_types_by_descending_count() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = two_document_config(input.path(), output.path());

    run(&config).unwrap();

    let summary_text = fs::read_to_string(output.path().join("summary.json")).unwrap();
    let summary: Value = serde_json::from_str(&summary_text).unwrap();
    assert_eq!(summary["total_types"], json!(3));
    assert_eq!(summary["types"]["Button"], json!(3));
    assert_eq!(summary["types"]["Banner"], json!(1));
    assert_eq!(summary["types"]["Screen"], json!(1));

    // Button (3) first; Banner/Screen tie resolved lexicographically
    let button_pos = summary_text.find("\"Button\"").unwrap();
    let banner_pos = summary_text.find("\"Banner\"").unwrap();
    let screen_pos = summary_text.find("\"Screen\"").unwrap();
    assert!(button_pos < banner_pos && banner_pos < screen_pos);
}

#[test]
fn missing_and_empty_documents_are_skipped_without_error() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let empty = input.path().join("empty.json");
    fs::write(&empty, "").unwrap();
    let present = write_doc(input.path(), "present.json", &json!({"type": "Solo"}));

    let config = SiftConfig::new(output.path().to_path_buf())
        .with_document(DocumentSource::new("gone", input.path().join("absent.json")))
        .with_document(DocumentSource::new("empty", empty))
        .with_document(DocumentSource::new("present", present))
        .with_quiet(true);

    let report = run(&config).unwrap();
    assert_eq!(report.documents_skipped, 2);
    assert_eq!(report.documents_processed, 1);

    assert!(!output.path().join("gone").exists());
    assert!(!output.path().join("empty").exists());
    assert!(output.path().join("present/Solo.json").exists());

    let summary = read_json(&output.path().join("summary.json"));
    assert_eq!(summary["total_types"], json!(1));
}

#[test]
fn shared_type_across_documents_merges_but_stays_separate_per_document() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let path1 = write_doc(input.path(), "one.json", &json!({"type": "Shared"}));
    let path2 = write_doc(input.path(), "two.json", &json!({"type": "Shared"}));

    let config = SiftConfig::new(output.path().to_path_buf())
        .with_document(DocumentSource::new("one", path1))
        .with_document(DocumentSource::new("two", path2))
        .with_quiet(true);
    run(&config).unwrap();

    assert_eq!(
        read_json(&output.path().join("one/Shared.json"))["count"],
        json!(1)
    );
    assert_eq!(
        read_json(&output.path().join("two/Shared.json"))["count"],
        json!(1)
    );
    assert_eq!(
        read_json(&output.path().join("merged/Shared.json"))["count"],
        json!(2)
    );
}

#[test]
fn rerunning_unchanged_inputs_is_byte_identical() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = two_document_config(input.path(), output.path());

    run(&config).unwrap();
    let first_summary = fs::read(output.path().join("summary.json")).unwrap();
    let first_merged = fs::read(output.path().join("merged/Button.json")).unwrap();
    let first_doc = fs::read(output.path().join("api1/Screen.json")).unwrap();

    run(&config).unwrap();
    assert_eq!(first_summary, fs::read(output.path().join("summary.json")).unwrap());
    assert_eq!(
        first_merged,
        fs::read(output.path().join("merged/Button.json")).unwrap()
    );
    assert_eq!(first_doc, fs::read(output.path().join("api1/Screen.json")).unwrap());
}

#[test]
fn stale_artifacts_from_previous_runs_are_left_in_place() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let path = write_doc(input.path(), "doc.json", &json!({"type": "Old"}));
    let config = SiftConfig::new(output.path().to_path_buf())
        .with_document(DocumentSource::new("doc", path.clone()))
        .with_quiet(true);
    run(&config).unwrap();
    assert!(output.path().join("doc/Old.json").exists());

    // Same document now carries a different type set
    fs::write(&path, serde_json::to_string(&json!({"type": "New"})).unwrap()).unwrap();
    run(&config).unwrap();

    assert!(output.path().join("doc/New.json").exists());
    assert!(output.path().join("doc/Old.json").exists());
}

#[test]
fn parse_failure_halts_before_later_documents() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let good_first = write_doc(input.path(), "good1.json", &json!({"type": "First"}));
    let broken = input.path().join("broken.json");
    fs::write(&broken, "{\"type\": ").unwrap();
    let good_last = write_doc(input.path(), "good2.json", &json!({"type": "Last"}));

    let config = SiftConfig::new(output.path().to_path_buf())
        .with_document(DocumentSource::new("good1", good_first))
        .with_document(DocumentSource::new("broken", broken))
        .with_document(DocumentSource::new("good2", good_last))
        .with_quiet(true);

    assert!(run(&config).is_err());

    // The earlier document's artifacts were already written; the later
    // document was never reached
    assert!(output.path().join("good1/First.json").exists());
    assert!(!output.path().join("good2").exists());
}

#[test]
fn non_ascii_content_round_trips_literally() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    let doc = json!({"type": "라벨", "text": "확인 버튼"});
    let path = write_doc(input.path(), "doc.json", &doc);

    let config = SiftConfig::new(output.path().to_path_buf())
        .with_document(DocumentSource::new("doc", path))
        .with_quiet(true);
    run(&config).unwrap();

    let rendered = fs::read_to_string(output.path().join("doc/라벨.json")).unwrap();
    assert!(rendered.contains("확인 버튼"));
    assert!(!rendered.contains("\\u"));
}
