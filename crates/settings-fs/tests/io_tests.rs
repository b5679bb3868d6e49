use pretty_assertions::assert_eq;
use serde_json::json;
use settings_fs::{read_json, read_text, write_json_pretty};
use tempfile::TempDir;

#[test]
fn json_written_pretty_reads_back_identically() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("AppSettings.user.json");
    let value = json!({
        "object_detection": {"min_object_size": 12, "cnn_network": "YOLO"},
        "tracker": {"count_min_seen": 3}
    });

    write_json_pretty(&path, &value).unwrap();

    assert_eq!(read_json(&path).unwrap(), value);
}

#[test]
fn key_order_is_preserved_on_rewrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ordered.json");
    std::fs::write(&path, "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}\n").unwrap();

    let value = read_json(&path).unwrap();
    write_json_pretty(&path, &value).unwrap();

    assert_eq!(
        read_text(&path).unwrap(),
        "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}\n"
    );
}

#[test]
fn overwriting_replaces_whole_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("shrink.json");

    write_json_pretty(&path, &json!({"long": "x".repeat(64)})).unwrap();
    write_json_pretty(&path, &json!({})).unwrap();

    assert_eq!(read_text(&path).unwrap(), "{}\n");
}
