use serde::Deserialize;
use tui_bowling::core::ScoringEngine;

#[derive(Debug, Deserialize)]
struct FrameJson {
    marks: Vec<String>,
    total: Option<u16>,
    resolved: bool,
}

#[derive(Debug, Deserialize)]
struct SnapshotJson {
    frames: Vec<FrameJson>,
    current_frame: u8,
    game_over: bool,
}

#[test]
fn snapshot_json_shape() {
    let mut engine = ScoringEngine::new();
    for text in ["x", "5", "/", "3"] {
        engine.record_input(text).unwrap();
    }

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let parsed: SnapshotJson = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.frames.len(), 10);
    assert_eq!(parsed.current_frame, 2);
    assert!(!parsed.game_over);

    assert_eq!(parsed.frames[0].marks, ["X", "_"]);
    assert_eq!(parsed.frames[0].total, Some(20));
    assert!(parsed.frames[0].resolved);

    assert_eq!(parsed.frames[1].marks, ["5", "/"]);
    assert_eq!(parsed.frames[1].total, Some(33));
    assert!(parsed.frames[1].resolved);

    assert_eq!(parsed.frames[2].marks, ["3"]);
    assert_eq!(parsed.frames[2].total, Some(36));
    assert!(!parsed.frames[2].resolved);

    assert!(parsed.frames[3].marks.is_empty());
    assert_eq!(parsed.frames[3].total, None);
}

#[test]
fn fresh_snapshot_json_is_blank() {
    let value = serde_json::to_value(ScoringEngine::new().snapshot()).unwrap();
    let frames = value["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 10);
    assert!(frames.iter().all(|f| f["total"].is_null() && f["marks"] == serde_json::json!([])));
}
