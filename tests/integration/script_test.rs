//! Frame log export format.

use typist::script::{capture, PacingMs, ScriptEncoder, ScriptHeader, SCRIPT_VERSION};
use typist::{Pacing, Typewriter};

fn jsonl_export(phrases: &[&str]) -> String {
    let pacing = Pacing::default();
    let mut typer = Typewriter::new(phrases.iter().map(|s| s.to_string()).collect(), pacing)
        .unwrap()
        .with_cycle_limit(1);
    let frames = capture(&mut typer);

    let mut encoder = ScriptEncoder::new();
    let header = ScriptHeader {
        version: SCRIPT_VERSION,
        phrases: phrases.iter().map(|s| s.to_string()).collect(),
        pacing: PacingMs::from(&pacing),
        timestamp: None,
    };
    let mut out = encoder.header(&header).unwrap();
    for frame in &frames {
        out.extend(encoder.frame(frame).unwrap());
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn jsonl_export_matches_reference_output() {
    let output = jsonl_export(&["AB", "C"]);
    insta::assert_snapshot!(output.trim_end(), @r###"
    {"version":1,"phrases":["AB","C"],"pacing":{"type_char_ms":100,"delete_char_ms":50,"hold_ms":2000,"rest_ms":500,"start_delay_ms":1000}}
    [100, "A"]
    [2000, "AB"]
    [50, "A"]
    [500, ""]
    [2000, "C"]
    [500, ""]
    "###);
}

#[test]
fn every_frame_line_is_valid_json() {
    let output = jsonl_export(&["hi there", "bye"]);
    for line in output.lines().skip(1) {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        let entry = parsed.as_array().unwrap();
        assert_eq!(entry.len(), 2);
        assert!(entry[0].is_u64());
        assert!(entry[1].is_string());
    }
}

#[test]
fn header_line_is_valid_json_with_pacing() {
    let output = jsonl_export(&["x"]);
    let header: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(header["version"], 1);
    assert_eq!(header["pacing"]["hold_ms"], 2000);
    assert!(header.get("timestamp").is_none());
}

#[test]
fn export_is_reproducible() {
    assert_eq!(jsonl_export(&["AB", "C"]), jsonl_export(&["AB", "C"]));
}
