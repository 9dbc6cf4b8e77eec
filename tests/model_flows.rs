mod common;

use assert_cmd::Command;
use common::{spec_arg, tracker_fixture, SpecFixture, TRACKER_PRIMARY};
use serde_json::json;
use std::fs;

fn run(fixture: &SpecFixture) {
    Command::cargo_bin("traitscan")
        .unwrap()
        .arg(spec_arg(fixture))
        .assert()
        .success();
}

#[test]
fn full_model_for_tracker_fixture() {
    let fixture = tracker_fixture();
    run(&fixture);
    let model = fixture.read_model();

    assert_eq!(
        model["$schema"],
        "https://traitscan.dev/schemas/behavior-model.json"
    );
    assert_eq!(model["version"], "1.0.0");
    assert_eq!(model["generated"], true);

    // Overlay pagination replaced the prose-detected one; readonly
    // operations without an explicit retry get the backoff default.
    assert_eq!(
        model["operations"]["ListProjects"],
        json!({
            "readonly": true,
            "pagination": { "style": "link" },
            "retry": { "max": 3, "base_delay_seconds": 1, "backoff": "exp+jitter" }
        })
    );

    // Explicit retry trait suppresses the default.
    assert_eq!(
        model["operations"]["GetProject"]["retry"],
        json!({ "max": 5, "base_delay_seconds": 1, "backoff": "exp+jitter" })
    );

    // Overlay idempotency trait sets the flag; mutating default retry.
    assert_eq!(
        model["operations"]["CreateProject"],
        json!({ "idempotent": true, "retry": { "max": 0 } })
    );

    // Direct @idempotent marker.
    assert_eq!(
        model["operations"]["UpdateTodo"],
        json!({ "idempotent": true, "retry": { "max": 0 } })
    );

    assert_eq!(model["redaction"], json!({ "Person": ["$.name", "$.email"] }));
    assert_eq!(
        model["sensitiveTypes"],
        json!(["EmailAddress", "PersonName"])
    );
}

#[test]
fn reserved_overlays_never_reach_the_model() {
    // examples.smithy carries a retry of 99 in the shared fixture; the
    // default must win instead.
    let fixture = tracker_fixture();
    run(&fixture);
    let model = fixture.read_model();
    assert_eq!(model["operations"]["ListProjects"]["retry"]["max"], 3);
}

#[test]
fn rerun_on_unchanged_input_is_byte_identical() {
    let fixture = tracker_fixture();
    run(&fixture);
    let first = fs::read(fixture.model_path()).expect("read first artifact");
    run(&fixture);
    let second = fs::read(fixture.model_path()).expect("read second artifact");
    assert_eq!(first, second);
}

#[test]
fn prose_pagination_used_without_overlay() {
    let fixture = SpecFixture::new(TRACKER_PRIMARY, &[]);
    run(&fixture);
    let model = fixture.read_model();
    assert_eq!(
        model["operations"]["ListProjects"]["pagination"],
        json!({ "style": "link" })
    );
}

#[test]
fn later_overlay_document_wins_over_earlier() {
    let fixture = SpecFixture::new(
        TRACKER_PRIMARY,
        &[
            ("a-retries.smithy", "apply CreateProject @retry({ max: 2 })\n"),
            ("b-retries.smithy", "apply CreateProject @retry({ max: 6 })\n"),
        ],
    );
    run(&fixture);
    let model = fixture.read_model();
    assert_eq!(model["operations"]["CreateProject"]["retry"], json!({ "max": 6 }));
}

#[test]
fn malformed_overlay_bodies_are_tolerated() {
    let fixture = SpecFixture::new(
        TRACKER_PRIMARY,
        &[(
            "broken.smithy",
            "apply GetProject @retry({ policy: { max: 3 } })\n",
        )],
    );
    run(&fixture);
    let model = fixture.read_model();
    // Nested body matched nothing, so the readonly default applies.
    assert_eq!(model["operations"]["GetProject"]["retry"]["max"], 3);
}

#[test]
fn artifact_is_pretty_printed_with_trailing_newline() {
    let fixture = tracker_fixture();
    run(&fixture);
    let raw = fs::read_to_string(fixture.model_path()).expect("read artifact");
    assert!(raw.starts_with("{\n  \"$schema\""));
    assert!(raw.ends_with("}\n"));
}
