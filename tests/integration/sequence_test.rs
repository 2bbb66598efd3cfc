//! End-to-end behavior of the typewriter machine through the runner,
//! driven by the virtual clock so no real time passes.

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use typist::render::MemorySink;
use typist::runner::{drive, RunOptions};
use typist::schedule::VirtualClock;
use typist::script::capture;
use typist::{Effect, Frame, Pacing, Typewriter};

fn typer(phrases: &[&str]) -> Typewriter {
    Typewriter::new(
        phrases.iter().map(|s| s.to_string()).collect(),
        Pacing::default(),
    )
    .expect("non-empty phrase list")
}

// ============================================================================
// Reference scenario: phrases = ["AB", "C"]
// ============================================================================

#[test]
fn reference_scenario_renders_expected_sequence() {
    // Expected: "A" -> "AB" (hold) -> "A" -> "" (rest) -> "C" (hold)
    // -> "" (rest) -> repeats from "A".
    let mut machine = typer(&["AB", "C"]);
    let texts: Vec<String> = (0..10)
        .map(|_| machine.step().expect("infinite effect").text)
        .collect();
    assert_eq!(
        texts,
        vec!["A", "AB", "A", "", "C", "", "A", "AB", "A", ""]
    );
}

#[test]
fn reference_scenario_uses_expected_delays() {
    let mut machine = typer(&["AB", "C"]).with_cycle_limit(1);
    let frames = capture(&mut machine);
    let delays: Vec<u64> = frames.iter().map(|f| f.delay.as_millis() as u64).collect();
    // type, hold, delete, rest, hold (single char phrase), rest
    assert_eq!(delays, vec![100, 2000, 50, 500, 2000, 500]);
}

#[test]
fn runner_plays_the_reference_scenario_through_virtual_time() {
    let mut machine = typer(&["AB", "C"]).with_cycle_limit(1);
    let mut clock = VirtualClock::new();
    let mut sink = MemorySink::new();
    let stop = AtomicBool::new(false);
    let opts = RunOptions {
        speed: 1.0,
        start_delay: Duration::from_millis(1000),
    };

    let frames = drive(&mut machine, &mut clock, &mut sink, &opts, &stop).unwrap();

    assert_eq!(frames, 6);
    assert_eq!(sink.frames(), &["A", "AB", "A", "", "C", ""]);
    // 1000 start + 100 + 2000 + 50 + 500 + 2000 + 500
    assert_eq!(clock.elapsed(), Duration::from_millis(6150));
}

// ============================================================================
// Behavioral properties
// ============================================================================

#[test]
fn every_phrase_appears_in_full_before_deletion() {
    let phrases = ["first phrase", "second", "third one"];
    let mut machine = typer(&phrases).with_cycle_limit(1);
    let frames = capture(&mut machine);
    for phrase in phrases {
        assert!(
            frames.iter().any(|f| f.text == phrase),
            "{phrase:?} never rendered in full"
        );
    }
}

#[test]
fn hold_delay_follows_each_completed_phrase() {
    let mut machine = typer(&["hey", "yo"]).with_cycle_limit(1);
    let frames = capture(&mut machine);
    for frame in &frames {
        if frame.text == "hey" && frame.delay == Duration::from_millis(2000) {
            return;
        }
    }
    panic!("completed phrase was not followed by the hold delay");
}

#[test]
fn rotation_wraps_and_repeats_identically() {
    let mut one = typer(&["ab", "cd"]).with_cycle_limit(1);
    let mut two = typer(&["ab", "cd"]).with_cycle_limit(2);
    let first_cycle = capture(&mut one);
    let both_cycles = capture(&mut two);
    assert_eq!(both_cycles.len(), first_cycle.len() * 2);
    assert_eq!(&both_cycles[..first_cycle.len()], &first_cycle[..]);
    assert_eq!(&both_cycles[first_cycle.len()..], &first_cycle[..]);
}

#[test]
fn frame_sequence_is_deterministic() {
    let run = |_: usize| -> Vec<Frame> {
        let mut machine = typer(&["abc", "", "d"]).with_cycle_limit(3);
        capture(&mut machine)
    };
    assert_eq!(run(0), run(1));
}

#[test]
fn rendered_text_is_always_a_prefix_of_some_phrase() {
    let phrases = ["hello", "hi"];
    let mut machine = typer(&phrases);
    for _ in 0..200 {
        let frame = machine.step().unwrap();
        assert!(
            phrases.iter().any(|p| p.starts_with(&frame.text)),
            "{:?} is not a prefix of any phrase",
            frame.text
        );
    }
}
