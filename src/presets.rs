//! Built-in demonstration trees.

use crate::{
    model::TimingNodeDef,
    params::{FillMode, PlaybackDirection, TimingParamsDef},
};

const PRESET_NAMES: [&str; 2] = ["test", "container"];

pub fn names() -> &'static [&'static str] {
    &PRESET_NAMES
}

pub fn preset(name: &str) -> Option<TimingNodeDef> {
    match name {
        "test" => Some(staggered_sequences()),
        "container" => Some(delayed_container()),
        _ => None,
    }
}

/// Three three-step sequences in parallel under an overshooting spline.
fn staggered_sequences() -> TimingNodeDef {
    let step = |name: &str, duration: f64| {
        TimingNodeDef::animation()
            .named(name)
            .timing(TimingParamsDef::default().duration(duration))
    };
    let row = |name: &str, steps: [(&str, f64); 3]| {
        TimingNodeDef::sequence(steps.iter().map(|&(n, d)| step(n, d)).collect()).named(name)
    };

    TimingNodeDef::parallel(vec![
        row("Sequence A", [("A0", 3.0), ("A1", 3.0), ("A2", 3.0)]),
        row("Sequence B", [("B0", 3.0), ("B1", 4.0), ("B2", 3.0)]),
        row("Sequence C", [("C0", 3.0), ("C1", 3.0), ("C2", 3.0)]),
    ])
    .named("Parallel Container")
    .timing(TimingParamsDef::default().easing("cubic-bezier(0, -.78, 1, 1.78)"))
}

/// A repeating sequence with delayed, alternating, rate-scaled children.
fn delayed_container() -> TimingNodeDef {
    let a = TimingParamsDef::default()
        .easing("ease")
        .direction(PlaybackDirection::Alternate)
        .iteration_start(0.0)
        .iterations(2.0)
        .duration(1.0)
        .playback_rate(2.0)
        .start_delay(1.0)
        .end_delay(1.0)
        .fill(FillMode::Backwards);
    let b = TimingParamsDef::default()
        .easing("ease")
        .direction(PlaybackDirection::Alternate)
        .iteration_start(0.0)
        .iterations(1.0)
        .duration(1.0)
        .playback_rate(1.0)
        .start_delay(-1.0)
        .end_delay(-0.5)
        .fill(FillMode::Forwards);
    let container = TimingParamsDef::default()
        .easing("linear")
        .direction(PlaybackDirection::Normal)
        .iteration_start(0.0)
        .iterations(2.0)
        .auto_duration()
        .playback_rate(1.0)
        .start_delay(1.0)
        .end_delay(0.0)
        .fill(FillMode::Both);

    TimingNodeDef::sequence(vec![
        TimingNodeDef::animation().named("a").timing(a),
        TimingNodeDef::animation().named("b").timing(b),
    ])
    .named("container")
    .timing(container)
}
