//! Per-node time transformation and fill gating.

use crate::{
    durations::DerivedDurations,
    ease::Easing,
    params::{FillMode, PlaybackDirection, TimingParams},
};

/// Where a sample falls relative to a node's active interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Before,
    During,
    After,
}

/// Result of transforming a time into a node's local space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransformedTime {
    pub region: Region,
    /// Eased progress within the current iteration.
    pub fraction: f64,
    /// `fraction * iterationDuration`: the time basis handed to children.
    pub child_time: f64,
}

/// Transform `time` (in the parent's local space) for one node.
///
/// `inherited_start_offset` is the start of this node inside its parent, accumulated from
/// preceding siblings in a sequence.
pub fn transformed_time(
    params: &TimingParams,
    durations: DerivedDurations,
    easing: &Easing,
    time: f64,
    inherited_start_offset: f64,
) -> TransformedTime {
    let shifted = time - inherited_start_offset;
    let active_end = params.start_delay + durations.active;
    let (region, clamped) = if shifted < params.start_delay {
        (Region::Before, params.start_delay)
    } else if shifted <= active_end {
        (Region::During, shifted)
    } else {
        (Region::After, active_end)
    };

    let sped = (clamped - params.start_delay) * params.playback_rate;
    let position = if durations.iteration == 0.0 {
        params.iteration_start
    } else {
        sped / durations.iteration + params.iteration_start
    };

    let mut iteration = position.floor();
    // A sample exactly on the final boundary belongs to the last iteration.
    if iteration == params.iterations - params.iteration_start {
        iteration -= 1.0;
    }

    let reversed = match params.direction {
        PlaybackDirection::Normal => false,
        PlaybackDirection::Reverse => true,
        PlaybackDirection::Alternate => iteration.rem_euclid(2.0) != 0.0,
        PlaybackDirection::AlternateReverse => (iteration + 1.0).rem_euclid(2.0) != 0.0,
    };

    let mut iteration_fraction = position - iteration;
    if reversed {
        iteration_fraction = 1.0 - iteration_fraction;
    }

    let fraction = easing.apply(iteration_fraction);
    TransformedTime {
        region,
        fraction,
        child_time: fraction * durations.iteration,
    }
}

/// Fill gating: whether a node (and so its subtree) takes part in a sample.
pub fn is_active(fill: FillMode, region: Region) -> bool {
    match (region, fill) {
        (Region::During, _) | (_, FillMode::Both) => true,
        (Region::Before, FillMode::Backwards) | (Region::After, FillMode::Forwards) => true,
        _ => false,
    }
}
