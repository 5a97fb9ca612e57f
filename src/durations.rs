//! Derived iteration, active and total durations, resolved bottom-up over the node arena.

use crate::{
    params::TimingParams,
    tree::{NodeKind, TimingNode},
};

/// Durations derived from a node's timing and, for auto-sized groups, its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct DerivedDurations {
    /// Length of one iteration in the node's own (unscaled) time.
    pub iteration: f64,
    /// `iterations * iteration / playbackRate`.
    pub active: f64,
    /// `startDelay + active + endDelay`.
    pub total: f64,
}

impl DerivedDurations {
    pub fn from_iteration(params: &TimingParams, iteration: f64) -> Self {
        let active = params.iterations * (iteration / params.playback_rate);
        Self {
            iteration,
            active,
            total: params.start_delay + active + params.end_delay,
        }
    }
}

/// Resolve durations for every node in one bottom-up pass.
///
/// `nodes` must be in DFS preorder (children after their parent), so walking indices in
/// reverse visits every child before its parent.
pub(crate) fn resolve_durations(nodes: &[TimingNode]) -> Vec<DerivedDurations> {
    let mut out = vec![DerivedDurations::default(); nodes.len()];
    for (i, node) in nodes.iter().enumerate().rev() {
        let iteration = match node.explicit_duration {
            Some(seconds) => seconds,
            None => match &node.kind {
                NodeKind::Animation => 0.0,
                NodeKind::Sequence(children) => children
                    .iter()
                    .fold(0.0, |acc, c| acc + out[c.index()].total),
                NodeKind::Parallel(children) => children
                    .iter()
                    .fold(0.0, |acc: f64, c| acc.max(out[c.index()].total)),
            },
        };
        out[i] = DerivedDurations::from_iteration(&node.params, iteration);
    }
    out
}
