//! Chainable builders for constructing timing trees in code.

use crate::{
    model::{NodeType, TimingNodeDef},
    params::{DurationDef, FillMode, PlaybackDirection, TimingParamsDef},
};

impl TimingNodeDef {
    fn of_type(kind: NodeType, children: Vec<TimingNodeDef>) -> Self {
        Self {
            name: None,
            kind: kind.as_str().to_owned(),
            timing: TimingParamsDef::default(),
            children,
        }
    }

    pub fn animation() -> Self {
        Self::of_type(NodeType::Animation, Vec::new())
    }

    pub fn sequence(children: Vec<TimingNodeDef>) -> Self {
        Self::of_type(NodeType::Sequence, children)
    }

    pub fn parallel(children: Vec<TimingNodeDef>) -> Self {
        Self::of_type(NodeType::Parallel, children)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn timing(mut self, timing: TimingParamsDef) -> Self {
        self.timing = timing;
        self
    }

    pub fn child(mut self, child: TimingNodeDef) -> Self {
        self.children.push(child);
        self
    }
}

impl TimingParamsDef {
    pub fn start_delay(mut self, seconds: f64) -> Self {
        self.start_delay = Some(seconds);
        self
    }

    pub fn end_delay(mut self, seconds: f64) -> Self {
        self.end_delay = Some(seconds);
        self
    }

    pub fn iteration_start(mut self, iteration: f64) -> Self {
        self.iteration_start = Some(iteration);
        self
    }

    pub fn iterations(mut self, count: f64) -> Self {
        self.iterations = Some(count);
        self
    }

    pub fn duration(mut self, duration: impl Into<DurationDef>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn auto_duration(mut self) -> Self {
        self.duration = Some(DurationDef::auto());
        self
    }

    pub fn playback_rate(mut self, rate: f64) -> Self {
        self.playback_rate = Some(rate);
        self
    }

    pub fn direction(mut self, direction: PlaybackDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }
}
