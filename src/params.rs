//! Timing parameters: the optional boundary form and the fully defaulted record.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{TimegraphError, TimegraphResult};

/// Per-iteration playback direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

/// Whether a node holds a value outside its active interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    #[default]
    Forwards,
    Backwards,
    Both,
}

/// Raw `duration` field: seconds, or a keyword (only `"auto"` compiles).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationDef {
    Seconds(f64),
    Keyword(String),
}

pub const AUTO_DURATION: &str = "auto";

impl DurationDef {
    pub fn auto() -> Self {
        Self::Keyword(AUTO_DURATION.to_owned())
    }

    /// `Some(seconds)` for an explicit duration, `None` for `"auto"`.
    pub fn explicit_seconds(&self) -> TimegraphResult<Option<f64>> {
        match self {
            Self::Seconds(s) => Ok(Some(*s)),
            Self::Keyword(k) if k == AUTO_DURATION => Ok(None),
            Self::Keyword(k) => Err(TimegraphError::configuration(format!(
                "duration must be a number or \"{AUTO_DURATION}\", got \"{k}\""
            ))),
        }
    }
}

impl Default for DurationDef {
    fn default() -> Self {
        Self::auto()
    }
}

impl From<f64> for DurationDef {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

/// Partially populated timing record as it arrives from the loader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingParamsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<PlaybackDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// Fully populated timing record.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingParams {
    pub start_delay: f64,
    pub end_delay: f64,
    pub iteration_start: f64,
    pub iterations: f64,
    pub duration: DurationDef,
    pub playback_rate: f64,
    pub direction: PlaybackDirection,
    pub fill: FillMode,
    pub easing: String,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            start_delay: 0.0,
            end_delay: 0.0,
            iteration_start: 0.0,
            iterations: 1.0,
            duration: DurationDef::auto(),
            playback_rate: 1.0,
            direction: PlaybackDirection::Normal,
            fill: FillMode::Forwards,
            easing: "linear".to_owned(),
        }
    }
}

impl TimingParamsDef {
    /// Fill every unset field with its default.
    pub fn resolve(&self) -> TimingParams {
        let d = TimingParams::default();
        TimingParams {
            start_delay: self.start_delay.unwrap_or(d.start_delay),
            end_delay: self.end_delay.unwrap_or(d.end_delay),
            iteration_start: self.iteration_start.unwrap_or(d.iteration_start),
            iterations: self.iterations.unwrap_or(d.iterations),
            duration: self.duration.clone().unwrap_or(d.duration),
            playback_rate: self.playback_rate.unwrap_or(d.playback_rate),
            direction: self.direction.unwrap_or(d.direction),
            fill: self.fill.unwrap_or(d.fill),
            easing: self.easing.clone().unwrap_or(d.easing),
        }
    }
}

impl From<&TimingParams> for TimingParamsDef {
    fn from(p: &TimingParams) -> Self {
        Self {
            start_delay: Some(p.start_delay),
            end_delay: Some(p.end_delay),
            iteration_start: Some(p.iteration_start),
            iterations: Some(p.iterations),
            duration: Some(p.duration.clone()),
            playback_rate: Some(p.playback_rate),
            direction: Some(p.direction),
            fill: Some(p.fill),
            easing: Some(p.easing.clone()),
        }
    }
}
