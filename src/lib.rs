//! Timing-tree evaluation for nested web-style animations.
//!
//! A tree of leaf animations and sequence/parallel groups is compiled once with
//! [`TimingTree::build`], then sampled at arbitrary times to get the eased progress fraction of
//! every active named node.
#![forbid(unsafe_code)]

pub mod dsl;
pub mod durations;
pub mod ease;
pub mod foundation;
pub mod graph;
pub mod model;
pub mod params;
pub mod presets;
pub mod session;
pub mod transform;
pub mod tree;
pub mod walk;

pub use durations::DerivedDurations;
pub use ease::{Easing, SplineTable};
pub use foundation::error::{TimegraphError, TimegraphResult};
pub use foundation::ids::NodeIdx;
pub use graph::{GraphData, GraphOpts, GraphSeries, sample_graph};
pub use model::{NodeType, TimingNodeDef};
pub use params::{DurationDef, FillMode, PlaybackDirection, TimingParams, TimingParamsDef};
pub use session::TimingContext;
pub use transform::{Region, TransformedTime, is_active, transformed_time};
pub use tree::{NodeKind, TimingNode, TimingTree};
pub use walk::ActiveSample;
