//! Sampling a compiled tree at a time.

use crate::{
    foundation::ids::NodeIdx,
    transform::{Region, TransformedTime, is_active},
    tree::{NodeKind, TimingTree},
};

/// One active named node at a sample time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveSample {
    pub node: NodeIdx,
    pub name: String,
    pub region: Region,
    pub fraction: f64,
}

impl TimingTree {
    /// Invoke `callback(name, fraction)` for every active named node at `time`, in declaration
    /// order.
    pub fn sample<F>(&self, time: f64, mut callback: F)
    where
        F: FnMut(&str, f64),
    {
        self.walk(time, &mut |_: NodeIdx, name: &str, t: &TransformedTime| {
            callback(name, t.fraction)
        });
    }

    /// Like [`TimingTree::sample`], collecting node index and region as well.
    pub fn sample_active(&self, time: f64) -> Vec<ActiveSample> {
        let mut out = Vec::new();
        self.walk(time, &mut |node: NodeIdx, name: &str, t: &TransformedTime| {
            out.push(ActiveSample {
                node,
                name: name.to_owned(),
                region: t.region,
                fraction: t.fraction,
            })
        });
        out
    }

    pub(crate) fn walk<F>(&self, time: f64, visit: &mut F)
    where
        F: FnMut(NodeIdx, &str, &TransformedTime),
    {
        self.walk_node(self.root(), time, 0.0, visit);
    }

    fn walk_node<F>(&self, idx: NodeIdx, time: f64, inherited_start_offset: f64, visit: &mut F)
    where
        F: FnMut(NodeIdx, &str, &TransformedTime),
    {
        let node = self.node(idx);
        let result = self.transform(idx, time, inherited_start_offset);
        if !is_active(node.params.fill, result.region) {
            return;
        }
        if let Some(name) = node.name.as_deref() {
            visit(idx, name, &result);
        }

        match &node.kind {
            NodeKind::Animation => {}
            NodeKind::Sequence(children) => {
                let mut start = inherited_start_offset;
                for &child in children {
                    self.walk_node(child, result.child_time, start, visit);
                    start += self.durations(child).total;
                }
            }
            NodeKind::Parallel(children) => {
                for &child in children {
                    self.walk_node(child, result.child_time, inherited_start_offset, visit);
                }
            }
        }
    }
}
