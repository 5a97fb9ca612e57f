//! Compiling a raw tree into a flat preorder arena with duration and easing side tables.

use std::{collections::HashMap, sync::Arc};

use crate::{
    durations::{DerivedDurations, resolve_durations},
    ease::Easing,
    foundation::{
        error::{TimegraphError, TimegraphResult},
        ids::NodeIdx,
    },
    model::{NodeType, TimingNodeDef},
    params::TimingParams,
    transform::{TransformedTime, transformed_time},
};

/// Compiled node kind. Group children are listed in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Animation,
    Sequence(Vec<NodeIdx>),
    Parallel(Vec<NodeIdx>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingNode {
    pub name: Option<String>,
    pub kind: NodeKind,
    pub params: TimingParams,
    /// `None` when the duration is `"auto"`.
    pub explicit_duration: Option<f64>,
}

/// A timing tree ready for sampling.
///
/// Nodes live in a flat arena in DFS preorder. Durations and easings are side tables indexed
/// by [`NodeIdx`], filled once by [`TimingTree::build`]; the tree is immutable afterwards.
#[derive(Debug)]
pub struct TimingTree {
    nodes: Vec<TimingNode>,
    root: NodeIdx,
    durations: Vec<DerivedDurations>,
    easings: Vec<Arc<Easing>>,
    names: Vec<String>,
    node_by_name: HashMap<String, (usize, NodeIdx)>,
}

impl TimingTree {
    /// Compile a raw tree.
    ///
    /// Fails with a configuration error on an unknown type tag, a zero playback rate, or a
    /// duration keyword other than `"auto"`.
    #[tracing::instrument(skip(def), fields(root = def.name.as_deref().unwrap_or("")))]
    pub fn build(def: &TimingNodeDef) -> TimegraphResult<Self> {
        let mut builder = TreeBuilder::default();
        let root = builder.push_node(def)?;
        let durations = resolve_durations(&builder.nodes);

        tracing::debug!(
            nodes = builder.nodes.len(),
            names = builder.names.len(),
            easings = builder.easing_cache.len(),
            total_duration = durations[root.index()].total,
            "built timing tree"
        );

        Ok(Self {
            nodes: builder.nodes,
            root,
            durations,
            easings: builder.easings,
            names: builder.names,
            node_by_name: builder.node_by_name,
        })
    }

    pub fn root(&self) -> NodeIdx {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: NodeIdx) -> &TimingNode {
        &self.nodes[idx.index()]
    }

    pub fn durations(&self, idx: NodeIdx) -> DerivedDurations {
        self.durations[idx.index()]
    }

    pub fn easing(&self, idx: NodeIdx) -> &Easing {
        &self.easings[idx.index()]
    }

    /// Declared names in first-registered (preorder) order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `name` in [`TimingTree::names`].
    pub fn name_index(&self, name: &str) -> Option<usize> {
        self.node_by_name.get(name).map(|&(i, _)| i)
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeIdx> {
        self.node_by_name.get(name).map(|&(_, idx)| idx)
    }

    /// Run the time transformation of a single node.
    pub fn transform(
        &self,
        idx: NodeIdx,
        time: f64,
        inherited_start_offset: f64,
    ) -> TransformedTime {
        transformed_time(
            &self.node(idx).params,
            self.durations(idx),
            self.easing(idx),
            time,
            inherited_start_offset,
        )
    }
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<TimingNode>,
    easings: Vec<Arc<Easing>>,
    easing_cache: HashMap<String, Arc<Easing>>,
    names: Vec<String>,
    node_by_name: HashMap<String, (usize, NodeIdx)>,
}

impl TreeBuilder {
    fn push_node(&mut self, def: &TimingNodeDef) -> TimegraphResult<NodeIdx> {
        let label = def.name.as_deref().unwrap_or("<unnamed>");
        let node_type = def.node_type().ok_or_else(|| {
            TimegraphError::configuration(format!(
                "unknown node type '{}' (name = {label})",
                def.kind
            ))
        })?;

        let params = def.timing.resolve();
        if params.playback_rate == 0.0 {
            return Err(TimegraphError::configuration(format!(
                "playbackRate must be non-zero (name = {label})"
            )));
        }
        let explicit_duration = params.duration.explicit_seconds().map_err(|e| match e {
            TimegraphError::Configuration(msg) => {
                TimegraphError::configuration(format!("{msg} (name = {label})"))
            }
            other => other,
        })?;

        let idx = NodeIdx(
            u32::try_from(self.nodes.len())
                .map_err(|_| TimegraphError::configuration("too many nodes"))?,
        );
        if let Some(name) = &def.name {
            self.register_name(name, idx);
        }
        let easing = self.easing_for(&params.easing);
        self.easings.push(easing);
        // Children are pushed after the parent so that preorder indices hold.
        self.nodes.push(TimingNode {
            name: def.name.clone(),
            kind: NodeKind::Animation,
            params,
            explicit_duration,
        });

        let kind = match node_type {
            NodeType::Animation => {
                if !def.children.is_empty() {
                    tracing::warn!(
                        name = label,
                        children = def.children.len(),
                        "animation node has children; ignoring them"
                    );
                }
                NodeKind::Animation
            }
            NodeType::Sequence => NodeKind::Sequence(self.push_children(&def.children)?),
            NodeType::Parallel => NodeKind::Parallel(self.push_children(&def.children)?),
        };
        self.nodes[idx.index()].kind = kind;
        Ok(idx)
    }

    fn push_children(&mut self, children: &[TimingNodeDef]) -> TimegraphResult<Vec<NodeIdx>> {
        children.iter().map(|c| self.push_node(c)).collect()
    }

    fn register_name(&mut self, name: &str, idx: NodeIdx) {
        if self.node_by_name.contains_key(name) {
            tracing::warn!(name, "duplicate node name; keeping the first registration");
            return;
        }
        self.node_by_name
            .insert(name.to_owned(), (self.names.len(), idx));
        self.names.push(name.to_owned());
    }

    fn easing_for(&mut self, descriptor: &str) -> Arc<Easing> {
        if let Some(e) = self.easing_cache.get(descriptor) {
            return Arc::clone(e);
        }
        let e = Arc::new(Easing::parse(descriptor));
        self.easing_cache
            .insert(descriptor.to_owned(), Arc::clone(&e));
        e
    }
}
