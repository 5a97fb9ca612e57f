//! Raw timing tree as read from JSON.

use serde::{Deserialize, Serialize};

use crate::{foundation::error::TimegraphResult, params::TimingParamsDef};

/// Raw timing tree node as produced by the loader (the JSON boundary).
///
/// `kind` is kept as the raw type tag so that [`TimingTree::build`](crate::TimingTree::build)
/// can reject unknown tags as configuration errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingNodeDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub timing: TimingParamsDef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TimingNodeDef>,
}

/// Recognized node type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    Animation,
    Sequence,
    Parallel,
}

impl NodeType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "animation" => Some(Self::Animation),
            "sequence" => Some(Self::Sequence),
            "parallel" => Some(Self::Parallel),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Sequence => "sequence",
            Self::Parallel => "parallel",
        }
    }
}

impl TimingNodeDef {
    pub fn from_json(s: &str) -> TimegraphResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> TimegraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node_type(&self) -> Option<NodeType> {
        NodeType::parse(&self.kind)
    }
}
