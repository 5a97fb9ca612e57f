/// Index of a node in a compiled [`TimingTree`](crate::TimingTree) arena.
///
/// Nodes are allocated in DFS preorder, so a parent always has a smaller index than any of its
/// descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
