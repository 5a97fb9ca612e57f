//! A loaded timing tree that can be replaced while other threads sample it.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{foundation::error::TimegraphResult, model::TimingNodeDef, tree::TimingTree};

/// Holds the currently loaded tree.
///
/// `load` compiles the new tree completely before swapping it in, and readers work on an
/// `Arc` snapshot, so a sample never sees a mix of old and new state. A failed load keeps the
/// previous tree.
#[derive(Debug)]
pub struct TimingContext {
    current: RwLock<Arc<TimingTree>>,
}

impl TimingContext {
    pub fn new(def: &TimingNodeDef) -> TimegraphResult<Self> {
        Ok(Self {
            current: RwLock::new(Arc::new(TimingTree::build(def)?)),
        })
    }

    pub fn from_json(s: &str) -> TimegraphResult<Self> {
        Self::new(&TimingNodeDef::from_json(s)?)
    }

    /// Replace the loaded tree. Returns the new snapshot.
    pub fn load(&self, def: &TimingNodeDef) -> TimegraphResult<Arc<TimingTree>> {
        let tree = Arc::new(TimingTree::build(def)?);
        // The slot only ever holds a complete `Arc`, so a poisoned lock is still consistent.
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&tree);
        Ok(tree)
    }

    pub fn load_json(&self, s: &str) -> TimegraphResult<Arc<TimingTree>> {
        self.load(&TimingNodeDef::from_json(s)?)
    }

    pub fn current(&self) -> Arc<TimingTree> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn sample<F>(&self, time: f64, callback: F)
    where
        F: FnMut(&str, f64),
    {
        self.current().sample(time, callback);
    }

    pub fn names(&self) -> Vec<String> {
        self.current().names().to_vec()
    }
}
