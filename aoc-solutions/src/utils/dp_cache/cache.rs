//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::fmt::Debug;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::Backend;
use super::problem::DpProblem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DpCacheError {
    #[error("dependency cycle through index {0}")]
    Cycle(String),
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Each index is computed at most once; later lookups clone the stored value.
/// Interior mutability lets `get` take `&self` while it recurses into
/// dependencies.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    resolving: RefCell<Vec<I>>,
    _phantom: PhantomData<K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + PartialEq + Debug,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            resolving: RefCell::new(Vec::new()),
            _phantom: PhantomData,
        }
    }

    /// Returns the value for `index`, computing it and its dependencies if needed.
    pub fn get(&self, index: &I) -> Result<K, DpCacheError> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if self.resolving.borrow().contains(index) {
            return Err(DpCacheError::Cycle(format!("{:?}", index)));
        }
        self.resolving.borrow_mut().push(index.clone());

        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, _>>();

        self.resolving.borrow_mut().pop();

        let value = self.problem.compute(index, dep_values?);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        Ok(value)
    }

    /// Consumes the cache and returns the backend with everything computed so far.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}
