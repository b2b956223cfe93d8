use crate::request::Request;
use std::fmt;
use std::sync::Arc;

pub type RequestPredicateFn = dyn Fn(&Request) -> bool + Send + Sync;

/// Registry of "should CORS apply to this request" predicates.
///
/// Consulted both to enable CORS for paths outside `urls_regex` and to
/// authorize an origin the allow-lists rejected. Every registered predicate
/// is invoked; a single `true` wins and none can veto another.
#[derive(Clone, Default)]
pub struct RequestHooks {
    predicates: Vec<Arc<RequestPredicateFn>>,
}

impl RequestHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Request) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate));
        self
    }

    pub fn with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Request) -> bool + Send + Sync + 'static,
    {
        self.register(predicate);
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn check(&self, request: &Request) -> bool {
        self.predicates
            .iter()
            .fold(false, |allowed, predicate| predicate(request) | allowed)
    }
}

impl fmt::Debug for RequestHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHooks")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;
