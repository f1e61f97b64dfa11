// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle hooks and hook chains.
//!
//! Hooks are assembled once, when an emitter is built or when a pipeline is composed, and are
//! never mutated afterwards. Composition produces a new [`HookChain`] value that shares the
//! underlying [`Hook`]s, so the same hook may be reachable from several chains (a stage's own
//! view and the composed view handed to the next stage). Each hook still fires at most once.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Callback = Box<dyn FnOnce() + Send>;

/// A callback that fires at most once, however many chains reference it.
#[derive(Clone)]
pub struct Hook {
    callback: Arc<Mutex<Option<Callback>>>,
}

impl Hook {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            callback: Arc::new(Mutex::new(Some(Box::new(callback)))),
        }
    }

    /// Runs the callback unless it already ran.
    ///
    /// The callback runs outside the internal lock, so it may itself fire other hooks.
    pub fn fire(&self) {
        let callback = self.callback.lock().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.callback.lock().is_none()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("fired", &self.has_fired())
            .finish()
    }
}

/// Ordered list of hooks, fired front to back.
#[derive(Clone, Debug, Default)]
pub struct HookChain {
    hooks: Vec<Hook>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `hook` after every hook already in the chain.
    #[must_use]
    pub fn with(mut self, hook: Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Returns a chain that fires `self` first, then `downstream`.
    #[must_use]
    pub fn then(&self, downstream: &HookChain) -> Self {
        let mut hooks = Vec::with_capacity(self.hooks.len() + downstream.hooks.len());
        hooks.extend(self.hooks.iter().cloned());
        hooks.extend(downstream.hooks.iter().cloned());
        Self { hooks }
    }

    pub fn fire(&self) {
        for hook in &self.hooks {
            hook.fire();
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl From<Hook> for HookChain {
    fn from(hook: Hook) -> Self {
        Self { hooks: vec![hook] }
    }
}
