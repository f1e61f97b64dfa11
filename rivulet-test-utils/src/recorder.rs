// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared log of hook invocations, in firing order.
#[derive(Clone, Debug, Default)]
pub struct HookRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl HookRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a hook that appends `label` to the log when fired.
    pub fn hook(&self, label: impl Into<String>) -> impl FnOnce() + Send + 'static {
        let calls = Arc::clone(&self.calls);
        let label = label.into();
        move || calls.lock().push(label)
    }

    pub fn record(&self, label: impl Into<String>) {
        self.calls.lock().push(label.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls.lock().iter().filter(|call| *call == label).count()
    }
}
