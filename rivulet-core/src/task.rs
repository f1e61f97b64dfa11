// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Worker spawning.
//!
//! Every pipeline stage, producer and combinator branch runs as its own tokio task. Workers
//! cooperate only through rendezvous queues and cancellation tokens, never through
//! unsynchronized shared state.

use crate::CancellationToken;
use core::future::Future;
use tokio::task::JoinHandle;

/// Spawns a detached worker for the named stage.
///
/// The returned handle may be awaited to use the worker as a join barrier; dropping it
/// detaches the worker.
pub fn spawn_worker<F>(stage: &'static str, future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    trace!(stage = stage, "worker spawned");
    tokio::spawn(async move {
        future.await;
        trace!(stage = stage, "worker exited");
    })
}

/// A spawned worker paired with a cancellation token, cancelled automatically on drop.
///
/// The spawned future receives a `CancellationToken` it should monitor at its suspension
/// points. Dropping (or replacing) the `ScopedTask` signals the token; [`join`](Self::join)
/// waits for the worker to finish instead.
///
/// # Example
///
/// ```rust
/// use rivulet_core::ScopedTask;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = ScopedTask::spawn("ticker", |cancel| async move {
///     tokio::select! {
///         _ = cancel.cancelled() => println!("stopped early"),
///         _ = tokio::time::sleep(Duration::from_millis(10)) => println!("fired"),
///     }
/// });
///
/// task.join().await;
/// # }
/// ```
#[derive(Debug)]
pub struct ScopedTask {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ScopedTask {
    /// Spawn a worker with cooperative cancellation support.
    pub fn spawn<F, Fut>(stage: &'static str, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = spawn_worker(stage, f(cancel.clone()));

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Signal the worker to stop. It stops at its next cancellation checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the worker to run to completion without cancelling it.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(join_error) = handle.await {
                warn!("scoped worker ended abnormally: {}", join_error);
            }
        }
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        // A joined task has already finished; only live tasks are signalled.
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}
