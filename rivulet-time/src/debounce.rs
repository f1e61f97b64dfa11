// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce.
//!
//! Every incoming value schedules its own emission `duration` later and cancels the one
//! scheduled before it, so only the last value of each quiet window of length `duration`
//! reaches downstream.
//!
//! When the source completes, the pending emission is still given its full quiet period
//! before downstream completes. Nothing is flushed early.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_time::debounce;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (values, _unsubscribe) = Observable::from_iter(vec![1, 2, 3])
//!     .pipe(vec![debounce(Duration::from_millis(20))])
//!     .subscribe();
//!
//! assert_eq!(values.collect::<Vec<_>>().await, vec![3]);
//! # }
//! ```

use crate::timer::{Timer, TokioTimer};
use core::time::Duration;
use rivulet_core::{boxed, stage, BoxOperator, Emitter, ScopedTask};

/// Emits a value only once `duration` has passed without a newer one.
pub fn debounce<T: Send + 'static>(duration: Duration) -> BoxOperator<T> {
    debounce_with_timer(duration, TokioTimer)
}

/// [`debounce`] driven by a custom [`Timer`].
pub fn debounce_with_timer<T, TM>(duration: Duration, timer: TM) -> BoxOperator<T>
where
    T: Send + 'static,
    TM: Timer,
{
    boxed(stage(
        "debounce",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut pending: Option<ScopedTask> = None;

            while let Some(value) = upstream.recv().await {
                let out = downstream.clone();
                let sleep = timer.sleep_future(duration);
                // Replacing the slot drops the previous task, which cancels its emission.
                pending = Some(ScopedTask::spawn("debounce_emit", move |cancel| async move {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return,
                        _ = out.completed() => return,
                        _ = sleep => {}
                    }
                    out.next(value).await;
                }));
            }

            if let Some(task) = pending.take() {
                task.join().await;
            }
            trace!("debounce source drained");
            downstream.complete();
        },
    ))
}
