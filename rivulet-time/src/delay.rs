// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::{Timer, TokioTimer};
use core::time::Duration;
use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Forwards every value after sleeping `duration`.
///
/// Values are handled one at a time: the wait for the second value starts only once the
/// first has been delivered, so latency accumulates along the sequence.
pub fn delay<T: Send + 'static>(duration: Duration) -> BoxOperator<T> {
    delay_with_timer(duration, TokioTimer)
}

/// [`delay`] driven by a custom [`Timer`].
pub fn delay_with_timer<T, TM>(duration: Duration, timer: TM) -> BoxOperator<T>
where
    T: Send + 'static,
    TM: Timer,
{
    boxed(stage(
        "delay",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            while let Some(value) = upstream.recv().await {
                tokio::select! {
                    biased;
                    _ = downstream.completed() => break,
                    _ = timer.sleep_future(duration) => {}
                }
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}
