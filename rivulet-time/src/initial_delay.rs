// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::{Timer, TokioTimer};
use core::time::Duration;
use rivulet_core::{boxed, stage_with, BoxOperator, Emitter};
use tokio::sync::oneshot;

/// Holds every value back until `duration` has elapsed since subscription, then forwards
/// normally.
///
/// The source is not read during the wait, so values produced early are delivered late
/// rather than dropped.
pub fn initial_delay<T: Send + 'static>(duration: Duration) -> BoxOperator<T> {
    initial_delay_with_timer(duration, TokioTimer)
}

/// [`initial_delay`] driven by a custom [`Timer`].
pub fn initial_delay_with_timer<T, TM>(duration: Duration, timer: TM) -> BoxOperator<T>
where
    T: Send + 'static,
    TM: Timer,
{
    let (subscribed_tx, subscribed_rx) = oneshot::channel::<()>();
    let builder = Emitter::<T>::builder().on_subscribe(move || {
        let _ = subscribed_tx.send(());
    });

    boxed(stage_with(
        "initial_delay",
        builder,
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let gate = async {
                // A dropped latch means the stage was torn down unsubscribed.
                if subscribed_rx.await.is_ok() {
                    timer.sleep_future(duration).await;
                }
            };
            tokio::select! {
                biased;
                _ = downstream.completed() => {}
                _ = gate => {}
            }

            while let Some(value) = upstream.recv().await {
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}
