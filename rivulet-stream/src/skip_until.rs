// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dropping values until a signal arrives.
//!
//! The gate opens when the notifier emits its first value (or when the token is cancelled);
//! values read before that are discarded. The gate never closes again. Completion follows the
//! source, whether or not the gate ever opened.

use core::sync::atomic::{AtomicBool, Ordering};
use futures::StreamExt;
use rivulet_core::{
    boxed, spawn_worker, stage, stage_with, BoxOperator, CancellationToken, Emitter, Observable,
};
use std::sync::Arc;

async fn forward_when_open<T, F>(upstream: Emitter<T>, downstream: Emitter<T>, is_open: F)
where
    T: Send + 'static,
    F: Fn() -> bool,
{
    while let Some(value) = upstream.recv().await {
        if is_open() {
            downstream.next(value).await;
        }
    }
    downstream.complete();
}

/// Drops source values until `notifier` emits for the first time.
///
/// The notifier is subscribed when the operator is applied and cancelled as soon as it has
/// emitted, or when this stage completes.
pub fn skip_until<T, U>(notifier: Observable<U>) -> BoxOperator<T>
where
    T: Send + 'static,
    U: Send + 'static,
{
    boxed(move |upstream: Emitter<T>| {
        let (mut signal, stop_signal) = notifier.subscribe();
        let open = Arc::new(AtomicBool::new(false));

        let gate = Arc::clone(&open);
        let stop = stop_signal.clone();
        spawn_worker("skip_until-notifier", async move {
            if signal.next().await.is_some() {
                gate.store(true, Ordering::Release);
            }
            stop.cancel();
        });

        let builder = Emitter::builder().on_complete(move || stop_signal.cancel());
        let apply = stage_with(
            "skip_until",
            builder,
            move |upstream: Emitter<T>, downstream: Emitter<T>| {
                forward_when_open(upstream, downstream, move || open.load(Ordering::Acquire))
            },
        );
        apply(upstream)
    })
}

/// Drops source values until `token` is cancelled.
pub fn skip_until_token<T: Send + 'static>(token: CancellationToken) -> BoxOperator<T> {
    boxed(stage(
        "skip_until_token",
        move |upstream: Emitter<T>, downstream: Emitter<T>| {
            forward_when_open(upstream, downstream, move || token.is_cancelled())
        },
    ))
}
