// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Token-gated forwarding.
//!
//! - [`until_token`] forwards until the token is cancelled, then completes downstream.
//! - [`after_token`] leaves the source unread until the token is cancelled, then forwards
//!   everything.

use rivulet_core::{boxed, stage, BoxOperator, CancellationToken, Emitter};

/// Forwards source values until `token` is cancelled, then completes downstream.
///
/// Source values arriving afterwards are read and discarded until the source completes.
pub fn until_token<T: Send + 'static>(token: CancellationToken) -> BoxOperator<T> {
    boxed(stage(
        "until_token",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            loop {
                let value = tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    value = upstream.recv() => value,
                };
                let Some(value) = value else {
                    break;
                };
                downstream.next(value).await;
            }
            downstream.complete();
            while upstream.recv().await.is_some() {}
        },
    ))
}

/// Holds the source back until `token` is cancelled, then forwards every value.
pub fn after_token<T: Send + 'static>(token: CancellationToken) -> BoxOperator<T> {
    boxed(stage(
        "after_token",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = downstream.completed() => {}
            }
            while let Some(value) = upstream.recv().await {
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}
