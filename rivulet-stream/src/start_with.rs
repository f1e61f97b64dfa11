// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Injecting a value before or after the source sequence.

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Emits `initial`, then every source value.
pub fn start_with<T: Send + 'static>(initial: T) -> BoxOperator<T> {
    boxed(stage(
        "start_with",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            downstream.next(initial).await;
            while let Some(value) = upstream.recv().await {
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}

/// Emits every source value, then `trailing` once the source has completed.
pub fn end_with<T: Send + 'static>(trailing: T) -> BoxOperator<T> {
    boxed(stage(
        "end_with",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            while let Some(value) = upstream.recv().await {
                downstream.next(value).await;
            }
            downstream.next(trailing).await;
            downstream.complete();
        },
    ))
}
