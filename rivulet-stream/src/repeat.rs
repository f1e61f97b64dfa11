// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Re-emits every source value `n` times in a row, preserving source order.
///
/// `repeat(0)` emits nothing but still drains the source.
pub fn repeat<T: Clone + Send + 'static>(n: usize) -> BoxOperator<T> {
    boxed(stage(
        "repeat",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            while let Some(value) = upstream.recv().await {
                for _ in 0..n {
                    downstream.next(value.clone()).await;
                }
            }
            downstream.complete();
        },
    ))
}
