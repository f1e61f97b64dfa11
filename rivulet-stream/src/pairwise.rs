// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{stage, Emitter, Observable};

/// Emits `(previous, current)` for every value after the first.
///
/// A source of n values yields n - 1 pairs, or none when n < 2.
pub fn pairwise<T: Clone + Send + 'static>(source: Observable<T>) -> Observable<(T, T)> {
    source.lift(stage(
        "pairwise",
        |upstream: Emitter<T>, downstream: Emitter<(T, T)>| async move {
            let mut previous: Option<T> = None;
            while let Some(value) = upstream.recv().await {
                if let Some(before) = previous.replace(value.clone()) {
                    downstream.next((before, value)).await;
                }
            }
            downstream.complete();
        },
    ))
}
