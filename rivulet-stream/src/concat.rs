// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{stage, Emitter, Observable};

/// Collects every source value and emits them as one `Vec` when the source completes.
///
/// Always emits exactly once, with an empty `Vec` for an empty source.
pub fn concat<T: Send + 'static>(source: Observable<T>) -> Observable<Vec<T>> {
    source.lift(stage(
        "concat",
        |upstream: Emitter<T>, downstream: Emitter<Vec<T>>| async move {
            let mut collected = Vec::new();
            while let Some(value) = upstream.recv().await {
                collected.push(value);
            }
            downstream.next(collected).await;
            downstream.complete();
        },
    ))
}
