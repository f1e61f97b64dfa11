// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Drops the first `n` values and forwards the rest.
pub fn skip<T: Send + 'static>(n: usize) -> BoxOperator<T> {
    boxed(stage(
        "skip",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut skipped = 0;
            while let Some(value) = upstream.recv().await {
                if skipped < n {
                    skipped += 1;
                    continue;
                }
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}
