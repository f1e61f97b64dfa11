// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-driven selection.

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Forwards only the values for which `predicate` returns `true`.
pub fn filter<T, F>(mut predicate: F) -> BoxOperator<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    boxed(stage(
        "filter",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            while let Some(value) = upstream.recv().await {
                if predicate(&value) {
                    downstream.next(value).await;
                }
            }
            downstream.complete();
        },
    ))
}

/// Emits the first value matching `predicate`, then keeps draining the source to its end.
///
/// The predicate is not called again once a match was found. Emits nothing when no value
/// matches.
pub fn find<T, F>(mut predicate: F) -> BoxOperator<T>
where
    T: Send + 'static,
    F: FnMut(&T) -> bool + Send + 'static,
{
    boxed(stage(
        "find",
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut found = false;
            while let Some(value) = upstream.recv().await {
                if !found && predicate(&value) {
                    found = true;
                    downstream.next(value).await;
                }
            }
            downstream.complete();
        },
    ))
}
