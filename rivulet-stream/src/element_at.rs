// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-element selection: [`first`], [`last`] and [`element_at`].
//!
//! Each stage holds at most one candidate while it drains the source to completion, and only
//! then emits zero or one value. None of them cancel the source early.

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

fn select_one<T, F>(name: &'static str, mut keep: F) -> BoxOperator<T>
where
    T: Send + 'static,
    F: FnMut(usize, &Option<T>) -> bool + Send + 'static,
{
    boxed(stage(
        name,
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut candidate = None;
            let mut index = 0;
            while let Some(value) = upstream.recv().await {
                if keep(index, &candidate) {
                    candidate = Some(value);
                }
                index += 1;
            }
            if let Some(value) = candidate {
                downstream.next(value).await;
            }
            downstream.complete();
        },
    ))
}

/// Emits the first value once the source has completed.
pub fn first<T: Send + 'static>() -> BoxOperator<T> {
    select_one("first", |_, candidate| candidate.is_none())
}

/// Emits the last value once the source has completed.
pub fn last<T: Send + 'static>() -> BoxOperator<T> {
    select_one("last", |_, _| true)
}

/// Emits the value at zero-based position `k` once the source has completed.
///
/// Emits nothing if the source produced `k` values or fewer.
pub fn element_at<T: Send + 'static>(k: usize) -> BoxOperator<T> {
    select_one("element_at", move |index, _| index == k)
}
