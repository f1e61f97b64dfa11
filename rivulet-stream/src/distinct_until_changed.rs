// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Suppression of consecutive duplicates.
//!
//! Only the immediately preceding emitted value is remembered; a value equal to one seen
//! earlier is emitted again as soon as something different came in between.
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_stream::distinct;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = Observable::from_iter(vec![1, 1, 2, 1]);
//! let (values, _unsubscribe) = source.pipe(vec![distinct()]).subscribe();
//! assert_eq!(values.collect::<Vec<_>>().await, vec![1, 2, 1]);
//! # }
//! ```

use rivulet_core::{boxed, stage, BoxOperator, Emitter};

/// Emits a value when it differs from the previously emitted one.
pub fn distinct<T>() -> BoxOperator<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    distinct_stage("distinct", |previous: &T, current: &T| previous == current)
}

/// Like [`distinct`], with a custom equality: `same(previous, current) == true` suppresses
/// `current`.
pub fn distinct_with<T, F>(same: F) -> BoxOperator<T>
where
    T: Clone + Send + 'static,
    F: FnMut(&T, &T) -> bool + Send + 'static,
{
    distinct_stage("distinct_with", same)
}

fn distinct_stage<T, F>(name: &'static str, mut same: F) -> BoxOperator<T>
where
    T: Clone + Send + 'static,
    F: FnMut(&T, &T) -> bool + Send + 'static,
{
    boxed(stage(
        name,
        move |upstream: Emitter<T>, downstream: Emitter<T>| async move {
            let mut previous: Option<T> = None;
            while let Some(value) = upstream.recv().await {
                let repeated = previous
                    .as_ref()
                    .is_some_and(|previous| same(previous, &value));
                if !repeated {
                    previous = Some(value.clone());
                    downstream.next(value).await;
                }
            }
            downstream.complete();
        },
    ))
}
