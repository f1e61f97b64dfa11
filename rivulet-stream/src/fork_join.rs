// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Waiting for several sources and emitting their final values together.

use crate::last;
use futures::future::join_all;
use futures::StreamExt;
use rivulet_core::{spawn_worker, Emitter, Observable, Unsubscribe};

/// Emits one `Vec` holding the last value of every source, in input order, once all sources
/// have completed.
///
/// Each source is reduced with [`last`] and subscribed immediately. If any source completes
/// without emitting, nothing is emitted and the result just completes. With no sources the
/// result emits an empty `Vec` straight away.
pub fn fork_join<T, I>(sources: I) -> Observable<Vec<T>>
where
    T: Send + 'static,
    I: IntoIterator<Item = Observable<T>>,
{
    let subscriptions: Vec<_> = sources
        .into_iter()
        .map(|source| source.pipe(vec![last()]).subscribe())
        .collect();
    if subscriptions.is_empty() {
        return Observable::of(Vec::new());
    }

    let triggers: Vec<Unsubscribe> = subscriptions
        .iter()
        .map(|(_, trigger)| trigger.clone())
        .collect();
    let joined = Emitter::builder()
        .on_complete(move || {
            for trigger in &triggers {
                trigger.cancel();
            }
        })
        .build();

    let output = joined.clone();
    spawn_worker("fork_join", async move {
        let finals = join_all(
            subscriptions
                .into_iter()
                .map(|(mut values, _)| async move { values.next().await }),
        )
        .await;
        let finals: Option<Vec<T>> = finals.into_iter().collect();
        if let Some(finals) = finals {
            output.next(finals).await;
        }
        output.complete();
    });

    Observable::new(joined)
}
