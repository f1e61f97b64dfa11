// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mapping each value to an inner observable and forwarding its emissions.
//!
//! # Sequencing
//!
//! Inner observables are processed one at a time. The stage reads an outer value, subscribes
//! to `mapper(value)` and forwards that inner observable until it completes; only then does it
//! read the next outer value. An earlier inner observable is therefore never abandoned when a
//! newer outer value is available: it is drained to its end first.
//!
//! Every inner cancellation trigger is kept and all of them are fired when the stage
//! completes, naturally or by cancellation. An inner observable that never completes holds
//! the stage on that inner until the stage is cancelled.

use futures::StreamExt;
use parking_lot::Mutex;
use rivulet_core::{stage_with, Emitter, Observable, Unsubscribe};
use std::sync::Arc;

/// Forwards the emissions of `mapper(value)` for each value of `source`, one inner at a time.
pub fn switch_map<T, U, F>(source: Observable<T>, mut mapper: F) -> Observable<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> Observable<U> + Send + 'static,
{
    source.lift(move |upstream: Emitter<T>| {
        let inner_triggers: Arc<Mutex<Vec<Unsubscribe>>> = Arc::default();

        let pending = Arc::clone(&inner_triggers);
        let builder = Emitter::builder().on_complete(move || {
            let triggers = std::mem::take(&mut *pending.lock());
            for trigger in triggers {
                trigger.cancel();
            }
        });

        let apply = stage_with(
            "switch_map",
            builder,
            move |upstream: Emitter<T>, downstream: Emitter<U>| async move {
                while let Some(value) = upstream.recv().await {
                    let (mut inner, trigger) = mapper(value).subscribe();
                    {
                        let mut triggers = inner_triggers.lock();
                        if downstream.is_completed() {
                            trigger.cancel();
                        } else {
                            triggers.push(trigger);
                        }
                    }
                    while let Some(inner_value) = inner.next().await {
                        downstream.next(inner_value).await;
                    }
                }
                downstream.complete();
            },
        );
        apply(upstream)
    })
}
