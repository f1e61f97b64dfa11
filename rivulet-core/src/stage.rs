// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Building transforms out of one forwarding worker each.
//!
//! A transform is any `FnOnce(Emitter<In>) -> Emitter<Out>`. [`stage`] and [`stage_with`]
//! build one from an async body that reads the upstream emitter to end-of-stream, writes into
//! the downstream emitter, and completes it. The body runs on its own worker, spawned when the
//! transform is applied.

use crate::task::spawn_worker;
use crate::{Emitter, EmitterBuilder};
use core::future::Future;

/// Builds a transform whose downstream emitter has no hooks of its own.
pub fn stage<T, U, F, Fut>(
    name: &'static str,
    body: F,
) -> impl FnOnce(Emitter<T>) -> Emitter<U> + Send
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(Emitter<T>, Emitter<U>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    stage_with(name, Emitter::builder(), body)
}

/// Builds a transform whose downstream emitter is created from `builder`.
///
/// The hooks are installed before the worker starts, so the worker never races a hook
/// assignment.
pub fn stage_with<T, U, F, Fut>(
    name: &'static str,
    builder: EmitterBuilder<U>,
    body: F,
) -> impl FnOnce(Emitter<T>) -> Emitter<U> + Send
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(Emitter<T>, Emitter<U>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    move |upstream| {
        let downstream = builder.build();
        spawn_worker(name, body(upstream, downstream.clone()));
        downstream
    }
}
