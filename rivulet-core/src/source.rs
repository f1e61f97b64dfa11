// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Producers: static values, the trivial sources, and the external-queue bridge.
//!
//! Every constructor builds a fresh emitter, so independent subscriptions never share
//! completion state. Constructors that spawn a producer worker must run inside a tokio
//! runtime; [`Observable::empty`] and [`Observable::never`] do not spawn anything.

use crate::task::spawn_worker;
use crate::{Emitter, Observable};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::{ReceiverStream, UnboundedReceiverStream};

impl<T: Send + 'static> Observable<T> {
    /// Emits every value of `values` in order, then completes.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let emitter = Emitter::new();
        let producer = emitter.clone();
        let values = values.into_iter();
        spawn_worker("from_iter", async move {
            for value in values {
                if !producer.next(value).await {
                    break;
                }
            }
            producer.complete();
        });
        Self::new(emitter)
    }

    /// Emits `value` once, then completes.
    pub fn of(value: T) -> Self {
        Self::from_iter(std::iter::once(value))
    }

    /// Completes without emitting.
    pub fn empty() -> Self {
        let emitter = Emitter::new();
        emitter.complete();
        Self::new(emitter)
    }

    /// Never emits and never completes on its own; ends only when cancelled.
    pub fn never() -> Self {
        Self::new(Emitter::new())
    }

    /// Forwards every value of an external stream until that stream ends, then completes.
    ///
    /// No buffering is added: the stream is polled only when the previous value has been
    /// taken downstream. Completing the observable stops polling.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        let emitter = Emitter::new();
        let producer = emitter.clone();
        spawn_worker("from_stream", async move {
            let mut stream = Box::pin(stream);
            loop {
                let value = tokio::select! {
                    biased;
                    _ = producer.completed() => break,
                    value = stream.next() => value,
                };
                match value {
                    Some(value) => {
                        if !producer.next(value).await {
                            break;
                        }
                    }
                    None => break,
                }
            }
            producer.complete();
        });
        Self::new(emitter)
    }

    /// Bridges a bounded tokio channel; completes once every sender is dropped.
    pub fn from_receiver(receiver: mpsc::Receiver<T>) -> Self {
        Self::from_stream(ReceiverStream::new(receiver))
    }

    /// Bridges an unbounded tokio channel; completes once every sender is dropped.
    pub fn from_unbounded_receiver(receiver: mpsc::UnboundedReceiver<T>) -> Self {
        Self::from_stream(UnboundedReceiverStream::new(receiver))
    }
}
