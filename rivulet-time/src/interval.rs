// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock sources.
//!
//! Both sources are cold. Building one spawns a worker that parks on a one-shot latch
//! released by the first subscription; the clock starts only then. Completing the
//! observable (directly or by cancelling the subscription) stops the clock.
//!
//! Ticks follow fixed deadlines (`start + n * period`). A consumer slower than the period
//! misses ticks instead of receiving a burst of stale ones.

use crate::timer::{Timer, TokioTimer};
use core::time::Duration;
use rivulet_core::{spawn_worker, CancellationToken, Emitter, Observable};
use tokio::sync::oneshot;

/// Emits the current instant every `period`, plus once at subscription when `start_now`
/// is set. Never completes on its own.
pub fn interval(period: Duration, start_now: bool) -> Observable<tokio::time::Instant> {
    interval_with_timer(period, start_now, TokioTimer)
}

/// [`interval`] driven by a custom [`Timer`].
pub fn interval_with_timer<TM: Timer>(
    period: Duration,
    start_now: bool,
    timer: TM,
) -> Observable<TM::Instant> {
    clock("interval", period, start_now, None, timer)
}

/// Emits the current instant once after `delay`, then completes. With `start_now`, also
/// emits once at subscription.
pub fn timer(delay: Duration, start_now: bool) -> Observable<tokio::time::Instant> {
    timer_with_timer(delay, start_now, TokioTimer)
}

/// [`timer`] driven by a custom [`Timer`].
pub fn timer_with_timer<TM: Timer>(
    delay: Duration,
    start_now: bool,
    timer: TM,
) -> Observable<TM::Instant> {
    clock("timer", delay, start_now, Some(1), timer)
}

fn clock<TM: Timer>(
    name: &'static str,
    period: Duration,
    start_now: bool,
    ticks: Option<usize>,
    timer: TM,
) -> Observable<TM::Instant> {
    let (subscribed_tx, subscribed_rx) = oneshot::channel::<()>();
    let stop = CancellationToken::new();
    let stop_on_complete = stop.clone();

    let emitter = Emitter::<TM::Instant>::builder()
        .on_subscribe(move || {
            let _ = subscribed_tx.send(());
        })
        .on_complete(move || {
            stop_on_complete.cancel();
        })
        .build();

    let out = emitter.clone();
    spawn_worker(name, async move {
        tokio::select! {
            biased;
            _ = stop.cancelled() => return,
            latch = subscribed_rx => {
                if latch.is_err() {
                    return;
                }
            }
        }
        trace!(stage = name, "clock started");

        if start_now && !out.next(timer.now()).await {
            return;
        }

        let mut remaining = ticks;
        let mut deadline = timer.now() + period;
        while remaining != Some(0) {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = timer.sleep_until(deadline) => {}
            }
            if !out.next(timer.now()).await {
                break;
            }
            remaining = remaining.map(|n| n - 1);

            deadline = deadline + period;
            if period > Duration::ZERO {
                let now = timer.now();
                while deadline <= now {
                    deadline = deadline + period;
                }
            }
        }

        trace!(stage = name, "clock stopped");
        out.complete();
    });

    Observable::new(emitter)
}
