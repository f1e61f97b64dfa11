// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// The clock every timing operator waits on.
///
/// Operators default to [`TokioTimer`]; the `*_with_timer` variants accept any other
/// implementation, for instance one that scales or records waits.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + 'static
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// Resolves once `deadline` has been reached. Returns at once for past deadlines.
    fn sleep_until(&self, deadline: Self::Instant) -> Self::Sleep {
        let now = self.now();
        let remaining = if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        };
        self.sleep_future(remaining)
    }
}

/// Tokio's clock. Honours `tokio::time::pause` in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}
