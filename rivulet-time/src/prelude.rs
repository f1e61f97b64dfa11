// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::{
    debounce, debounce_with_timer, delay, delay_with_timer, initial_delay,
    initial_delay_with_timer, interval, interval_with_timer, timer, timer_with_timer, Timer,
    TokioTimer,
};
