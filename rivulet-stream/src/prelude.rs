// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Every operator in one import.

pub use crate::{
    after_token, broadcast, concat, distinct, distinct_with, element_at, end_with, filter,
    finally, find, first, fork_join, last, map, map_to, merge, pairwise, reduce, repeat, skip,
    skip_until, skip_until_token, start_with, switch_map, take, tap, until_token,
};
