// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable bookkeeping of a search run.
//!
//! The search window itself lives in the engine; this module holds the
//! counters that describe what the run did.

pub mod statistics;

pub use statistics::{Counters, Statistics};
