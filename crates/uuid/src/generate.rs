//! Time-based generation.
//!
//! Both generators combine a fresh random 128-bit seed with the current UTC time, counted in
//! 100-nanosecond ticks since the Gregorian calendar reform (1582-10-15). They differ only in
//! where the tick bytes land.
//!
//! Generation keeps no state of its own: the clock and the random source are the only shared
//! resources, so concurrent calls need no locking. Two calls inside the same tick differ only
//! in their random tail.

use crate::{Uuid, UuidError};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

/// Ticks from 0001-01-01 to the Gregorian reform, 1582-10-15.
const GREGORIAN_REFORM_TICKS: i64 = 499_163_040_000_000_000;

/// Ticks from 0001-01-01 to the Unix epoch, 1970-01-01.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: u32 = 100;

const RESET_VERSION_MASK: u8 = 0b0000_1111;
const VERSION_1_FLAG: u8 = 0b0001_0000;
const RESET_VARIANT_MASK: u8 = 0b0011_1111;
const VARIANT_FLAG: u8 = 0b1000_0000;

/// Which byte layout a generated identifier uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeLayout {
    /// Version 1 field order: low tick bytes first. See [`Uuid::new_time_ordered`].
    #[default]
    TimeOrdered,
    /// Most significant tick byte first. See [`Uuid::new_sort_optimized`].
    SortOptimized,
}

impl TimeLayout {
    /// Returns the kebab-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            TimeLayout::TimeOrdered => "time-ordered",
            TimeLayout::SortOptimized => "sort-optimized",
        }
    }
}

impl fmt::Display for TimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeLayout {
    type Err = UuidError;

    /// Accepts `time-ordered` (alias `v1`) and `sort-optimized` (alias `mysql`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time-ordered" | "v1" => Ok(TimeLayout::TimeOrdered),
            "sort-optimized" | "mysql" => Ok(TimeLayout::SortOptimized),
            _ => Err(UuidError::InvalidInput(format!(
                "time layout must be 'time-ordered' or 'sort-optimized', got: '{s}'"
            ))),
        }
    }
}

/// Converts a UTC instant to 100-ns ticks since the Gregorian reform.
pub(crate) fn gregorian_ticks(now: DateTime<Utc>) -> i64 {
    let unix_ticks =
        now.timestamp() * TICKS_PER_SECOND + i64::from(now.timestamp_subsec_nanos() / NANOS_PER_TICK);
    unix_ticks + UNIX_EPOCH_TICKS - GREGORIAN_REFORM_TICKS
}

/// Ticks `[3, 2, 1, 0, 5, 4]`, then the versioned high byte and tick byte 6, then the seed tail.
pub(crate) fn time_ordered_bytes(ticks: i64, seed: [u8; 16]) -> [u8; 16] {
    let t = ticks.to_le_bytes();
    let mut out = seed;
    out[0] = t[3];
    out[1] = t[2];
    out[2] = t[1];
    out[3] = t[0];
    out[4] = t[5];
    out[5] = t[4];
    out[6] = (t[7] & RESET_VERSION_MASK) | VERSION_1_FLAG;
    out[7] = t[6];
    out[8] = (seed[8] & RESET_VARIANT_MASK) | VARIANT_FLAG;
    out
}

/// Versioned high tick byte, then tick bytes 6 down to 0, then the seed tail.
pub(crate) fn sort_optimized_bytes(ticks: i64, seed: [u8; 16]) -> [u8; 16] {
    let t = ticks.to_le_bytes();
    let mut out = seed;
    out[0] = (t[7] & RESET_VERSION_MASK) | VERSION_1_FLAG;
    for (slot, &tick_byte) in out[1..8].iter_mut().zip(t[..7].iter().rev()) {
        *slot = tick_byte;
    }
    out[8] = (seed[8] & RESET_VARIANT_MASK) | VARIANT_FLAG;
    out
}

fn random_seed() -> [u8; 16] {
    ::uuid::Uuid::new_v4().into_bytes()
}

fn current_ticks() -> i64 {
    let ticks = gregorian_ticks(Utc::now());
    tracing::trace!(ticks, "read clock for UUID generation");
    ticks
}

impl Uuid {
    /// Generates an identifier in version 1 field order.
    ///
    /// Bytes 0-7 hold the tick count as `time_low`, `time_mid` and `time_hi` with version `1`;
    /// byte 8 carries the `10` variant bits; bytes 8-15 are otherwise random. Byte-wise order
    /// does not follow generation order.
    ///
    /// # Returns
    ///
    /// Returns a fresh identifier. Safe to call from any number of threads.
    pub fn new_time_ordered() -> Self {
        Self::from_bytes(time_ordered_bytes(current_ticks(), random_seed()))
    }

    /// Generates an identifier whose bytes sort in generation order.
    ///
    /// Byte 0 holds the high tick byte with version `1` in its top nibble, bytes 1-7 the
    /// remaining tick bytes from most to least significant, and bytes 8-15 the same
    /// variant-marked random tail as [`Uuid::new_time_ordered`]. Suited to clustered indexes
    /// such as MySQL `BINARY(16)` primary keys.
    ///
    /// # Returns
    ///
    /// Returns a fresh identifier that compares greater than those generated in earlier ticks.
    /// Values from the same tick are ordered by their random tail only.
    pub fn new_sort_optimized() -> Self {
        Self::from_bytes(sort_optimized_bytes(current_ticks(), random_seed()))
    }

    /// Generates an identifier in the given layout.
    pub fn generate(layout: TimeLayout) -> Self {
        match layout {
            TimeLayout::TimeOrdered => Self::new_time_ordered(),
            TimeLayout::SortOptimized => Self::new_sort_optimized(),
        }
    }
}
