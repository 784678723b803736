//! # Tick-Encoded Temporal Values
//!
//! The schema stores every temporal column as a signed 64-bit count of
//! 100-nanosecond units ("ticks"). Two semantic roles share this encoding
//! and are distinguished only by the field's declared kind, never by the
//! value itself:
//!
//! - **Timestamp**: ticks since 0001-01-01T00:00:00 UTC, decoded to an
//!   absolute [`DateTime<Utc>`]
//! - **Duration**: an elapsed magnitude of the same unit, decoded to a
//!   [`TimeDelta`] with no UTC or calendar interpretation
//!
//! Conversions fail on out-of-range input instead of saturating.

use chrono::{DateTime, TimeDelta, Utc};
use eyre::Result;

/// 100 ns units per second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Ticks from 0001-01-01T00:00:00 UTC to the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Decodes a tick count into the absolute UTC instant it denotes.
pub fn timestamp_from_ticks(ticks: i64) -> Result<DateTime<Utc>> {
    let unix_ticks = ticks
        .checked_sub(UNIX_EPOCH_TICKS)
        .ok_or_else(|| out_of_instant_range(ticks))?;
    let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(|| out_of_instant_range(ticks))
}

/// Encodes a UTC instant as a tick count. Sub-tick nanoseconds truncate;
/// instants the tick range cannot hold fail.
pub fn ticks_from_timestamp(instant: DateTime<Utc>) -> Result<i64> {
    let sub_ticks = i64::from(instant.timestamp_subsec_nanos()) / NANOS_PER_TICK;
    instant
        .timestamp()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(UNIX_EPOCH_TICKS))
        .and_then(|ticks| ticks.checked_add(sub_ticks))
        .ok_or_else(|| eyre::eyre!("instant {} is outside the representable tick range", instant))
}

/// Decodes a tick count into an elapsed span. No calendar semantics apply;
/// negative tick counts decode to negative spans.
pub fn duration_from_ticks(ticks: i64) -> Result<TimeDelta> {
    let secs = ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    TimeDelta::new(secs, nanos)
        .ok_or_else(|| eyre::eyre!("tick count {} is outside the representable span range", ticks))
}

/// Encodes an elapsed span as a tick count. Sub-tick nanoseconds truncate;
/// spans the tick range cannot hold fail.
pub fn ticks_from_duration(span: TimeDelta) -> Result<i64> {
    let sub_ticks = i64::from(span.subsec_nanos()) / NANOS_PER_TICK;
    span.num_seconds()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(sub_ticks))
        .ok_or_else(|| eyre::eyre!("span {} is outside the representable tick range", span))
}

fn out_of_instant_range(ticks: i64) -> eyre::Report {
    eyre::eyre!("tick count {} is outside the representable instant range", ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_ticks_decode_to_1970() {
        let instant = timestamp_from_ticks(UNIX_EPOCH_TICKS).unwrap();
        assert_eq!(instant, DateTime::<Utc>::from_timestamp(0, 0).unwrap());
    }

    #[test]
    fn timestamp_round_trips_through_ticks() {
        let ticks = 637_920_000_000_000_000;
        let instant = timestamp_from_ticks(ticks).unwrap();
        assert_eq!(ticks_from_timestamp(instant).unwrap(), ticks);
    }

    #[test]
    fn known_tick_count_decodes_to_expected_instant() {
        // 637920000000000000 ticks == 2022-06-28T08:00:00Z.
        let instant = timestamp_from_ticks(637_920_000_000_000_000).unwrap();
        assert_eq!(instant, DateTime::<Utc>::from_timestamp(1_656_403_200, 0).unwrap());
    }

    #[test]
    fn sub_second_ticks_decode_to_nanoseconds() {
        let instant = timestamp_from_ticks(UNIX_EPOCH_TICKS + 1).unwrap();
        assert_eq!(instant.timestamp_subsec_nanos(), 100);
    }

    #[test]
    fn pre_unix_instants_decode_with_negative_unix_seconds() {
        let instant = timestamp_from_ticks(UNIX_EPOCH_TICKS - TICKS_PER_SECOND).unwrap();
        assert_eq!(instant.timestamp(), -1);
    }

    #[test]
    fn duration_decodes_magnitude_without_epoch_shift() {
        let span = duration_from_ticks(30 * TICKS_PER_SECOND).unwrap();
        assert_eq!(span, TimeDelta::seconds(30));
    }

    #[test]
    fn duration_and_timestamp_disagree_for_the_same_ticks() {
        let ticks = 637_920_000_000_000_000;
        let span = duration_from_ticks(ticks).unwrap();
        assert_eq!(span.num_seconds(), ticks / TICKS_PER_SECOND);
        let instant = timestamp_from_ticks(ticks).unwrap();
        assert_ne!(instant.timestamp(), span.num_seconds());
    }

    #[test]
    fn negative_duration_round_trips() {
        let span = duration_from_ticks(-15_000_000).unwrap();
        assert_eq!(span, TimeDelta::milliseconds(-1500));
        assert_eq!(ticks_from_duration(span).unwrap(), -15_000_000);
    }

    #[test]
    fn duration_round_trips_through_ticks() {
        let ticks = 3 * 60 * TICKS_PER_SECOND + 5;
        let span = duration_from_ticks(ticks).unwrap();
        assert_eq!(ticks_from_duration(span).unwrap(), ticks);
    }

    #[test]
    fn extreme_negative_ticks_fail_instead_of_wrapping() {
        assert!(timestamp_from_ticks(i64::MIN).is_err());
        assert!(timestamp_from_ticks(i64::MIN + UNIX_EPOCH_TICKS - 1).is_err());
    }

    #[test]
    fn instant_past_the_tick_range_fails_to_encode() {
        assert!(ticks_from_timestamp(DateTime::<Utc>::MAX_UTC).is_err());
        assert!(ticks_from_timestamp(DateTime::<Utc>::MIN_UTC).is_err());
    }

    #[test]
    fn span_past_the_tick_range_fails_to_encode() {
        assert!(ticks_from_duration(TimeDelta::MAX).is_err());
        assert!(ticks_from_duration(TimeDelta::MIN).is_err());
    }
}
