/// Milliseconds since the Unix epoch, the unit used for artifact timestamps.
pub type UnixMillis = i64;

/// Focus session length in whole minutes. Fractional durations are not
/// representable; the seed prints the value as a plain integer.
pub type DurationMinutes = u32;
