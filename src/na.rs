//! # Not-available sentinels
//!
//! Absent or unparseable numeric fields are represented by a reserved value per
//! numeric width instead of an `Option`, so typed sentence structs stay flat and
//! `Copy`. Every codec checks [`NotAvailable::is_na`] before applying a unit
//! multiplier.

/// Sentinel for absent `f64` values.
pub const DOUBLE_NA: f64 = -1e9;
/// Sentinel for absent `u8` values.
pub const UINT8_NA: u8 = 0xff;
/// Sentinel for absent `i8` values.
pub const INT8_NA: i8 = 0x7f;
/// Sentinel for absent `u16` values.
pub const UINT16_NA: u16 = 0xffff;
/// Sentinel for absent `i16` values.
pub const INT16_NA: i16 = 0x7fff;
/// Sentinel for absent `u32` values.
pub const UINT32_NA: u32 = 0xffff_ffff;
/// Sentinel for absent `i32` values.
pub const INT32_NA: i32 = 0x7fff_ffff;

/// A numeric type with a reserved "not available" value.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::na::{DOUBLE_NA, NotAvailable};
///
/// assert!(DOUBLE_NA.is_na());
/// assert!(!1.5f64.is_na());
/// assert_eq!(u8::NA.to_option(), None);
/// assert_eq!(f64::from_option(Some(2.0)), 2.0);
/// ```
pub trait NotAvailable: Copy + PartialEq {
    /// The reserved sentinel value.
    const NA: Self;

    /// Returns `true` if the value equals the sentinel.
    fn is_na(self) -> bool {
        self == Self::NA
    }

    /// Converts the sentinel into `None`.
    fn to_option(self) -> Option<Self> {
        if self.is_na() { None } else { Some(self) }
    }

    /// Converts `None` into the sentinel.
    fn from_option(value: Option<Self>) -> Self {
        value.unwrap_or(Self::NA)
    }
}

macro_rules! impl_not_available {
    ($($t:ty => $na:expr),* $(,)?) => ($(
        impl NotAvailable for $t {
            const NA: Self = $na;
        }
    )*)
}

impl_not_available!(
    u8 => UINT8_NA,
    i8 => INT8_NA,
    u16 => UINT16_NA,
    i16 => INT16_NA,
    u32 => UINT32_NA,
    i32 => INT32_NA,
);

impl NotAvailable for f64 {
    const NA: Self = DOUBLE_NA;
}

/// Returns `true` if `value` equals its width's sentinel.
pub fn is_na<T: NotAvailable>(value: T) -> bool {
    value.is_na()
}

/// Multiplies `value` by `factor` unless it is NA, in which case NA is returned.
pub fn scale(value: f64, factor: f64) -> f64 {
    if value.is_na() { value } else { value * factor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(is_na(UINT8_NA));
        assert!(is_na(INT8_NA));
        assert!(is_na(UINT16_NA));
        assert!(is_na(INT16_NA));
        assert!(is_na(UINT32_NA));
        assert!(is_na(INT32_NA));
        assert!(is_na(DOUBLE_NA));

        assert!(!is_na(0u8));
        assert!(!is_na(-1i8));
        assert!(!is_na(0u32));
        assert!(!is_na(-1.0f64));
    }

    #[test]
    fn test_double_below_sentinel_is_a_value() {
        assert!(!(-2e9f64).is_na());
        assert!(!f64::MIN.is_na());
        assert_eq!((-2e9f64).to_option(), Some(-2e9));
        assert_eq!(scale(-2e9, 0.5), -1e9);
    }

    #[test]
    fn test_scale_skips_na() {
        assert_eq!(scale(DOUBLE_NA, 1852.0), DOUBLE_NA);
        assert_eq!(scale(2.0, 0.5), 1.0);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(i16::NA.to_option(), None);
        assert_eq!(12i16.to_option(), Some(12));
        assert_eq!(u32::from_option(None), UINT32_NA);
    }
}
