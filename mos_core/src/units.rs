//! # Unit Types
//!
//! Type-safe wrappers for the entry units the calculator accepts, plus the
//! metric-prefix display formatter.
//!
//! ## Design Philosophy
//!
//! The physics formulas run in CGS-like centimeter units throughout
//! ([`crate::process`]), but device geometry is entered in the units found
//! on datasheets: width in micrometers, oxide thickness in nanometers,
//! saturation velocity in millions of cm/s. Simple newtype wrappers keep
//! the two worlds from mixing while serializing as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use mos_core::units::{Centimeters, Micrometers, Nanometers};
//!
//! let width: Centimeters = Micrometers(1.0).into();
//! assert_eq!(width.0, 1e-4);
//!
//! let tox: Centimeters = Nanometers(20.0).into();
//! assert!((tox.0 - 2e-6).abs() < 1e-18);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters (the unit the physics runs in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in micrometers (device width entry unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micrometers(pub f64);

/// Length in nanometers (oxide thickness entry unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nanometers(pub f64);

impl From<Micrometers> for Centimeters {
    fn from(um: Micrometers) -> Self {
        Centimeters(um.0 * 1e-4)
    }
}

impl From<Nanometers> for Centimeters {
    fn from(nm: Nanometers) -> Self {
        Centimeters(nm.0 * 1e-7)
    }
}

// ============================================================================
// Velocity Units
// ============================================================================

/// Velocity in centimeters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CmPerSecond(pub f64);

/// Velocity in millions of centimeters per second (saturation velocity entry unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaCmPerSecond(pub f64);

impl From<MegaCmPerSecond> for CmPerSecond {
    fn from(v: MegaCmPerSecond) -> Self {
        CmPerSecond(v.0 * 1e6)
    }
}

impl Centimeters {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl CmPerSecond {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Metric-Prefix Formatting
// ============================================================================

/// Magnitude buckets at powers of 1000, largest first.
const METRIC_PREFIXES: [(f64, &str); 9] = [
    (1e12, "tera"),
    (1e9, "giga"),
    (1e6, "mega"),
    (1e3, "kilo"),
    (1.0, ""),
    (1e-3, "milli"),
    (1e-6, "micro"),
    (1e-9, "nano"),
    (1e-12, "pico"),
];

/// Format a value with an order-of-magnitude metric prefix.
///
/// Picks the largest bucket the magnitude reaches and renders a
/// five-decimal mantissa, e.g. `format_metric(0.0038, "amps")` gives
/// `"3.80000 milliamps"`. Values smaller than 1 pico-unit fall back to the
/// raw value with the unprefixed suffix.
///
/// # Example
///
/// ```rust
/// use mos_core::units::format_metric;
///
/// assert_eq!(format_metric(0.0038, "amps"), "3.80000 milliamps");
/// assert_eq!(format_metric(1.7575e-7, "F/cm^2"), "175.75000 nanoF/cm^2");
/// ```
pub fn format_metric(value: f64, unit: &str) -> String {
    for (factor, prefix) in METRIC_PREFIXES {
        if value.abs() >= factor {
            return format!("{:.5} {}{}", value / factor, prefix, unit);
        }
    }

    // Below 1 pico-unit: raw value, unprefixed suffix
    format!("{} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_to_cm() {
        let w: Centimeters = Micrometers(2.5).into();
        assert!((w.0 - 2.5e-4).abs() < 1e-16);
    }

    #[test]
    fn test_tox_to_cm() {
        let tox: Centimeters = Nanometers(20.0).into();
        assert!((tox.0 - 2e-6).abs() < 1e-18);
    }

    #[test]
    fn test_vsat_to_cm_per_s() {
        let v: CmPerSecond = MegaCmPerSecond(1.0).into();
        assert_eq!(v.0, 1e6);
    }

    #[test]
    fn test_format_milliamps() {
        assert_eq!(format_metric(0.0038, "amps"), "3.80000 milliamps");
    }

    #[test]
    fn test_format_unprefixed_range() {
        assert_eq!(format_metric(3.5, "amps"), "3.50000 amps");
    }

    #[test]
    fn test_format_negative_uses_magnitude() {
        assert_eq!(format_metric(-0.0038, "amps"), "-3.80000 milliamps");
    }

    #[test]
    fn test_format_fallback_below_pico() {
        let s = format_metric(1.5e-13, "amps");
        // Falls through every bucket: raw value, no prefix
        assert!(s.ends_with(" amps"));
        assert!(!s.contains("pico"));
    }

    #[test]
    fn test_format_zero_falls_through() {
        assert_eq!(format_metric(0.0, "amps"), "0 amps");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let w = Micrometers(12.5);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, "12.5");
    }
}
