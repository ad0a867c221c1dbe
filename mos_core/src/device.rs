//! # Device Types
//!
//! Value types describing the transistor being evaluated: polarity, channel
//! model, terminal voltages, body-effect constants, and the short-channel
//! geometry. All are plain aggregates - each evaluation is stateless and
//! independent, so nothing here outlives a single call except by the
//! caller's choice (see [`crate::session`]).

use serde::{Deserialize, Serialize};

/// MOSFET polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    /// n-channel device: enhancement threshold is positive
    Nmos,
    /// p-channel device: enhancement threshold is negative
    Pmos,
}

impl Polarity {
    /// All polarities for UI selection
    pub const ALL: [Polarity; 2] = [Polarity::Nmos, Polarity::Pmos];

    /// Short device code ("NMOS" / "PMOS")
    pub fn code(&self) -> &'static str {
        match self {
            Polarity::Nmos => "NMOS",
            Polarity::Pmos => "PMOS",
        }
    }

    /// Symbol of the zero-bias threshold parameter ("VTNO" / "VTPO")
    pub fn threshold_symbol(&self) -> &'static str {
        match self {
            Polarity::Nmos => "VTNO",
            Polarity::Pmos => "VTPO",
        }
    }

    /// Symbol of the transconductance parameter ("KN" / "KP")
    pub fn k_symbol(&self) -> &'static str {
        match self {
            Polarity::Nmos => "KN",
            Polarity::Pmos => "KP",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Channel model selecting the drain-current formula family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelModel {
    /// Long-channel model (LCM): ignores velocity saturation
    LongChannel,
    /// Short-channel model (SCM): velocity saturation via EC and L
    ShortChannel,
}

impl ChannelModel {
    /// Short model code ("LCM" / "SCM")
    pub fn code(&self) -> &'static str {
        match self {
            ChannelModel::LongChannel => "LCM",
            ChannelModel::ShortChannel => "SCM",
        }
    }
}

impl std::fmt::Display for ChannelModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Operating region of the device at the evaluated bias.
///
/// Derived on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperatingRegion {
    /// Below threshold: zero drain current
    Off,
    /// Drain voltage at or below the saturation voltage
    Triode,
    /// Drain voltage beyond the saturation voltage
    Saturation,
}

impl std::fmt::Display for OperatingRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OperatingRegion::Off => "OFF",
            OperatingRegion::Triode => "TRIODE",
            OperatingRegion::Saturation => "SATURATION",
        };
        write!(f, "{}", label)
    }
}

/// Terminal voltages in volts.
///
/// Any finite reals are accepted; range checks are left to the physics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Terminals {
    /// Gate voltage VG
    pub vg: f64,
    /// Drain voltage VD
    pub vd: f64,
    /// Source voltage VS
    pub vs: f64,
    /// Bulk voltage VB
    pub vb: f64,
}

/// Body-effect process constants.
///
/// Supplied once per session and reused across evaluations until the user
/// replaces them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyEffect {
    /// Body-effect coefficient gamma (V^0.5)
    pub gamma: f64,
    /// Surface-potential parameter 2*phi_F (V).
    ///
    /// The sign is not validated; its absolute value enters the square
    /// roots, so the shift is defined for either sign convention.
    pub phi_2f: f64,
}

/// Short-channel geometry: critical field and channel length.
///
/// Required by the short-channel model only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortChannelGeometry {
    /// Critical field EC (V/cm)
    pub ec: f64,
    /// Channel length L (cm)
    pub l: f64,
}

impl ShortChannelGeometry {
    /// The EC*L product that appears throughout the SCM formulas (V)
    pub fn ec_l(&self) -> f64 {
        self.ec * self.l
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_codes() {
        assert_eq!(Polarity::Nmos.code(), "NMOS");
        assert_eq!(Polarity::Pmos.threshold_symbol(), "VTPO");
        assert_eq!(Polarity::Pmos.k_symbol(), "KP");
    }

    #[test]
    fn test_region_display() {
        assert_eq!(OperatingRegion::Off.to_string(), "OFF");
        assert_eq!(OperatingRegion::Triode.to_string(), "TRIODE");
        assert_eq!(OperatingRegion::Saturation.to_string(), "SATURATION");
    }

    #[test]
    fn test_region_serialization() {
        let json = serde_json::to_string(&OperatingRegion::Saturation).unwrap();
        assert_eq!(json, "\"SATURATION\"");
    }

    #[test]
    fn test_ec_l_product() {
        let geom = ShortChannelGeometry { ec: 1.0, l: 1e-4 };
        assert_eq!(geom.ec_l(), 1e-4);
    }
}
