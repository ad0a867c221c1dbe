//! # Threshold Sign Normalization
//!
//! Enhancement-mode devices follow a sign convention for the zero-bias
//! threshold: VTNO >= 0 for NMOS, VTPO <= 0 for PMOS. A value entered with
//! the opposite sign describes a depletion-mode device, which is usually a
//! data-entry mistake rather than intent.
//!
//! The check itself is pure: [`check_enhancement`] reports the proposed
//! correction and the caller (the interactive session) supplies the yes/no
//! decision to [`apply_correction`]. The core never prompts.
//!
//! ## Example
//!
//! ```rust
//! use mos_core::device::Polarity;
//! use mos_core::threshold::{apply_correction, check_enhancement, SignDecision};
//!
//! // A negative NMOS threshold violates the enhancement convention
//! let proposed = check_enhancement(-0.7, Polarity::Nmos);
//! assert_eq!(proposed, Some(0.7));
//!
//! // The caller decides; declining keeps the value as entered
//! assert_eq!(apply_correction(-0.7, SignDecision::Flip), 0.7);
//! assert_eq!(apply_correction(-0.7, SignDecision::Keep), -0.7);
//! ```

use serde::{Deserialize, Serialize};

use crate::device::Polarity;

/// Externally-mediated answer to the sign-correction question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignDecision {
    /// Negate the entered threshold to restore the enhancement convention
    Flip,
    /// Keep the value exactly as entered (the default when unanswered)
    Keep,
}

/// Check a zero-bias threshold against the enhancement convention.
///
/// Returns `Some(-vt0)` - the proposed corrected value - when the sign
/// disagrees with the device polarity, `None` when the value already
/// conforms (including exactly zero, which conforms for both polarities).
/// Conforming values never require a decision.
pub fn check_enhancement(vt0: f64, polarity: Polarity) -> Option<f64> {
    let violates = match polarity {
        Polarity::Nmos => vt0 < 0.0,
        Polarity::Pmos => vt0 > 0.0,
    };

    if violates {
        Some(-vt0)
    } else {
        None
    }
}

/// Apply the caller's decision to an out-of-convention threshold.
pub fn apply_correction(vt0: f64, decision: SignDecision) -> f64 {
    match decision {
        SignDecision::Flip => -vt0,
        SignDecision::Keep => vt0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conforming_nmos_needs_no_decision() {
        assert_eq!(check_enhancement(0.7, Polarity::Nmos), None);
        assert_eq!(check_enhancement(0.0, Polarity::Nmos), None);
    }

    #[test]
    fn test_conforming_pmos_needs_no_decision() {
        assert_eq!(check_enhancement(-0.7, Polarity::Pmos), None);
        assert_eq!(check_enhancement(0.0, Polarity::Pmos), None);
    }

    #[test]
    fn test_violating_nmos_proposes_flip() {
        assert_eq!(check_enhancement(-0.7, Polarity::Nmos), Some(0.7));
    }

    #[test]
    fn test_violating_pmos_proposes_flip() {
        assert_eq!(check_enhancement(0.7, Polarity::Pmos), Some(-0.7));
    }

    #[test]
    fn test_decision_applies() {
        assert_eq!(apply_correction(-0.7, SignDecision::Flip), 0.7);
        assert_eq!(apply_correction(-0.7, SignDecision::Keep), -0.7);
    }
}
