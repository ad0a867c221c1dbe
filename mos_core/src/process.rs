//! # Process Parameter Solving
//!
//! Derives the process transconductance coefficient k from device geometry
//! when it is not given directly:
//!
//! ```text
//! Cox = eps_Si * eps_0 / TOX          (F/cm^2)
//! k   = 2 * W * VSAT * Cox / (EC * L) (A/V^2)
//! ```
//!
//! All inputs are in CGS centimeter units; the caller converts from entry
//! units (micrometers, nanometers, million cm/s) with the wrappers in
//! [`crate::units`].
//!
//! ## Example
//!
//! ```rust
//! use mos_core::process::{solve_k, ProcessInput};
//!
//! let input = ProcessInput {
//!     width_cm: 1e-4,        // 1 um
//!     vsat_cm_per_s: 1e6,
//!     tox_cm: 2e-6,          // 20 nm
//!     ec: 1.0,
//!     l: 1e-4,
//! };
//!
//! let result = solve_k(&input).unwrap();
//! assert!((result.cox_f_per_cm2 - 1.7575e-7).abs() < 1e-10);
//! assert!((result.k - 0.3515).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MosError, MosResult};

/// Relative permittivity of silicon dioxide used by the oxide capacitance
/// formula (dimensionless)
pub const SILICON_EPSILON: f64 = 3.97;

/// Vacuum permittivity eps_0 (F/cm)
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-14;

/// Input parameters for the transconductance solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_cm": 1e-4,
///   "vsat_cm_per_s": 1e6,
///   "tox_cm": 2e-6,
///   "ec": 1.0,
///   "l": 1e-4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Device width W (cm)
    pub width_cm: f64,

    /// Saturation velocity VSAT (cm/s)
    pub vsat_cm_per_s: f64,

    /// Gate oxide thickness TOX (cm)
    pub tox_cm: f64,

    /// Critical field EC (V/cm)
    pub ec: f64,

    /// Channel length L (cm)
    pub l: f64,
}

impl ProcessInput {
    /// Validate input parameters.
    ///
    /// Every field that appears in a denominator must be nonzero; a zero
    /// there is degenerate geometry and is reported as an invalid
    /// parameter instead of propagating an infinity.
    pub fn validate(&self) -> MosResult<()> {
        if self.tox_cm == 0.0 {
            return Err(MosError::invalid_input(
                "tox_cm",
                self.tox_cm.to_string(),
                "Oxide thickness must be nonzero",
            ));
        }
        if self.ec == 0.0 {
            return Err(MosError::invalid_input(
                "ec",
                self.ec.to_string(),
                "Critical field must be nonzero",
            ));
        }
        if self.l == 0.0 {
            return Err(MosError::invalid_input(
                "l",
                self.l.to_string(),
                "Channel length must be nonzero",
            ));
        }
        Ok(())
    }
}

/// Results from the transconductance solve.
///
/// Cox is reported alongside k so the session can display both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Gate oxide capacitance per unit area Cox (F/cm^2)
    pub cox_f_per_cm2: f64,

    /// Process transconductance coefficient k (A/V^2)
    pub k: f64,
}

/// Solve for the process transconductance coefficient.
///
/// # Arguments
///
/// * `input` - Geometry and process values in centimeter units
///
/// # Returns
///
/// * `Ok(ProcessResult)` - Cox and k
/// * `Err(MosError)` - Structured error for degenerate geometry
pub fn solve_k(input: &ProcessInput) -> MosResult<ProcessResult> {
    input.validate()?;

    let cox = SILICON_EPSILON * VACUUM_PERMITTIVITY / input.tox_cm;
    let k = 2.0 * input.width_cm * input.vsat_cm_per_s * cox / (input.ec * input.l);

    Ok(ProcessResult {
        cox_f_per_cm2: cox,
        k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> ProcessInput {
        ProcessInput {
            width_cm: 1e-4,
            vsat_cm_per_s: 1e6,
            tox_cm: 2e-6,
            ec: 1.0,
            l: 1e-4,
        }
    }

    #[test]
    fn test_oxide_capacitance() {
        let result = solve_k(&reference_input()).unwrap();

        // Cox = 3.97 * 8.854e-14 / 2e-6 = 1.75752e-7 F/cm^2
        assert!((result.cox_f_per_cm2 - 1.75752e-7).abs() < 1e-12);
    }

    #[test]
    fn test_transconductance() {
        let result = solve_k(&reference_input()).unwrap();

        // k = 2 * 1e-4 * 1e6 * 1.75752e-7 / (1 * 1e-4) = 0.351504 A/V^2
        assert!((result.k - 0.351504).abs() < 1e-6);
    }

    #[test]
    fn test_scale_invariance() {
        // Doubling width while halving VSAT leaves k unchanged
        let base = solve_k(&reference_input()).unwrap();

        let mut scaled_input = reference_input();
        scaled_input.width_cm *= 2.0;
        scaled_input.vsat_cm_per_s /= 2.0;
        let scaled = solve_k(&scaled_input).unwrap();

        assert!((base.k - scaled.k).abs() < 1e-15);
    }

    #[test]
    fn test_zero_critical_field_rejected() {
        let mut input = reference_input();
        input.ec = 0.0;

        let err = solve_k(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_channel_length_rejected() {
        let mut input = reference_input();
        input.l = 0.0;

        let err = solve_k(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_oxide_thickness_rejected() {
        let mut input = reference_input();
        input.tox_cm = 0.0;

        assert!(solve_k(&input).is_err());
    }
}
