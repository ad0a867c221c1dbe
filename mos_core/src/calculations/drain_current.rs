//! # Operating-Point Drain Current
//!
//! Evaluates the closed-form drain-current equations for an NMOS or PMOS
//! MOSFET under the long-channel model (LCM) or the velocity-saturated
//! short-channel model (SCM).
//!
//! ## Assumptions
//!
//! - Enhancement-mode square-law device
//! - Body effect via gamma and the surface potential 2*phi_F, active only
//!   when VS != VB
//! - Channel-length modulation via lambda, referenced to VDSSAT
//! - PMOS is the mirror of NMOS: VSG/VBS/VSD take the roles of VGS/VSB/VDS
//!   and the body-effect shift subtracts from VTPO instead of adding
//!
//! ## Formula Summary
//!
//! With `Vov` the gate overdrive and `V` the drain-to-source voltage in the
//! mirrored frame:
//!
//! | Model | VDSSAT | Triode | Saturation |
//! |-------|--------|--------|------------|
//! | LCM | `Vov` | `k*(Vov*V - V^2/2)` | `(k/2)*Vov^2*(1+lambda*(V-VDSSAT))` |
//! | SCM | `Vov*EC*L/(Vov+EC*L)` | `k/(1+V/(EC*L))*(Vov*V - V^2/2)` | `(k/2)*EC*L*Vov^2/(Vov+EC*L)*(1+lambda*(V-VDSSAT))` |
//!
//! ## Example
//!
//! ```rust
//! use mos_core::calculations::drain_current::{calculate, DrainCurrentInput};
//! use mos_core::device::{BodyEffect, ChannelModel, OperatingRegion, Polarity, Terminals};
//!
//! // LCM NMOS biased into triode
//! let input = DrainCurrentInput {
//!     polarity: Polarity::Nmos,
//!     model: ChannelModel::LongChannel,
//!     terminals: Terminals { vg: 5.0, vd: 1.0, vs: 0.0, vb: 0.0 },
//!     vt0: 0.7,
//!     body: BodyEffect { gamma: 0.0, phi_2f: 0.0 },
//!     k: 1e-3,
//!     lambda: 0.0,
//!     geometry: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.region, OperatingRegion::Triode);
//! assert!((result.id_amps - 3.8e-3).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::device::{
    BodyEffect, ChannelModel, OperatingRegion, Polarity, ShortChannelGeometry, Terminals,
};
use crate::errors::{MosError, MosResult};

/// Input parameters for a drain-current evaluation.
///
/// One struct covers all four model/polarity combinations; the short-channel
/// geometry is required only when `model` is [`ChannelModel::ShortChannel`].
///
/// ## JSON Example (SCM NMOS)
///
/// ```json
/// {
///   "polarity": "NMOS",
///   "model": "ShortChannel",
///   "terminals": { "vg": 2.5, "vd": 2.5, "vs": 0.0, "vb": 0.0 },
///   "vt0": 0.7,
///   "body": { "gamma": 0.4, "phi_2f": 0.6 },
///   "k": 0.3515,
///   "lambda": 0.05,
///   "geometry": { "ec": 4e4, "l": 1e-4 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainCurrentInput {
    /// Device polarity (NMOS or PMOS)
    pub polarity: Polarity,

    /// Channel model (long- or short-channel)
    pub model: ChannelModel,

    /// Terminal voltages (V)
    pub terminals: Terminals,

    /// Zero-bias threshold voltage VTNO/VTPO (V)
    ///
    /// Expected to follow the enhancement convention; see
    /// [`crate::threshold`] for the entry-time sign check.
    pub vt0: f64,

    /// Body-effect constants
    pub body: BodyEffect,

    /// Process transconductance coefficient k (A/V^2)
    pub k: f64,

    /// Channel-length modulation coefficient lambda (1/V)
    pub lambda: f64,

    /// Critical field and channel length, required for the SCM only
    pub geometry: Option<ShortChannelGeometry>,
}

impl DrainCurrentInput {
    /// Validate input parameters.
    pub fn validate(&self) -> MosResult<()> {
        match self.model {
            ChannelModel::LongChannel => Ok(()),
            ChannelModel::ShortChannel => {
                let geometry = self
                    .geometry
                    .ok_or_else(|| MosError::missing_field("geometry"))?;
                if geometry.ec_l() == 0.0 {
                    return Err(MosError::invalid_input(
                        "geometry",
                        format!("EC = {}, L = {}", geometry.ec, geometry.l),
                        "The EC*L product must be nonzero",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Results from a drain-current evaluation.
///
/// The region label is part of the result contract: callers report it
/// alongside the numeric current, and the tests assert on it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id_amps": 0.0038,
///   "region": "TRIODE",
///   "vt_eff": 0.7,
///   "vdsat": 4.3,
///   "overdrive": 4.3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainCurrentResult {
    /// Drain current ID (A)
    pub id_amps: f64,

    /// Operating region the current was evaluated in
    pub region: OperatingRegion,

    /// Effective threshold after the body-effect shift (V)
    pub vt_eff: f64,

    /// Saturation drain voltage VDSSAT (V)
    pub vdsat: f64,

    /// Gate overdrive: VGS - VTN_eff for NMOS, VSG + VTP_eff for PMOS (V)
    pub overdrive: f64,
}

/// Calculate the drain current at one bias point.
///
/// This is a pure function: region classification happens inside and is
/// reported on the result. NMOS and PMOS share the skeleton through a sign
/// transform rather than duplicated code paths.
///
/// # Arguments
///
/// * `input` - Device description and bias point
///
/// # Returns
///
/// * `Ok(DrainCurrentResult)` - Current, region, and derived voltages
/// * `Err(MosError)` - Missing SCM geometry, or a bias point that makes a
///   formula denominator vanish
///
/// # Example
///
/// ```rust
/// use mos_core::calculations::drain_current::{calculate, DrainCurrentInput};
/// use mos_core::device::{BodyEffect, ChannelModel, OperatingRegion, Polarity, Terminals};
///
/// // Gate below threshold: the device is off and the current is exactly zero
/// let input = DrainCurrentInput {
///     polarity: Polarity::Nmos,
///     model: ChannelModel::LongChannel,
///     terminals: Terminals { vg: 0.0, vd: 5.0, vs: 0.0, vb: 0.0 },
///     vt0: 0.7,
///     body: BodyEffect { gamma: 0.0, phi_2f: 0.0 },
///     k: 1e-3,
///     lambda: 0.0,
///     geometry: None,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.region, OperatingRegion::Off);
/// assert_eq!(result.id_amps, 0.0);
/// ```
pub fn calculate(input: &DrainCurrentInput) -> MosResult<DrainCurrentResult> {
    input.validate()?;

    let t = &input.terminals;

    // Mirror transform: PMOS works on VSG/VBS/VSD where NMOS works on
    // VGS/VSB/VDS, and the body-effect shift enters with opposite sign.
    let (vgs, vsb, vds, sign) = match input.polarity {
        Polarity::Nmos => (t.vg - t.vs, t.vs - t.vb, t.vd - t.vs, 1.0),
        Polarity::Pmos => (t.vs - t.vg, t.vb - t.vs, t.vs - t.vd, -1.0),
    };

    // Effective threshold: body effect applies only with nonzero
    // source-bulk bias
    let vt_eff = if t.vs != t.vb {
        let phi = input.body.phi_2f.abs();
        let shift_arg = phi + vsb;
        if shift_arg < 0.0 {
            return Err(MosError::degenerate(format!(
                "body-effect square root argument |2phi_F| + VSB = {} is negative",
                shift_arg
            )));
        }
        input.vt0 + sign * input.body.gamma * (shift_arg.sqrt() - phi.sqrt())
    } else {
        input.vt0
    };

    // Overdrive in the mirrored frame: VGS - VTN_eff, or VSG + VTP_eff.
    // Off exactly when the overdrive is negative, for both polarities.
    let overdrive = vgs - sign * vt_eff;

    // validate() has already established geometry presence and a nonzero
    // EC*L for the SCM; ec_l stays unused (0.0) for the LCM.
    let (vdsat, ec_l) = match (input.model, input.geometry) {
        (ChannelModel::LongChannel, _) => (overdrive, 0.0),
        (ChannelModel::ShortChannel, Some(geometry)) => {
            let ec_l = geometry.ec_l();
            let denom = overdrive + ec_l;
            if denom == 0.0 {
                return Err(MosError::degenerate(format!(
                    "overdrive {} cancels EC*L = {} in the VDSSAT denominator",
                    overdrive, ec_l
                )));
            }
            (overdrive * ec_l / denom, ec_l)
        }
        (ChannelModel::ShortChannel, None) => {
            return Err(MosError::missing_field("geometry"));
        }
    };

    let (region, id_amps) = if overdrive < 0.0 {
        (OperatingRegion::Off, 0.0)
    } else if vds <= vdsat {
        let id = match input.model {
            ChannelModel::LongChannel => input.k * (overdrive * vds - vds * vds / 2.0),
            ChannelModel::ShortChannel => {
                let velocity_factor = 1.0 + vds / ec_l;
                if velocity_factor == 0.0 {
                    return Err(MosError::degenerate(format!(
                        "VDS = {} cancels EC*L = {} in the triode denominator",
                        vds, ec_l
                    )));
                }
                input.k / velocity_factor * (overdrive * vds - vds * vds / 2.0)
            }
        };
        (OperatingRegion::Triode, id)
    } else {
        let clm = 1.0 + input.lambda * (vds - vdsat);
        let id = match input.model {
            ChannelModel::LongChannel => input.k / 2.0 * overdrive * overdrive * clm,
            ChannelModel::ShortChannel => {
                input.k / 2.0 * ec_l * (overdrive * overdrive / (overdrive + ec_l)) * clm
            }
        };
        (OperatingRegion::Saturation, id)
    };

    Ok(DrainCurrentResult {
        id_amps,
        region,
        vt_eff,
        vdsat,
        overdrive,
    })
}
