//! # Session Parameters
//!
//! The interactive session holds a small amount of state across
//! evaluations: the body-effect constants and lambda entered once at
//! session start, and the most recently computed transconductance for each
//! polarity so a follow-up evaluation can reuse it instead of re-deriving.
//!
//! The struct is caller-held - the evaluator itself stays a pure function
//! and never reads or writes it.
//!
//! ## Example
//!
//! ```rust
//! use mos_core::device::Polarity;
//! use mos_core::session::SessionParameters;
//!
//! let mut session = SessionParameters::new(0.4, 0.6, 0.05);
//! assert!(!session.has_k(Polarity::Nmos));
//!
//! session.set_k(Polarity::Nmos, 0.3515);
//! assert_eq!(session.k_for(Polarity::Nmos), Some(0.3515));
//! assert_eq!(session.k_for(Polarity::Pmos), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::device::{BodyEffect, Polarity};

/// Device parameters that survive across evaluations in one session.
///
/// Replaced wholesale when the user asks to change device parameters;
/// the per-polarity transconductances reset with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionParameters {
    /// Body-effect coefficient gamma (V^0.5)
    pub gamma: f64,

    /// Surface-potential parameter 2*phi_F (V)
    pub phi_2f: f64,

    /// Channel-length modulation coefficient lambda (1/V)
    pub lambda: f64,

    /// Last computed NMOS transconductance KN (A/V^2), if any
    pub kn: Option<f64>,

    /// Last computed PMOS transconductance KP (A/V^2), if any
    pub kp: Option<f64>,
}

impl SessionParameters {
    /// Start a session with the given process constants and no remembered
    /// transconductances.
    pub fn new(gamma: f64, phi_2f: f64, lambda: f64) -> Self {
        SessionParameters {
            gamma,
            phi_2f,
            lambda,
            kn: None,
            kp: None,
        }
    }

    /// The body-effect constants as the evaluator consumes them
    pub fn body_effect(&self) -> BodyEffect {
        BodyEffect {
            gamma: self.gamma,
            phi_2f: self.phi_2f,
        }
    }

    /// The remembered transconductance for a polarity, if one was computed
    pub fn k_for(&self, polarity: Polarity) -> Option<f64> {
        match polarity {
            Polarity::Nmos => self.kn,
            Polarity::Pmos => self.kp,
        }
    }

    /// Whether a transconductance for this polarity can be reused
    pub fn has_k(&self, polarity: Polarity) -> bool {
        self.k_for(polarity).is_some()
    }

    /// Remember a transconductance for a polarity
    pub fn set_k(&mut self, polarity: Polarity, k: f64) {
        match polarity {
            Polarity::Nmos => self.kn = Some(k),
            Polarity::Pmos => self.kp = Some(k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_k() {
        let session = SessionParameters::new(0.4, 0.6, 0.05);
        assert!(!session.has_k(Polarity::Nmos));
        assert!(!session.has_k(Polarity::Pmos));
    }

    #[test]
    fn test_k_tracked_per_polarity() {
        let mut session = SessionParameters::new(0.4, 0.6, 0.05);
        session.set_k(Polarity::Nmos, 1e-3);

        assert_eq!(session.k_for(Polarity::Nmos), Some(1e-3));
        assert_eq!(session.k_for(Polarity::Pmos), None);
    }

    #[test]
    fn test_body_effect_view() {
        let session = SessionParameters::new(0.4, 0.6, 0.05);
        let body = session.body_effect();

        assert_eq!(body.gamma, 0.4);
        assert_eq!(body.phi_2f, 0.6);
    }
}
