//! # mos_core - MOSFET Drain-Current Calculation Engine
//!
//! `mos_core` is the computational heart of AutoMOS, evaluating the
//! operating-point drain-current equations for NMOS and PMOS MOSFETs under
//! a long-channel model (LCM) and a velocity-saturated short-channel model
//! (SCM).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Interactive decisions stay outside**: sign confirmation and
//!   parameter reuse are explicit inputs, never prompts inside the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use mos_core::calculations::drain_current::{calculate, DrainCurrentInput};
//! use mos_core::device::{BodyEffect, ChannelModel, Polarity, Terminals};
//! use mos_core::units::format_metric;
//!
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
//! assert_eq!(format_metric(result.id_amps, "amps"), "3.80000 milliamps");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Drain-current evaluation and region classification
//! - [`device`] - Polarity, model, region, and bias-point value types
//! - [`process`] - Oxide capacitance and transconductance derivation
//! - [`threshold`] - Enhancement-convention sign check
//! - [`session`] - Caller-held cross-evaluation parameter state
//! - [`units`] - Entry-unit conversions and metric-prefix formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod device;
pub mod errors;
pub mod process;
pub mod session;
pub mod threshold;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DrainCurrentInput, DrainCurrentResult};
pub use device::{BodyEffect, ChannelModel, OperatingRegion, Polarity, ShortChannelGeometry, Terminals};
pub use errors::{MosError, MosResult};
pub use session::SessionParameters;
