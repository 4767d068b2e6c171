//! # Remedian
//!
//! Constant-memory approximate median for data streams.
//!
//! The remedian keeps a small hierarchy of fixed-size buffers. Raw values
//! fill the bottom buffer; each time a buffer fills it collapses to its exact
//! median, which moves one level up. The estimate is available at any point
//! and memory grows only logarithmically with the stream length, which makes
//! it a fit for telemetry aggregation, monitoring pipelines and embedded
//! measurement where the stream cannot be held in memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use remedian::prelude::*;
//!
//! let mut latency = Remedian::new(11);
//! for ms in [12.0, 15.0, 11.0, 90.0, 14.0, 13.0] {
//!     latency.write(ms).unwrap();
//! }
//! println!("Median latency: ~{:?} ms", latency.median());
//! ```
//!
//! ## Invalid Input
//!
//! Construction and ingestion validate their arguments instead of silently
//! corrupting the estimate:
//!
//! ```rust
//! use remedian::median::Remedian;
//! use remedian::traits::{ConfigError, InputError};
//!
//! assert_eq!(
//!     Remedian::try_new(1).unwrap_err(),
//!     ConfigError::InvalidCapacity { found: 1 }
//! );
//!
//! let mut remedian = Remedian::new(5);
//! assert!(matches!(remedian.write(f64::NAN), Err(InputError::NonFinite(_))));
//! assert_eq!(remedian.median(), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `median` (default): the remedian estimator and median kernels
//! - `full`: Enable everything below
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Serialize estimator snapshots
//! - `tracing`: Emit `tracing` events on level allocation and buffer collapse

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg_attr(not(feature = "median"), allow(dead_code))]
mod math;

#[cfg(feature = "median")]
#[cfg_attr(docsrs, doc(cfg(feature = "median")))]
pub mod median;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "median")]
    pub use crate::median::Remedian;
}

#[cfg(feature = "median")]
pub use median::Remedian;
