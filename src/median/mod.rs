//! Median estimation algorithms
//!
//! This module provides a constant-memory approximate median for data
//! streams, plus the exact and weighted median kernels it is built from.
//!
//! # Algorithms
//!
//! - [`Remedian`]: hierarchy of fixed-size buffers collapsing to medians
//! - [`exact_median`]: median of a small in-memory slice
//! - [`weighted_median`]: median of values carrying unequal weights
//!
//! # Example
//!
//! ```
//! use remedian::median::Remedian;
//!
//! let mut remedian = Remedian::new(11);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0] {
//!     remedian.write(value).unwrap();
//! }
//!
//! // still below capacity, so the answer is exact
//! assert_eq!(remedian.median(), Some(5.5));
//! ```

mod buffer;
mod remedian;
mod select;

pub use buffer::Buffer;
pub use remedian::{Remedian, DEFAULT_CAPACITY};
pub use select::{exact_median, weighted_median, WeightedValue};
