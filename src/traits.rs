//! Core traits for streaming estimators
//!
//! Every estimator implements the base [`Sketch`] trait; median estimators
//! additionally implement [`MedianSketch`].

use core::fmt::Debug;

/// Error raised when an estimator is constructed with an unusable configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffer capacity must be at least 2
    InvalidCapacity { found: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidCapacity { found } => {
                write!(f, "invalid capacity: expected at least 2, found {}", found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Error raised when a value cannot be accepted into an estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// NaN or an infinity
    NonFinite(f64),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::NonFinite(v) => write!(f, "non-finite value: {}", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Core trait for all streaming sketches
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    ///
    /// Returns an error if the item is rejected; the sketch is left unchanged.
    fn update(&mut self, item: &Self::Item) -> Result<(), InputError>;

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Median estimation sketches
pub trait MedianSketch: Sketch {
    /// Current median estimate, `None` if nothing has been added
    fn median(&self) -> Option<f64>;

    /// Slots per level
    fn capacity(&self) -> usize;

    /// Number of allocated levels
    fn num_levels(&self) -> usize;
}
