//! Remedian approximate median estimator
//!
//! Implementation of the remedian (Rousseeuw & Bassett, 1990): a running
//! median estimate over an unbounded stream kept in a small hierarchy of
//! fixed-size buffers.
//!
//! Raw values fill the level 0 buffer. When a buffer fills, it collapses to
//! its exact median, which is pushed one level up, so a value at level `i`
//! stands for `capacity^i` inputs. Memory grows with the number of levels,
//! which is logarithmic in the stream length.
//!
//! # Thread Safety
//!
//! `Remedian` holds only owned data and is `Send + Sync`. Queries take
//! `&self`; concurrent writers need an external lock such as
//! `Arc<Mutex<_>>`.

use super::buffer::Buffer;
use super::select::{exact_median, weighted_median, WeightedValue};
use crate::math;
use crate::traits::{ConfigError, InputError, MedianSketch, Sketch};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Capacity used by [`Remedian::default`], the base of the original paper
pub const DEFAULT_CAPACITY: usize = 11;

/// Remedian median sketch
///
/// Estimates the median of a stream in `O(capacity × log_capacity(n))`
/// memory:
///
/// - `O(1)` amortized work per insertion, at most one new level per write
/// - exact answer while fewer than `capacity` values have been written
/// - weighted median across levels once any buffer has collapsed
///
/// # Capacity
///
/// Every level holds `capacity` values. Larger capacities give a more
/// accurate estimate at the cost of memory. Must be at least 2.
///
/// # Example
///
/// ```
/// use remedian::median::Remedian;
///
/// let mut remedian = Remedian::new(11);
///
/// for i in 1..=1000 {
///     remedian.write(i as f64).unwrap();
/// }
///
/// let median = remedian.median().unwrap();
/// assert!(median > 400.0 && median < 600.0);
/// ```
#[derive(Clone, Debug)]
pub struct Remedian {
    /// Slots per level
    capacity: usize,
    /// Level buffers, index = level
    levels: Vec<Buffer>,
    /// Total count of accepted values
    count: u64,
}

impl Remedian {
    /// Create a new remedian with the given per-level capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 2.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 2,
            "capacity must be at least 2, got {}",
            capacity
        );
        Self::with_capacity_unchecked(capacity)
    }

    /// Create a new remedian, returning an error for an invalid capacity
    ///
    /// A capacity of 0 or 1 is rejected: a single-slot buffer is full after
    /// every insert and the cascade would never stop.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < 2 {
            return Err(ConfigError::InvalidCapacity { found: capacity });
        }
        Ok(Self::with_capacity_unchecked(capacity))
    }

    fn with_capacity_unchecked(capacity: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "remedian", capacity, "sketch_created");

        Self {
            capacity,
            levels: Vec::new(),
            count: 0,
        }
    }

    /// Get the per-level capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffer at `level`, if allocated
    pub fn level(&self, level: usize) -> Option<&Buffer> {
        self.levels.get(level)
    }

    /// All allocated buffers, lowest level first
    pub fn levels(&self) -> &[Buffer] {
        &self.levels
    }

    /// Add a value to the stream
    ///
    /// Returns [`InputError::NonFinite`] for NaN or infinite values, leaving
    /// the estimator unchanged.
    pub fn write(&mut self, mut value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFinite(value));
        }

        let mut level = 0;
        self.ensure_level(level);

        loop {
            let buffer = &mut self.levels[level];
            buffer.insert(value);
            if !buffer.is_full() {
                break;
            }

            // A full buffer has no empty slots, so every value takes part.
            let mut values = buffer.to_vec();
            buffer.clear();
            let Some(collapsed) = exact_median(&mut values) else {
                break;
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(target: "remedian", level, median = collapsed, "buffer_collapsed");

            level += 1;
            self.ensure_level(level);
            value = collapsed;
        }

        self.count += 1;
        Ok(())
    }

    /// Current median estimate
    ///
    /// Returns `None` if nothing has been written. With a single retained
    /// value that value is returned as is; otherwise every retained value is
    /// weighted by `capacity^level` and the weighted median is taken.
    pub fn median(&self) -> Option<f64> {
        let mut retained = self.levels.iter().flat_map(Buffer::values);
        let first = retained.next()?;
        if retained.next().is_none() {
            return Some(first);
        }

        let mut samples = self.weighted_values();
        weighted_median(&mut samples)
    }

    /// Allocate `level` if it is the next one up
    fn ensure_level(&mut self, level: usize) {
        if level == self.levels.len() {
            self.levels.push(Buffer::new(self.capacity));

            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "remedian",
                level,
                capacity = self.capacity,
                "level_allocated"
            );
        }
    }

    /// Weight of a value retained at `level`
    fn level_weight(&self, level: usize) -> f64 {
        math::powi(self.capacity as f64, level as i32)
    }

    /// Every retained value paired with its level weight
    fn weighted_values(&self) -> Vec<WeightedValue> {
        self.levels
            .iter()
            .enumerate()
            .flat_map(|(level, buffer)| {
                let weight = self.level_weight(level);
                buffer.values().map(move |v| WeightedValue::new(v, weight))
            })
            .collect()
    }
}

impl Default for Remedian {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Sketch for Remedian {
    type Item = f64;

    fn update(&mut self, item: &f64) -> Result<(), InputError> {
        self.write(*item)
    }

    fn clear(&mut self) {
        self.levels.clear();
        self.count = 0;
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.levels.capacity() * core::mem::size_of::<Buffer>()
            + self.levels.len() * self.capacity * core::mem::size_of::<Option<f64>>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl MedianSketch for Remedian {
    fn median(&self) -> Option<f64> {
        Remedian::median(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn num_levels(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Remedian {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Remedian", 3)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("levels", &self.levels)?;
        state.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
