//! Fixed-capacity level buffer

#[cfg(feature = "std")]
use std::{boxed::Box, vec, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

/// One level of the remedian hierarchy
///
/// Holds `capacity` slots that fill from index 0 onwards without gaps, so the
/// buffer is full exactly when its last slot is occupied. Empty slots are
/// `None`; any finite `f64`, zero and negatives included, is a real value.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer {
    slots: Box<[Option<f64>]>,
    /// Number of occupied slots (always a prefix of `slots`)
    len: usize,
}

impl Buffer {
    /// Create an empty buffer with `capacity` slots
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the last slot is occupied
    pub fn is_full(&self) -> bool {
        matches!(self.slots.last(), Some(Some(_)))
    }

    /// Raw slot view, `None` marking an empty slot
    pub fn slots(&self) -> &[Option<f64>] {
        &self.slots
    }

    /// Occupied values in slot order (not sorted)
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Put `value` into the first empty slot
    ///
    /// Does nothing when the buffer is already full; the cascade always
    /// collapses a full buffer before inserting again.
    pub(crate) fn insert(&mut self, value: f64) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(value);
            self.len += 1;
        }
    }

    /// Copy the occupied values out for sorting
    pub(crate) fn to_vec(&self) -> Vec<f64> {
        self.values().collect()
    }

    /// Reset every slot to empty
    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Buffer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.slots.iter())
    }
}
