//! Bounded property — an integer that only accepts writes inside a fixed
//! inclusive range.
//!
//! Used for every ranged device attribute (speaker volume, channel number,
//! brightness level).

/// An integer value guarded by an inclusive `[min, max]` range.
///
/// Out-of-range writes are dropped without any signal to the caller. The
/// initial value is stored as given, so a property may start outside its
/// own range until the first accepted write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedProperty {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedProperty {
    /// Create a property holding `initial`, accepting writes in `[min, max]`.
    #[must_use]
    pub const fn new(initial: i32, min: i32, max: i32) -> Self {
        Self {
            value: initial,
            min,
            max,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn read(&self) -> i32 {
        self.value
    }

    /// Replace the value if `candidate` lies inside the range.
    pub fn write(&mut self, candidate: i32) {
        if (self.min..=self.max).contains(&candidate) {
            self.value = candidate;
        }
    }

    /// Write `value + 1`.
    pub fn increment(&mut self) {
        if let Some(next) = self.value.checked_add(1) {
            self.write(next);
        }
    }

    /// Write `value - 1`.
    pub fn decrement(&mut self) {
        if let Some(next) = self.value.checked_sub(1) {
            self.write(next);
        }
    }
}
