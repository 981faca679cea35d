//! Trait definitions for external interactions
//!
//! The wall clock and the random source are the only sources of
//! nondeterminism in Chronicle. Both are injected so tests can pin them.
//! Implementations live in other crates.

/// Source of the current calendar year
///
/// Implemented by the extractor layer (system clock, fixed clock)
pub trait Clock {
    /// The current year
    fn current_year(&self) -> i32;
}

/// Uniform random index selection
///
/// Implemented by the synthesizer layer (thread RNG, seeded RNG)
pub trait RandomSource {
    /// Uniform index in `0..len`; callers never pass `len == 0`
    fn next_index(&mut self, len: usize) -> usize;

    /// Pick a uniformly random element, or `None` for an empty slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}
