//! Single-slot memoization for engine calls.
//!
//! Every engine function is pure, so a presentation layer recomputing on
//! each keystroke only needs the last (input, output) pair cached. Not
//! required for correctness.

/// A one-entry cache keyed by the full input value.
#[derive(Debug, Default)]
pub struct Memo<I, O> {
    slot: Option<(I, O)>,
    pub hits: u64,
    pub misses: u64,
}

impl<I: PartialEq + Clone, O: Clone> Memo<I, O> {
    pub fn new() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached output for `input`, or compute and cache it.
    pub fn get_or_compute<F: FnOnce(&I) -> O>(&mut self, input: I, compute: F) -> O {
        if let Some((cached_in, cached_out)) = &self.slot {
            if *cached_in == input {
                self.hits += 1;
                return cached_out.clone();
            }
        }
        self.misses += 1;
        let output = compute(&input);
        self.slot = Some((input, output.clone()));
        output
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
