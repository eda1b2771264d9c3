//! First-true-wins branch evaluation
//!
//! Clinical group definitions are written as ordered guarded branches with
//! a default. [`Cascade`] keeps that shape explicit: arms are appended in
//! precedence order and the first arm whose guard holds supplies the
//! result, so each branch can be read and tested on its own.

/// An ordered list of guarded outcomes with a mandatory default
#[derive(Debug, Clone)]
pub struct Cascade<T> {
    arms: Vec<(bool, T)>,
}

impl<T> Default for Cascade<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cascade<T> {
    /// Start an empty cascade
    pub fn new() -> Self {
        Self { arms: Vec::new() }
    }

    /// Append an arm; earlier arms take precedence
    #[must_use]
    pub fn when(mut self, guard: bool, outcome: T) -> Self {
        self.arms.push((guard, outcome));
        self
    }

    /// Resolve to the outcome of the first arm whose guard holds, or `default`
    pub fn otherwise(self, default: T) -> T {
        self.arms
            .into_iter()
            .find_map(|(guard, outcome)| guard.then_some(outcome))
            .unwrap_or(default)
    }
}
