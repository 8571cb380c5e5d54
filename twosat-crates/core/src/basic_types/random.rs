use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::twosat_assert_moderate;

/// Abstraction for randomness, in order to swap out different source of randomness.
///
/// This is especially useful when testing, to control which clauses and literals are picked by
/// the random walk.
///
/// # Testing
/// We have also created an implementation of this trait which takes as input a list of `usize`s and
/// `bool`s and returns them in that order. This allows the user to define deterministic test-cases
/// while the implementation makes use of an implementation of the [`Random`] trait.
pub trait Random: Debug {
    /// Generates a bool with probability `probability` of being true. It should hold that
    /// `probability ∈ [0, 1]`, this method will panic if this is not the case.
    ///
    /// # Example
    /// This example will show how to use a concrete implementation of [`SeedableRng`] to implement
    /// a fair coin toss (e.g. a [bernoulli trial](https://en.wikipedia.org/wiki/Bernoulli_trial) with probability 0.5).
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use twosat_core::Random;
    /// // First we create our random object
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// // Then we flip a coin with probability 0.5
    /// let coin_flip_outcome = rng.generate_bool(0.5);
    /// // A sanity check to ensure that the method has not panicked
    /// assert!(coin_flip_outcome || !coin_flip_outcome);
    /// ```
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Generates a random usize in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[range.start, range.end)`
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use twosat_core::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let elements = vec!["This", "is", "a", "test"];
    /// let selected_index = rng.generate_usize_in_range(0..elements.len());
    /// assert!(selected_index < elements.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

// We provide a blanket implementation of the trait for any type which implements `SeedableRng`,
// `Rng` and `Debug` to ensure that we can use any "regular" random generator where we expect an
// implementation of Random.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        twosat_assert_moderate!(
            (0.0..=1.0).contains(&probability),
            "It should hold that 0.0 <= {probability} <= 1.0"
        );

        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}
