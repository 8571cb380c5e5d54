/// Options which control the budget of the [`RandomWalkEngine`][super::RandomWalkEngine].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomWalkOptions {
    /// The number of independent walks; if [`None`] then `⌈log₂ N⌉` walks (at least one) are
    /// made, where `N` is the number of variables of the instance.
    pub attempts: Option<u32>,
    /// Every walk takes at most `step_budget_factor × n²` steps, where `n` is the number of
    /// variables which occur in the clauses that remain after pruning (at least one).
    ///
    /// Unlike the textbook `2N²` over the declared number of variables `N`, variables that were
    /// pruned or never occur do not enlarge the budget: a walk only ever flips variables of the
    /// remaining clauses, which is what Papadimitriou's bound counts. An instance over 8 variables
    /// whose clauses only mention 2 of them gets 8 steps per walk, not 128.
    pub step_budget_factor: u64,
    /// Whether variables which occur in a single polarity are fixed before every walk.
    pub prune_pure_literals: bool,
}

impl Default for RandomWalkOptions {
    fn default() -> Self {
        RandomWalkOptions {
            attempts: None,
            step_budget_factor: 2,
            prune_pure_literals: true,
        }
    }
}

impl RandomWalkOptions {
    pub(crate) fn num_attempts(&self, num_variables: u32) -> u32 {
        self.attempts
            .unwrap_or_else(|| ceil_log2(num_variables))
            .max(1)
    }

    pub(crate) fn step_budget(&self, num_walk_variables: usize) -> u64 {
        let n = num_walk_variables.max(1) as u64;
        self.step_budget_factor.saturating_mul(n.saturating_mul(n))
    }
}

fn ceil_log2(value: u32) -> u32 {
    match value {
        0 => 0,
        _ => u32::BITS - (value - 1).leading_zeros(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attempts_are_logarithmic_in_the_number_of_variables() {
        let options = RandomWalkOptions::default();

        assert_eq!(options.num_attempts(0), 1);
        assert_eq!(options.num_attempts(1), 1);
        assert_eq!(options.num_attempts(2), 1);
        assert_eq!(options.num_attempts(3), 2);
        assert_eq!(options.num_attempts(4), 2);
        assert_eq!(options.num_attempts(5), 3);
        assert_eq!(options.num_attempts(1024), 10);
        assert_eq!(options.num_attempts(1025), 11);
    }

    #[test]
    fn explicit_attempts_override_the_default() {
        let options = RandomWalkOptions {
            attempts: Some(7),
            ..Default::default()
        };

        assert_eq!(options.num_attempts(1_000_000), 7);
    }

    #[test]
    fn step_budget_is_quadratic_and_never_zero() {
        let options = RandomWalkOptions::default();

        assert_eq!(options.step_budget(0), 2);
        assert_eq!(options.step_budget(1), 2);
        assert_eq!(options.step_budget(10), 200);
    }
}
