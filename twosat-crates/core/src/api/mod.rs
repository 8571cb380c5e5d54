use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::Decision;
use crate::basic_types::DecisionError;
use crate::basic_types::DecisionStrategy;
use crate::basic_types::Instance;
use crate::basic_types::Random;
use crate::basic_types::Verdict;
use crate::engine::random_walk::RandomWalkOptions;
use crate::engine::RandomWalkEngine;
use crate::engine::SccEngine;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The seed of the random walk used by [`decide_randomized`].
pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Decides the instance with `num_variables` variables and the given clauses using the strongly
/// connected components of its implication graph. The answer is exact.
///
/// Fails with [`DecisionError::InvalidLiteral`] if a literal is zero or refers to a variable
/// beyond `num_variables`.
///
/// # Example
/// ```rust
/// # use twosat_core::decide_deterministic;
/// assert_eq!(decide_deterministic(2, [(1, 2), (-1, -2)]), Ok(true));
/// assert_eq!(decide_deterministic(1, [(1, 1), (-1, -1)]), Ok(false));
/// ```
pub fn decide_deterministic(
    num_variables: u32,
    clauses: impl IntoIterator<Item = (i32, i32)>,
) -> Result<bool, DecisionError> {
    let instance = Instance::from_clauses(num_variables, clauses)?;
    Ok(SccEngine::new().decide(&instance).is_satisfiable())
}

/// Decides the instance with a random walk seeded with [`DEFAULT_RANDOM_SEED`].
///
/// Only `true` is certain: `false` means that no satisfying assignment was found within the step
/// budget. Use [`RandomWalkEngine::decide`] to distinguish [`Verdict::Undetermined`] from an
/// exact answer, or [`decide_with_corroboration`] to settle it.
pub fn decide_randomized(
    num_variables: u32,
    clauses: impl IntoIterator<Item = (i32, i32)>,
) -> Result<bool, DecisionError> {
    let instance = Instance::from_clauses(num_variables, clauses)?;
    Ok(RandomWalkEngine::with_seed(DEFAULT_RANDOM_SEED)
        .decide(&instance)
        .is_satisfiable())
}

/// Runs the random walk and, if it does not find a satisfying assignment, settles the instance
/// with the implication graph engine. The returned decision is always exact.
pub fn decide_with_corroboration<R: Random>(instance: &Instance, random: R) -> Decision {
    Decider::with_random(
        DecisionStrategy::Corroborate,
        RandomWalkOptions::default(),
        random,
    )
    .decide(instance)
}

/// Decides instances according to a [`DecisionStrategy`], keeping the engines (and their
/// statistics) between calls.
#[derive(Debug)]
pub struct Decider<R = SmallRng> {
    strategy: DecisionStrategy,
    scc: SccEngine,
    random_walk: RandomWalkEngine<R>,
    /// Which engines ran during the last decision
    used_scc: bool,
    used_random_walk: bool,
}

impl Decider<SmallRng> {
    pub fn new(strategy: DecisionStrategy, options: RandomWalkOptions, seed: u64) -> Self {
        Decider::with_random(strategy, options, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Random> Decider<R> {
    pub fn with_random(strategy: DecisionStrategy, options: RandomWalkOptions, random: R) -> Self {
        Decider {
            strategy,
            scc: SccEngine::new(),
            random_walk: RandomWalkEngine::new(options, random),
            used_scc: false,
            used_random_walk: false,
        }
    }

    pub fn strategy(&self) -> DecisionStrategy {
        self.strategy
    }

    pub fn decide(&mut self, instance: &Instance) -> Decision {
        self.used_scc = false;
        self.used_random_walk = false;

        match self.strategy {
            DecisionStrategy::Scc => self.decide_scc(instance),
            DecisionStrategy::RandomWalk => self.decide_random_walk(instance),
            DecisionStrategy::Corroborate => {
                let decision = self.decide_random_walk(instance);
                if decision.verdict != Verdict::Undetermined {
                    return decision;
                }
                debug!("The random walk was inconclusive, corroborating with the implication graph");
                self.decide_scc(instance)
            }
        }
    }

    fn decide_scc(&mut self, instance: &Instance) -> Decision {
        self.used_scc = true;
        self.scc.decide(instance)
    }

    fn decide_random_walk(&mut self, instance: &Instance) -> Decision {
        self.used_random_walk = true;
        self.random_walk.decide(instance)
    }

    /// Logs the statistics of the engines which ran during the last decision, if statistic
    /// logging is enabled.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }
        if self.used_scc {
            self.scc
                .statistics()
                .log(StatisticLogger::new(["scc"]));
        }
        if self.used_random_walk {
            self.random_walk
                .statistics()
                .log(StatisticLogger::new(["random", "walk"]));
        }
        log_statistic_postfix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::EngineKind;

    #[test]
    fn invalid_literals_are_reported_by_both_entry_points() {
        let expected = Err(DecisionError::InvalidLiteral {
            literal: 3,
            num_variables: 2,
        });

        assert_eq!(decide_deterministic(2, [(1, 3)]), expected);
        assert_eq!(decide_randomized(2, [(1, 3)]), expected);
    }

    #[test]
    fn extreme_codes_are_decided_without_overflow() {
        let num_variables = 1_u32 << 31;

        assert_eq!(
            decide_deterministic(num_variables, [(i32::MIN, i32::MIN)]),
            Err(DecisionError::InvalidLiteral {
                literal: i32::MIN,
                num_variables
            })
        );
        assert_eq!(
            decide_deterministic(num_variables, [(i32::MAX, i32::MAX), (-i32::MAX, -i32::MAX)]),
            Ok(false)
        );
        assert_eq!(decide_deterministic(num_variables, [(i32::MAX, 1)]), Ok(true));
    }

    #[test]
    fn entry_points_agree_on_small_instances() {
        assert_eq!(decide_deterministic(2, [(1, 2), (-1, -2)]), Ok(true));
        assert_eq!(decide_randomized(2, [(1, 2), (-1, -2)]), Ok(true));
        assert_eq!(decide_deterministic(3, Vec::new()), Ok(true));
        assert_eq!(decide_randomized(3, Vec::new()), Ok(true));
        assert_eq!(decide_deterministic(0, Vec::new()), Ok(true));
        assert_eq!(decide_randomized(1, [(1, 1), (-1, -1)]), Ok(false));
    }

    #[test]
    fn corroboration_settles_unsatisfiable_instances_exactly() {
        let instance = Instance::from_clauses(2, [(1, 2), (-1, 2), (1, -2), (-1, -2)]).unwrap();

        let decision = decide_with_corroboration(&instance, SmallRng::seed_from_u64(1));

        assert_eq!(decision.verdict, Verdict::Unsatisfiable);
        assert_eq!(decision.engine, EngineKind::ImplicationGraph);
        assert!(decision.is_exact());
    }

    #[test]
    fn corroboration_keeps_a_found_solution() {
        let instance = Instance::from_clauses(1, [(1, 1)]).unwrap();

        let decision = decide_with_corroboration(&instance, SmallRng::seed_from_u64(1));

        assert_eq!(decision.verdict, Verdict::Satisfiable);
        assert_eq!(decision.engine, EngineKind::RandomWalk);
    }

    #[test]
    fn decider_uses_the_selected_engine() {
        let instance = Instance::from_clauses(2, [(1, 2), (-1, -2)]).unwrap();

        let mut decider = Decider::new(DecisionStrategy::Scc, RandomWalkOptions::default(), 0);
        assert_eq!(
            decider.decide(&instance).engine,
            EngineKind::ImplicationGraph
        );
        assert!(decider.used_scc && !decider.used_random_walk);

        let mut decider =
            Decider::new(DecisionStrategy::RandomWalk, RandomWalkOptions::default(), 0);
        assert_eq!(decider.decide(&instance).engine, EngineKind::RandomWalk);
        assert!(!decider.used_scc && decider.used_random_walk);
    }
}
