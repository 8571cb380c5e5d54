//! Decides 2-SAT with Papadimitriou's random walk.
//!
//! Starting from a uniformly random assignment, the walk repeatedly picks a falsified clause and
//! flips the variable of one of its two literals, both chosen uniformly at random. If the instance
//! is satisfiable, a walk of `2n²` steps over `n` variables finds a satisfying assignment with
//! probability at least 1/2, so repeating the walk `⌈log₂ N⌉` times makes a miss unlikely. A
//! satisfying assignment is always checked, hence [`Verdict::Satisfiable`] is certain; running out
//! of steps only gives [`Verdict::Undetermined`].
//!
//! Before every walk, variables which occur in a single polarity are fixed (see
//! [`PureLiteralPruning`]) and the clauses they satisfy are left out of the walk.
mod clause_occurrences;
mod options;
mod pure_literal_pruning;
mod unsatisfied_clauses;

use clause_occurrences::ClauseOccurrences;
use log::debug;
use log::trace;
pub use options::RandomWalkOptions;
pub use pure_literal_pruning::PureLiteralPruning;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use unsatisfied_clauses::UnsatisfiedClauses;

use crate::basic_types::Assignment;
use crate::basic_types::Decision;
use crate::basic_types::EngineKind;
use crate::basic_types::Instance;
use crate::basic_types::Random;
use crate::basic_types::Verdict;
use crate::create_statistics_struct;
use crate::twosat_assert_advanced;
use crate::twosat_assert_extreme;

create_statistics_struct!(
    /// Statistics of the last decision made by a [`RandomWalkEngine`].
    RandomWalkStatistics {
        /// The number of walks which were started
        num_attempts: u32,
        /// The number of variable flips over all walks
        num_flips: u64,
        /// The number of variables fixed by pure literal pruning
        num_pruned_variables: usize,
        /// The number of clauses left out of the walk by pure literal pruning
        num_pruned_clauses: usize,
        /// The maximum number of steps of a single walk
        step_budget: u64,
});

/// Decides instances with bounded random walks; it can only prove satisfiability.
///
/// The engine owns its source of randomness, so consecutive decisions continue the same random
/// sequence. The assignment and the set of falsified clauses are created for every call.
#[derive(Debug)]
pub struct RandomWalkEngine<R = SmallRng> {
    options: RandomWalkOptions,
    random: R,
    statistics: RandomWalkStatistics,
}

impl RandomWalkEngine<SmallRng> {
    /// Creates an engine with the default options, seeding a [`SmallRng`] with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        RandomWalkEngine::new(RandomWalkOptions::default(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: Random> RandomWalkEngine<R> {
    pub fn new(options: RandomWalkOptions, random: R) -> Self {
        RandomWalkEngine {
            options,
            random,
            statistics: RandomWalkStatistics::default(),
        }
    }

    pub fn options(&self) -> &RandomWalkOptions {
        &self.options
    }

    pub fn statistics(&self) -> RandomWalkStatistics {
        self.statistics
    }

    pub fn decide(&mut self, instance: &Instance) -> Decision {
        self.statistics = RandomWalkStatistics::default();

        if instance.is_empty() {
            debug!("The instance has no clauses or no variables, it is trivially satisfiable");
            return Decision::new(Verdict::Satisfiable, EngineKind::RandomWalk);
        }

        let pruning = if self.options.prune_pure_literals {
            PureLiteralPruning::compute(instance)
        } else {
            PureLiteralPruning::disabled(instance)
        };
        let occurrences = ClauseOccurrences::new(instance, pruning.remaining_clauses());
        let step_budget = self
            .options
            .step_budget(occurrences.num_occurring_variables());
        let num_attempts = self.options.num_attempts(instance.num_variables());

        self.statistics.num_pruned_variables = pruning.pure_literals().len();
        self.statistics.num_pruned_clauses =
            instance.num_clauses() - pruning.remaining_clauses().len();
        self.statistics.step_budget = step_budget;

        for attempt in 1..=num_attempts {
            self.statistics.num_attempts += 1;

            let mut assignment = Assignment::random(instance.num_variables(), &mut self.random);
            pruning.impose(&mut assignment);

            if self.walk(instance, &occurrences, &mut assignment, step_budget) {
                twosat_assert_advanced!(
                    instance.is_satisfied_by(&assignment),
                    "A walk reported success with a falsified clause"
                );
                debug!("Walk {attempt} of {num_attempts} satisfied every clause");
                return Decision::new(Verdict::Satisfiable, EngineKind::RandomWalk);
            }

            debug!("Walk {attempt} of {num_attempts} ran out of its {step_budget} steps");
        }

        Decision::new(Verdict::Undetermined, EngineKind::RandomWalk)
    }

    /// Walks from `assignment` for at most `step_budget` steps; returns whether every clause of
    /// `occurrences` is satisfied at the end.
    fn walk(
        &mut self,
        instance: &Instance,
        occurrences: &ClauseOccurrences,
        assignment: &mut Assignment,
        step_budget: u64,
    ) -> bool {
        let mut unsatisfied = UnsatisfiedClauses::new(instance.num_clauses());
        for &clause_id in occurrences.clauses() {
            unsatisfied.update(
                clause_id,
                instance.clause(clause_id).is_satisfied_by(assignment),
            );
        }
        trace!(
            "Starting a walk with {} of {} clauses falsified",
            unsatisfied.len(),
            occurrences.clauses().len()
        );

        for _ in 0..step_budget {
            let Some(clause_id) = unsatisfied.choose(&mut self.random) else {
                return true;
            };

            let variable = instance
                .clause(clause_id)
                .random_literal(&mut self.random)
                .variable();
            assignment.flip(variable);
            self.statistics.num_flips += 1;

            for &affected in occurrences.of(variable) {
                unsatisfied.update(affected, instance.clause(affected).is_satisfied_by(assignment));
            }

            twosat_assert_extreme!(occurrences.clauses().iter().all(|&clause_id| {
                unsatisfied.contains(clause_id)
                    != instance.clause(clause_id).is_satisfied_by(assignment)
            }));
        }

        unsatisfied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::random::tests::TestRandom;

    const NUM_SEEDS: u64 = 20;

    fn instance(num_variables: u32, clauses: &[(i32, i32)]) -> Instance {
        Instance::from_clauses(num_variables, clauses.iter().copied()).unwrap()
    }

    fn without_pruning(attempts: u32) -> RandomWalkOptions {
        RandomWalkOptions {
            attempts: Some(attempts),
            prune_pure_literals: false,
            ..Default::default()
        }
    }

    #[test]
    fn scripted_walk_flips_towards_a_solution() {
        let instance = instance(2, &[(1, 2), (-1, -2)]);
        // The initial assignment is x1 = x2 = false, which falsifies (1 ∨ 2). The first literal of
        // that clause is picked, after which both clauses are satisfied.
        let random = TestRandom {
            usizes: vec![0],
            bools: vec![false, false, true],
        };
        let mut engine = RandomWalkEngine::new(without_pruning(1), random);

        let decision = engine.decide(&instance);

        assert_eq!(decision.verdict, Verdict::Satisfiable);
        assert_eq!(decision.engine, EngineKind::RandomWalk);
        assert_eq!(engine.statistics().num_flips, 1);
        assert_eq!(engine.statistics().num_attempts, 1);
        assert!(engine.random.usizes.is_empty());
        assert!(engine.random.bools.is_empty());
    }

    #[test]
    fn satisfying_initial_assignment_needs_no_flips() {
        let instance = instance(2, &[(1, 2), (-1, -2)]);
        let random = TestRandom {
            usizes: vec![],
            bools: vec![true, false],
        };
        let mut engine = RandomWalkEngine::new(without_pruning(1), random);

        assert!(engine.decide(&instance).is_satisfiable());
        assert_eq!(engine.statistics().num_flips, 0);
    }

    #[test]
    fn exhausted_budget_is_undetermined() {
        let instance = instance(1, &[(1, 1), (-1, -1)]);
        // One variable gives a budget of 2 steps; each step picks the single falsified clause and
        // flips x1, which falsifies the other clause.
        let random = TestRandom {
            usizes: vec![0, 0],
            bools: vec![false, true, true],
        };
        let mut engine = RandomWalkEngine::new(without_pruning(1), random);

        let decision = engine.decide(&instance);

        assert_eq!(decision.verdict, Verdict::Undetermined);
        assert!(!decision.is_exact());
        assert_eq!(engine.statistics().num_flips, 2);
        assert_eq!(engine.statistics().step_budget, 2);
    }

    #[test]
    fn pruned_variables_are_fixed_in_every_attempt() {
        // Every variable occurs in a single polarity, so no clause is left for the walk.
        let instance = instance(3, &[(1, 2), (1, -3), (2, 2), (-3, -3)]);
        let mut engine = RandomWalkEngine::with_seed(7);

        assert!(engine.decide(&instance).is_satisfiable());
        assert_eq!(engine.statistics().num_pruned_variables, 3);
        assert_eq!(engine.statistics().num_pruned_clauses, 4);
        assert_eq!(engine.statistics().num_flips, 0);
    }

    #[test]
    fn unsatisfiable_instances_are_never_reported_satisfiable() {
        let unsatisfiable = [
            instance(2, &[(1, 2), (-1, 2), (1, -2), (-1, -2)]),
            instance(1, &[(1, 1), (-1, -1)]),
            instance(4, &[(-1, 2), (-2, 3), (-3, -1), (1, 4), (-4, 1)]),
        ];

        for seed in 0..NUM_SEEDS {
            let mut engine = RandomWalkEngine::with_seed(seed);
            for instance in &unsatisfiable {
                assert_eq!(engine.decide(instance).verdict, Verdict::Undetermined);
            }
        }
    }

    #[test]
    fn satisfiable_instances_are_found_for_some_seed() {
        let satisfiable = [
            instance(2, &[(1, 2), (-1, -2)]),
            instance(1, &[(1, 1)]),
            instance(1, &[(1, -1)]),
            instance(4, &[(-1, 2), (-2, 3), (-3, 4), (-1, -4), (2, 4)]),
        ];

        for instance in &satisfiable {
            let found = (0..NUM_SEEDS).any(|seed| {
                RandomWalkEngine::with_seed(seed)
                    .decide(instance)
                    .is_satisfiable()
            });
            assert!(found, "no seed found a solution");
        }
    }

    #[test]
    fn number_of_attempts_is_bounded() {
        let instance = instance(8, &[(1, 2), (-1, 2), (1, -2), (-1, -2)]);
        let mut engine = RandomWalkEngine::with_seed(3);

        let _ = engine.decide(&instance);

        assert_eq!(engine.statistics().num_attempts, 3);
        assert_eq!(engine.statistics().step_budget, 8);
        assert!(engine.statistics().num_flips <= 3 * 8);
    }

    #[test]
    fn empty_instance_is_satisfiable_without_walking() {
        let mut engine = RandomWalkEngine::with_seed(0);

        assert!(engine.decide(&instance(3, &[])).is_satisfiable());
        assert_eq!(engine.statistics().num_attempts, 0);
    }
}
