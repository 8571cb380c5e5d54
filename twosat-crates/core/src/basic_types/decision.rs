use std::fmt::Display;
use std::fmt::Formatter;

/// The outcome of a decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// A satisfying assignment exists. Both engines only report this when it is certain.
    Satisfiable,
    /// No satisfying assignment exists. Only the implication graph engine reports this.
    Unsatisfiable,
    /// The random walk exhausted its budget in every attempt without satisfying all clauses.
    ///
    /// The instance is unsatisfiable with high probability, but this is not a proof; the verdict
    /// can be corroborated with the implication graph engine.
    Undetermined,
}

impl Verdict {
    /// Collapses the verdict to a boolean; [`Verdict::Undetermined`] maps to `false`.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Verdict::Satisfiable)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Satisfiable => write!(f, "SATISFIABLE"),
            Verdict::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Verdict::Undetermined => write!(f, "UNKNOWN"),
        }
    }
}

/// Identifies which engine produced a [`Decision`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Strongly connected components of the implication graph (exact).
    ImplicationGraph,
    /// Papadimitriou's random walk (one-sided error).
    RandomWalk,
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::ImplicationGraph => write!(f, "implication-graph"),
            EngineKind::RandomWalk => write!(f, "random-walk"),
        }
    }
}

/// A verdict together with the engine which reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    pub verdict: Verdict,
    pub engine: EngineKind,
}

impl Decision {
    pub fn new(verdict: Verdict, engine: EngineKind) -> Decision {
        Decision { verdict, engine }
    }

    pub fn is_satisfiable(&self) -> bool {
        self.verdict.is_satisfiable()
    }

    /// Whether the verdict is certain, i.e. it is not [`Verdict::Undetermined`].
    pub fn is_exact(&self) -> bool {
        !matches!(self.verdict, Verdict::Undetermined)
    }
}

/// Which engine(s) to use when deciding an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DecisionStrategy {
    /// Kosaraju's strongly connected components over the implication graph.
    #[default]
    Scc,
    /// Papadimitriou's random walk.
    RandomWalk,
    /// The random walk, where an undetermined outcome is settled by the implication graph.
    Corroborate,
}
