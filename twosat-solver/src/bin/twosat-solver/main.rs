mod file_format;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use file_format::FileFormat;
use log::Level;
use log::LevelFilter;
use log::error;
use log::info;
use log::warn;
use result::TwoSatError;
use result::TwoSatResult;
use twosat_solver::core::statistics::configure_statistic_logging;
use twosat_solver::core::Decider;
use twosat_solver::core::DecisionStrategy;
use twosat_solver::core::Instance;
use twosat_solver::core::RandomWalkOptions;
use twosat_solver::parsers::dimacs::parse_cnf;
use twosat_solver::parsers::pairs::parse_pairs;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instances to decide. Each file should have one of the following extensions:
    ///  - '*.cnf' for instances in the DIMACS CNF format, with one or two literals per clause,
    ///  - '*.txt' or '*.2sat' for instances given as the number of variables followed by one pair
    ///    of literals per line.
    ///
    /// When more than one instance is given, a final line "c answer <bits>" lists the outcomes in
    /// order, with '1' for a satisfiable instance and '0' otherwise.
    #[clap(verbatim_doc_comment, required = true)]
    instance_paths: Vec<PathBuf>,

    /// Which engine decides the instances.
    ///
    /// - The "scc" engine searches the implication graph for a variable whose two literals share a
    ///   strongly connected component; its answer is exact
    /// - The "random-walk" engine runs Papadimitriou's random walk; it reports UNKNOWN when no
    ///   satisfying assignment was found within its step budget
    /// - The "corroborate" strategy runs the random walk first and decides the instance with the
    ///   "scc" engine when the walk is inconclusive
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    engine: DecisionStrategy,

    /// The random seed to use for the Pseudo Random Number Generator of the random walk.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// The number of walks the random walk engine attempts before giving up. By default this is
    /// the ceiling of the base-2 logarithm of the number of variables (and at least one).
    ///
    /// Possible values: u32 (Optional)
    #[arg(long = "attempts", verbatim_doc_comment)]
    attempts: Option<u32>,

    /// The maximum number of steps of a single walk is this factor times the square of the number
    /// of variables which occur in the clauses that are walked over.
    ///
    /// Possible values: u64
    #[arg(
        long = "step-budget-factor",
        default_value_t = 2,
        verbatim_doc_comment
    )]
    step_budget_factor: u64,

    /// Disables fixing the variables which occur in a single polarity before every walk.
    ///
    /// Possible values: bool
    #[arg(long = "no-pruning", verbatim_doc_comment)]
    no_pruning: bool,

    /// Enables log message output from the engines.
    ///
    /// For printing statistics see the option "--log-statistics".
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the engines, after every decided instance.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", default_value_t = false, verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", None, None, None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn configure_logging_unknown() -> std::io::Result<()> {
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(LevelFilter::Trace)
        .target(env_logger::Target::Stdout)
        .init();
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> TwoSatResult<()> {
    let args = Args::parse();

    let mut instances = Vec::with_capacity(args.instance_paths.len());
    for path in &args.instance_paths {
        let Some(file_format) = FileFormat::of(path) else {
            configure_logging_unknown()?;
            return Err(TwoSatError::invalid_instance(path.display()));
        };
        instances.push((path.as_path(), file_format));
    }

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    if twosat_solver::core::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION
        >= twosat_solver::core::asserts::TWOSAT_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the twosat assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            twosat_solver::core::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION
        );
    };

    let options = RandomWalkOptions {
        attempts: args.attempts,
        step_budget_factor: args.step_budget_factor,
        prune_pure_literals: !args.no_pruning,
    };
    let mut decider = Decider::new(args.engine, options, args.random_seed);

    let print_instance_names = instances.len() > 1;
    let mut answer = String::with_capacity(instances.len());

    for (path, file_format) in instances {
        if print_instance_names {
            println!("c instance {}", path.display());
        }

        let instance = load_instance(path, file_format)?;
        info!(
            "Deciding an instance with {} variables and {} clauses",
            instance.num_variables(),
            instance.num_clauses()
        );

        let decision = decider.decide(&instance);
        info!("Decided by the {} engine", decision.engine);

        println!("s {}", decision.verdict);
        decider.log_statistics();

        answer.push(if decision.is_satisfiable() { '1' } else { '0' });
    }

    if print_instance_names {
        println!("c answer {answer}");
    }

    Ok(())
}

fn load_instance(path: &Path, file_format: FileFormat) -> TwoSatResult<Instance> {
    let file = File::open(path)?;

    let instance = match file_format {
        FileFormat::CnfDimacs => parse_cnf(file)?,
        FileFormat::Pairs => parse_pairs(file)?,
    };

    Ok(instance)
}
