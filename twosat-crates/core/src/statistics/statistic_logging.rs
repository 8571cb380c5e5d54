//! Global configuration of where and how statistics are written.
//!
//! Statistics are written as DIMACS comment lines by the command line front-end; the decision
//! engines only record their statistics and never consult this configuration.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;

/// The options for statistic logging containing the statistic prefix, the (optional) line which is
/// printed after the statistics, and the (optional) casing of the statistics.
pub struct StatisticOptions<'a> {
    // What is printed before a statistic is printed, the statistics will be printed in the
    // form `{PREFIX} {NAME}={VALUE}`
    statistic_prefix: &'a str,
    // A closing line which is printed after all of the statistics have been printed
    after_statistics: Option<&'a str>,
    // The casing of the name of the statistic
    statistics_casing: Option<Case>,
    // The writer to which the statistics are written
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .field("statistics_writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of the statistics; only the first call has an effect.
///
/// Every statistic is written on its own line, starting with `prefix`. The `after` line is written
/// by [`log_statistic_postfix`]. Without a `writer`, statistics are written to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Runs `action` on the configured options; does nothing if statistic logging has not been
/// configured or the options are poisoned.
fn with_options(action: impl FnOnce(&mut StatisticOptions<'static>)) {
    let Some(lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    if let Ok(mut options) = lock.write() {
        action(&mut options);
    }
}

/// Logs the statistic `name` with `value` as a line `{PREFIX} {NAME}={VALUE}`, where the name is
/// converted to the configured casing.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = match options.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let _ = writeln!(
            options.statistics_writer,
            "{} {name}={value}",
            options.statistic_prefix
        );
    });
}

/// Logs the closing line of the statistics, if one has been configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(postfix) = options.after_statistics {
            let _ = writeln!(options.statistics_writer, "{postfix}");
        }
    });
}

/// Whether [`configure_statistic_logging`] has been called; statistics are only computed for
/// logging when this holds.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
