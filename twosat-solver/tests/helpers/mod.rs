//! Runs the `twosat-solver` binary on instance files for the integration tests.
#![allow(dead_code, reason = "every test file only uses some of the helpers")]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Files {
    pub(crate) log_file: PathBuf,
    pub(crate) err_file: PathBuf,
}

impl Files {
    pub(crate) fn read_log(&self) -> String {
        std::fs::read_to_string(&self.log_file).expect("Failed to read solver output")
    }

    /// The lines of the solver output which do not start with `c`, i.e. the status lines.
    pub(crate) fn status_lines(&self) -> Vec<String> {
        self.read_log()
            .lines()
            .filter(|line| !line.starts_with('c'))
            .map(str::to_owned)
            .collect()
    }

    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)?;
        std::fs::remove_file(self.err_file)?;

        Ok(())
    }
}

pub(crate) fn instance_path(file_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{file_name}",
        env!("CARGO_MANIFEST_DIR")
    ))
}

/// Runs the solver on a single instance; the output files are named after the test.
pub(crate) fn run_solver<'a>(
    test_name: &str,
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = &'a str>,
) -> Files {
    run_solver_on_all(test_name, &[instance_path.as_ref()], args)
}

/// Runs the solver on every instance in a single invocation.
pub(crate) fn run_solver_on_all<'a>(
    test_name: &str,
    instance_paths: &[&Path],
    args: impl IntoIterator<Item = &'a str>,
) -> Files {
    let (files, status) = spawn_solver(test_name, instance_paths, args);

    assert!(status.success(), "error deciding instances");

    files
}

/// Runs the solver on an instance it should reject.
pub(crate) fn run_failing_solver(test_name: &str, instance_path: impl AsRef<Path>) -> Files {
    let (files, status) = spawn_solver(test_name, &[instance_path.as_ref()], std::iter::empty());

    assert!(!status.success(), "the solver accepted an invalid instance");

    files
}

fn spawn_solver<'a>(
    test_name: &str,
    instance_paths: &[&Path],
    args: impl IntoIterator<Item = &'a str>,
) -> (Files, ExitStatus) {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_twosat-solver"));

    let output_path = instance_path(test_name);
    let log_file_path = output_path.with_extension("log");
    let err_file_path = output_path.with_extension("err");

    let mut command = Command::new(solver);

    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .args(instance_paths)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let files = Files {
        log_file: log_file_path,
        err_file: err_file_path,
    };

    (files, status)
}
