use std::path::PathBuf;
use std::process::Command;

use crate::config::SweepPoint;
use crate::error::SweepError;
use crate::sweep::Evaluate;

/// The subprocess boundary to the external simulator
///
/// Holds the executable path and the trace path, both constant across a
/// sweep, and runs the simulator once per configuration point. Each call
/// spawns one child process and blocks until it exits; no state persists
/// between calls
pub struct SimulatorInvoker {
    executable: PathBuf,
    trace: String,
}

impl SimulatorInvoker {
    /// Creates an invoker for a given simulator executable and trace file
    ///
    /// Neither path is checked up front; a missing executable surfaces as a
    /// `Launch` error on the first evaluation
    ///
    /// # Arguments
    ///
    /// * `executable`: Path to the simulator binary
    /// * `trace`: Path to the trace file, passed unchanged on every call
    ///
    /// returns: SimulatorInvoker
    pub fn new(executable: impl Into<PathBuf>, trace: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            trace: trace.into(),
        }
    }
}

impl Evaluate for SimulatorInvoker {
    /// Runs the simulator for one configuration point and captures its
    /// standard output as text
    ///
    /// A non-zero exit is fatal to the sweep: the error carries the exit
    /// status plus everything the process wrote to stdout and stderr, since
    /// the simulator makes no promise about which stream its diagnostics use
    fn evaluate(&mut self, point: &SweepPoint) -> Result<String, SweepError> {
        let output = Command::new(&self.executable)
            .args(point.to_flags(&self.trace))
            .output()
            .map_err(|source| SweepError::Launch {
                path: self.executable.clone(),
                source,
            })?;
        if !output.status.success() {
            let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
            captured.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(SweepError::Invocation {
                status: output.status,
                output: captured,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
