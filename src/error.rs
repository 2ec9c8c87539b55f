use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Everything that can abort a sweep
///
/// None of these are recovered locally: a failure at any single configuration
/// point means either a contract violation (malformed flags, malformed report)
/// or an environment problem (missing trace, missing executable), and neither
/// is resolved by carrying on with the remaining points. All variants
/// propagate to the top level and terminate the run
#[derive(Debug, Error)]
pub enum SweepError {
    /// The simulator process ran but exited with a non-zero status
    #[error("The simulator exited with {status}; captured output:\n{output}")]
    Invocation {
        status: ExitStatus,
        output: String,
    },

    /// The simulator process couldn't be started at all
    #[error("Couldn't launch the simulator at {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The simulator exited cleanly but its report had no L1 miss-rate field
    #[error("No \"[L1] ... miss_rate=\" line in the simulator report, report began with: {snippet}")]
    Parse {
        /// A truncated copy of the offending report, to aid diagnosis
        snippet: String,
    },

    /// One of the configuration axes had no values, so there was nothing to
    /// sweep. Raised before any simulator invocation
    #[error("The {axis} axis has no values, the sweep space is empty")]
    EmptySweepSpace {
        axis: &'static str,
    },
}
