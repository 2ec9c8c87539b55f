use crate::config::{SweepAxes, SweepPoint};
use crate::error::SweepError;
use crate::report::extract_l1_miss_rate;

/// The evaluation seam between the sweep controller and the simulator
///
/// The production implementation is `SimulatorInvoker`, which spawns the
/// external process. Tests substitute scripted implementations so ordering,
/// best-tracking, and abort behaviour can be checked without child processes
pub trait Evaluate {
    /// Produces the raw simulator report for one configuration point
    ///
    /// Blocks until the evaluation is complete. Any error is fatal to the
    /// sweep and must be propagated unmodified
    fn evaluate(&mut self, point: &SweepPoint) -> Result<String, SweepError>;
}

/// The best configuration seen by a sweep, read once at completion
#[derive(Debug, Clone)]
pub struct BestResult {
    /// The lowest L1 miss rate observed, a fraction in [0, 1]
    pub miss_rate: f64,
    /// The configuration point that produced it
    pub point: SweepPoint,
    /// The full raw report for that point
    pub report: String,
}

/// Drives one search over the configuration space
///
/// The controller owns the best-so-far state for exactly one run, so several
/// sweeps (say, over different traces) can execute in one process without
/// contaminating each other. A sweep either visits every point or aborts on
/// the first error; there is no pause, resume, or per-point skip
pub struct Sweep {
    axes: SweepAxes,
    trace: String,
}

impl Sweep {
    /// Creates a sweep over the given axes for a given trace file
    ///
    /// # Arguments
    ///
    /// * `axes`: The configuration axes to search
    /// * `trace`: The trace path, used here only to render progress lines
    ///
    /// returns: Sweep
    pub fn new(axes: SweepAxes, trace: impl Into<String>) -> Self {
        Self {
            axes,
            trace: trace.into(),
        }
    }

    /// Visits every point in the configuration space and returns the best
    ///
    /// Points are visited in the deterministic order fixed by
    /// `SweepAxes::points`. Each point is evaluated, its report parsed, and
    /// the result compared against the best so far under strict less-than:
    /// ties keep the earlier point, so the first-seen minimum always wins.
    /// Every improvement prints one progress line with the new best miss
    /// rate and the full rendered flag list
    ///
    /// Errors from the evaluator or the parser abort the sweep immediately
    /// and no partial best is returned, though progress lines already
    /// printed stay visible in the log
    ///
    /// # Arguments
    ///
    /// * `evaluator`: The simulator boundary to delegate each point to
    ///
    /// returns: Result<BestResult, SweepError>
    pub fn run(&self, evaluator: &mut impl Evaluate) -> Result<BestResult, SweepError> {
        let points = self.axes.points()?;
        let mut best: Option<BestResult> = None;
        for point in points {
            let report = evaluator.evaluate(&point)?;
            let miss_rate = extract_l1_miss_rate(&report)?;
            if best.as_ref().map_or(true, |b| miss_rate < b.miss_rate) {
                println!(
                    "NEW BEST miss_rate={miss_rate} cfg={}",
                    point.render_flags(&self.trace)
                );
                best = Some(BestResult {
                    miss_rate,
                    point,
                    report,
                });
            }
        }
        // points() has already rejected empty axes, so at least one point was
        // evaluated and best is populated
        best.ok_or(SweepError::EmptySweepSpace { axis: "l1_sizes" })
    }
}
