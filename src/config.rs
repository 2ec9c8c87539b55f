use serde::Deserialize;

use crate::error::SweepError;

/// Block size in bytes, applied to both cache levels and never swept
pub const BLOCK_SIZE: u64 = 64;

/// The swept configuration axes, one ordered list of candidate values per
/// tunable parameter
///
/// The declared order of values within an axis is preserved and fixes the
/// sweep's visitation order, but carries no ranking meaning. A partial JSON
/// configuration may override any subset of the axes; the rest keep the
/// reference values
#[derive(Debug, Clone, Deserialize)]
pub struct SweepAxes {
    /// L1 sizes in bytes
    #[serde(default = "default_l1_sizes")]
    pub l1_sizes: Vec<u64>,
    /// L1 associativities in ways
    #[serde(default = "default_l1_assocs")]
    pub l1_assocs: Vec<u64>,
    /// L2 sizes in bytes
    #[serde(default = "default_l2_sizes")]
    pub l2_sizes: Vec<u64>,
    /// L2 associativities in ways
    #[serde(default = "default_l2_assocs")]
    pub l2_assocs: Vec<u64>,
    /// Prefetch-buffer depths in entries, applied identically to both levels.
    /// 0 disables prefetching
    #[serde(default = "default_pfb_depths")]
    pub pfb_depths: Vec<u64>,
}

fn default_l1_sizes() -> Vec<u64> {
    vec![16384, 32768, 65536]
}

fn default_l1_assocs() -> Vec<u64> {
    vec![2, 4, 8]
}

fn default_l2_sizes() -> Vec<u64> {
    vec![131072, 262144, 524288]
}

fn default_l2_assocs() -> Vec<u64> {
    vec![4, 8]
}

fn default_pfb_depths() -> Vec<u64> {
    vec![0, 8, 16]
}

impl Default for SweepAxes {
    fn default() -> Self {
        Self {
            l1_sizes: default_l1_sizes(),
            l1_assocs: default_l1_assocs(),
            l2_sizes: default_l2_sizes(),
            l2_assocs: default_l2_assocs(),
            pfb_depths: default_pfb_depths(),
        }
    }
}

impl SweepAxes {
    /// Enumerates every configuration point in the Cartesian product of the
    /// axes
    ///
    /// Axes are visited in declaration order with the prefetch-buffer depth
    /// innermost, and values within an axis in their declared order, so the
    /// resulting sequence is deterministic and reproducible across runs
    ///
    /// # Arguments
    ///
    /// * `self`: The axes to enumerate
    ///
    /// returns: Result<Vec<SweepPoint>, SweepError>, an `EmptySweepSpace`
    /// error if any axis has no values
    pub fn points(&self) -> Result<Vec<SweepPoint>, SweepError> {
        for (axis, values) in [
            ("l1_sizes", &self.l1_sizes),
            ("l1_assocs", &self.l1_assocs),
            ("l2_sizes", &self.l2_sizes),
            ("l2_assocs", &self.l2_assocs),
            ("pfb_depths", &self.pfb_depths),
        ] {
            if values.is_empty() {
                return Err(SweepError::EmptySweepSpace { axis });
            }
        }
        let mut points = Vec::with_capacity(
            self.l1_sizes.len()
                * self.l1_assocs.len()
                * self.l2_sizes.len()
                * self.l2_assocs.len()
                * self.pfb_depths.len(),
        );
        for &l1_size in &self.l1_sizes {
            for &l1_assoc in &self.l1_assocs {
                for &l2_size in &self.l2_sizes {
                    for &l2_assoc in &self.l2_assocs {
                        for &pfb_depth in &self.pfb_depths {
                            points.push(SweepPoint {
                                l1_size,
                                l1_assoc,
                                l2_size,
                                l2_assoc,
                                pfb_depth,
                            });
                        }
                    }
                }
            }
        }
        Ok(points)
    }
}

/// One concrete assignment of every swept parameter
///
/// The non-swept parameters (block size, write-back, write-allocate,
/// next-line prefetch) are constants applied to both levels and only show up
/// when the point is rendered to the simulator's flag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPoint {
    pub l1_size: u64,
    pub l1_assoc: u64,
    pub l2_size: u64,
    pub l2_assoc: u64,
    /// Shared by both levels
    pub pfb_depth: u64,
}

impl SweepPoint {
    /// Renders this point into the simulator's expected argument list
    ///
    /// The flag order matches the simulator's documented contract: trace
    /// first, then the L1 group, the L2 group, and the prefetch group
    ///
    /// # Arguments
    ///
    /// * `trace`: The trace file path, constant across a sweep
    ///
    /// returns: Vec<String>
    pub fn to_flags(&self, trace: &str) -> Vec<String> {
        vec![
            "--trace".to_string(), trace.to_string(),
            "--l1_size".to_string(), self.l1_size.to_string(),
            "--l1_block".to_string(), BLOCK_SIZE.to_string(),
            "--l1_assoc".to_string(), self.l1_assoc.to_string(),
            "--l1_wb".to_string(), "1".to_string(),
            "--l1_wa".to_string(), "1".to_string(),
            "--l2_size".to_string(), self.l2_size.to_string(),
            "--l2_block".to_string(), BLOCK_SIZE.to_string(),
            "--l2_assoc".to_string(), self.l2_assoc.to_string(),
            "--l2_wb".to_string(), "1".to_string(),
            "--l2_wa".to_string(), "1".to_string(),
            "--l1_pfb".to_string(), self.pfb_depth.to_string(),
            "--l1_nlp".to_string(), "1".to_string(),
            "--l2_pfb".to_string(), self.pfb_depth.to_string(),
            "--l2_nlp".to_string(), "1".to_string(),
        ]
    }

    /// The flag list as a single space-joined string, for progress lines and
    /// the final summary
    pub fn render_flags(&self, trace: &str) -> String {
        self.to_flags(trace).join(" ")
    }
}
