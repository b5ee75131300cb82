//! Size tiers and their fixed alert thresholds.
//!
//! Larger filesystems get tighter percent-free thresholds: 10% of a 4 TB
//! volume is still a lot of room, 10% of a 20 GB root is not.

/// Largest size (inclusive) that still counts as a default-sized filesystem.
pub const DEFAULT_CEILING_MB: u64 = 204_800;
/// Smallest size (inclusive) that counts as a huge filesystem.
pub const HUGE_FLOOR_MB: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Default,
    Big,
    Huge,
}

impl SizeTier {
    /// `Default` wins at exactly `DEFAULT_CEILING_MB`, `Huge` starts at exactly `HUGE_FLOOR_MB`.
    pub fn for_size(size_mb: u64) -> Self {
        if size_mb <= DEFAULT_CEILING_MB { SizeTier::Default }
        else if size_mb < HUGE_FLOOR_MB  { SizeTier::Big }
        else                             { SizeTier::Huge }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::Default => "default",
            SizeTier::Big     => "big",
            SizeTier::Huge    => "huge",
        }
    }

    pub fn thresholds(&self) -> ThresholdSet {
        match self {
            SizeTier::Default => DEFAULT_TIER,
            SizeTier::Big     => BIG_TIER,
            SizeTier::Huge    => HUGE_TIER,
        }
    }
}

/// Alert thresholds for one tier.
///
/// Graph factors are stored in per-mille so that the absolute graph
/// thresholds can be computed with exact integer floor division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSet {
    pub warn_percent_free:   u8,
    pub crit_percent_free:   u8,
    pub graph_warn_permille: u64,
    pub graph_crit_permille: u64,
}

const DEFAULT_TIER: ThresholdSet = ThresholdSet {
    warn_percent_free:   15,
    crit_percent_free:   10,
    graph_warn_permille: 850,
    graph_crit_permille: 900,
};

const BIG_TIER: ThresholdSet = ThresholdSet {
    warn_percent_free:   10,
    crit_percent_free:   5,
    graph_warn_permille: 900,
    graph_crit_permille: 950,
};

const HUGE_TIER: ThresholdSet = ThresholdSet {
    warn_percent_free:   7,
    crit_percent_free:   3,
    graph_warn_permille: 930,
    graph_crit_permille: 970,
};

impl ThresholdSet {
    /// Absolute warning level in MB for the perf-data graph, truncated.
    pub fn graph_warn_mb(&self, size_mb: u64) -> u64 {
        scale_floor(size_mb, self.graph_warn_permille)
    }

    /// Absolute critical level in MB for the perf-data graph, truncated.
    pub fn graph_crit_mb(&self, size_mb: u64) -> u64 {
        scale_floor(size_mb, self.graph_crit_permille)
    }
}

fn scale_floor(size_mb: u64, permille: u64) -> u64 {
    // u128 keeps sizes near u64::MAX from overflowing before the division.
    (size_mb as u128 * permille as u128 / 1000) as u64
}
