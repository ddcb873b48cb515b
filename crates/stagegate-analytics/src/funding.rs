//! Typical funding stage implied by journey progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Funding stage a venture typically sits at for a given number of achieved
/// milestones.
///
/// The mapping is a heuristic bracket over the nine-milestone journey, not
/// a promise about any particular venture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FundingStage {
    /// 0-2 milestones achieved.
    PreSeed,
    /// 3 milestones achieved.
    Seed,
    /// 4 milestones achieved.
    SeedToSeriesA,
    /// 5 milestones achieved.
    SeriesA,
    /// 6 milestones achieved.
    SeriesB,
    /// 7 milestones achieved.
    SeriesBToC,
    /// 8+ milestones achieved.
    Growth,
}

impl FundingStage {
    /// Maps an achieved-milestone count to the typical funding stage.
    #[must_use]
    pub fn from_achieved_count(count: usize) -> Self {
        match count {
            0..=2 => FundingStage::PreSeed,
            3 => FundingStage::Seed,
            4 => FundingStage::SeedToSeriesA,
            5 => FundingStage::SeriesA,
            6 => FundingStage::SeriesB,
            7 => FundingStage::SeriesBToC,
            _ => FundingStage::Growth,
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FundingStage::PreSeed => "Pre-Seed / Angel",
            FundingStage::Seed => "Seed",
            FundingStage::SeedToSeriesA => "Seed / Series A",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::SeriesBToC => "Series B / C",
            FundingStage::Growth => "Growth / Pre-IPO",
        };
        write!(f, "{name}")
    }
}
