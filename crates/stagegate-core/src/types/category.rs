//! Milestone classification axes.
//!
//! Every milestone carries two fixed classifications: the assessment
//! criterion it answers and the business model it de-risks. Both axes are
//! closed and immutable per milestone; they exist for grouping and analysis
//! views, never for the risk arithmetic itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment criterion a milestone answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assessment {
    /// Is the opportunity real and large enough?
    Opportunity,
    /// Can this team build and ship it?
    Execution,
    /// Do the economics work at scale?
    Scalability,
    /// Can investors realize a return?
    Return,
}

impl Assessment {
    /// All assessment criteria, in canonical display order.
    #[must_use]
    pub fn all() -> [Assessment; 4] {
        [
            Assessment::Opportunity,
            Assessment::Execution,
            Assessment::Scalability,
            Assessment::Return,
        ]
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Assessment::Opportunity => "Opportunity",
            Assessment::Execution => "Execution",
            Assessment::Scalability => "Scalability",
            Assessment::Return => "Return",
        };
        write!(f, "{name}")
    }
}

/// Business model a milestone de-risks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessModel {
    /// Problem discovery, before any model exists.
    Discovery,
    /// Foundational capabilities (team, skills).
    Foundation,
    /// Technology proven but no product yet.
    PreProduct,
    /// How the venture earns.
    RevenueModel,
    /// What it costs to build and sell.
    CostModel,
    /// How cash moves through the business.
    CashModel,
    /// How the venture is financed.
    InvestmentModel,
}

impl BusinessModel {
    /// All business models, in canonical display order.
    #[must_use]
    pub fn all() -> [BusinessModel; 7] {
        [
            BusinessModel::Discovery,
            BusinessModel::Foundation,
            BusinessModel::PreProduct,
            BusinessModel::RevenueModel,
            BusinessModel::CostModel,
            BusinessModel::CashModel,
            BusinessModel::InvestmentModel,
        ]
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessModel::Discovery => "Discovery",
            BusinessModel::Foundation => "Foundation",
            BusinessModel::PreProduct => "Pre-product",
            BusinessModel::RevenueModel => "Revenue Model",
            BusinessModel::CostModel => "Cost Model",
            BusinessModel::CashModel => "Cash Model",
            BusinessModel::InvestmentModel => "Investment Model",
        };
        write!(f, "{name}")
    }
}
