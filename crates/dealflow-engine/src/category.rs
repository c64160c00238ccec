//! # Category Classifier — List-Tab Buckets
//!
//! Buckets a resolved [`Stage`] into one of the three list-view tabs.
//! The `match` is exhaustive on purpose: adding a stage without updating
//! this mapping is a compile error, not a silently empty tab.

use serde::{Deserialize, Serialize};

use dealflow_core::DealflowError;

use crate::stage::Stage;

/// List-view bucket for a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Deal exists but funds are not yet locked.
    Pending,
    /// Funds locked, work in progress.
    Active,
    /// Terminal: released or refunded.
    Completed,
}

impl Category {
    /// All categories in tab order.
    pub fn all() -> &'static [Category] {
        &[Self::Pending, Self::Active, Self::Completed]
    }

    /// The canonical wire token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DealflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(DealflowError::UnknownCategory(other.to_string())),
        }
    }
}

/// Classify a stage into its list-view bucket.
pub fn classify(stage: Stage) -> Category {
    match stage {
        Stage::Requested | Stage::PaymentRequired | Stage::PaymentConfirming => Category::Pending,
        Stage::FundsLocked
        | Stage::CreativeDrafting
        | Stage::CreativeReview
        | Stage::CreativeApproved
        | Stage::Scheduled
        | Stage::Verifying => Category::Active,
        Stage::Released | Stage::Refunded => Category::Completed,
    }
}
