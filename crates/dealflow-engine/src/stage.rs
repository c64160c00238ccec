//! # Canonical Stage — Single Source of Truth
//!
//! Defines the `Stage` enum: the one canonical lifecycle position every
//! view (cards, timelines, stage pickers, list tabs) agrees on. This is
//! the ONE definition; every stage-keyed mapping in the workspace is an
//! exhaustive `match`, so adding a stage forces every consumer to handle
//! it at compile time.
//!
//! ## Canonical Order
//!
//! ```text
//! Requested → PaymentRequired → PaymentConfirming → FundsLocked
//!   → CreativeDrafting → CreativeReview → CreativeApproved
//!   → Scheduled → Verifying → {Released | Refunded}
//! ```
//!
//! `Released` and `Refunded` are the terminal stages and share the final
//! position in the canonical order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use dealflow_core::DealflowError;

/// The canonical lifecycle position of a deal.
///
/// Derived fresh on every resolution from a raw snapshot — never mutated,
/// never cached across input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Placement requested, nothing else has happened.
    Requested,
    /// Awaiting advertiser payment into escrow.
    PaymentRequired,
    /// Payment observed, confirmations pending.
    PaymentConfirming,
    /// Funds locked in escrow, creative workflow not yet opened.
    FundsLocked,
    /// Creative workflow open, submission pending.
    CreativeDrafting,
    /// Creative submitted, owner review pending.
    CreativeReview,
    /// Creative approved, slot not yet booked.
    CreativeApproved,
    /// Publication slot booked.
    Scheduled,
    /// Ad live, verification window running.
    Verifying,
    /// Escrow settled to the channel owner (terminal).
    Released,
    /// Escrow returned to the advertiser (terminal).
    Refunded,
}

/// Total number of stages. Used for exhaustiveness assertions in tests.
pub const STAGE_COUNT: usize = 11;

/// Number of positions in the canonical order (`Released` and `Refunded`
/// share the last one).
pub const CANONICAL_POSITIONS: usize = 10;

impl Stage {
    /// All stages, terminal stages last.
    pub fn all() -> &'static [Stage] {
        &[
            Self::Requested,
            Self::PaymentRequired,
            Self::PaymentConfirming,
            Self::FundsLocked,
            Self::CreativeDrafting,
            Self::CreativeReview,
            Self::CreativeApproved,
            Self::Scheduled,
            Self::Verifying,
            Self::Released,
            Self::Refunded,
        ]
    }

    /// Position of this stage in the canonical order, `0..=9`.
    ///
    /// `Released` and `Refunded` both occupy the final position: a refund
    /// ends the lifecycle just as terminally as a release does.
    pub fn canonical_index(&self) -> usize {
        match self {
            Self::Requested => 0,
            Self::PaymentRequired => 1,
            Self::PaymentConfirming => 2,
            Self::FundsLocked => 3,
            Self::CreativeDrafting => 4,
            Self::CreativeReview => 5,
            Self::CreativeApproved => 6,
            Self::Scheduled => 7,
            Self::Verifying => 8,
            Self::Released | Self::Refunded => 9,
        }
    }

    /// Whether this stage is terminal (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Released | Self::Refunded)
    }

    /// The canonical wire token for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::PaymentRequired => "PAYMENT_REQUIRED",
            Self::PaymentConfirming => "PAYMENT_CONFIRMING",
            Self::FundsLocked => "FUNDS_LOCKED",
            Self::CreativeDrafting => "CREATIVE_DRAFTING",
            Self::CreativeReview => "CREATIVE_REVIEW",
            Self::CreativeApproved => "CREATIVE_APPROVED",
            Self::Scheduled => "SCHEDULED",
            Self::Verifying => "VERIFYING",
            Self::Released => "RELEASED",
            Self::Refunded => "REFUNDED",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DealflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUESTED" => Ok(Self::Requested),
            "PAYMENT_REQUIRED" => Ok(Self::PaymentRequired),
            "PAYMENT_CONFIRMING" => Ok(Self::PaymentConfirming),
            "FUNDS_LOCKED" => Ok(Self::FundsLocked),
            "CREATIVE_DRAFTING" => Ok(Self::CreativeDrafting),
            "CREATIVE_REVIEW" => Ok(Self::CreativeReview),
            "CREATIVE_APPROVED" => Ok(Self::CreativeApproved),
            "SCHEDULED" => Ok(Self::Scheduled),
            "VERIFYING" => Ok(Self::Verifying),
            "RELEASED" => Ok(Self::Released),
            "REFUNDED" => Ok(Self::Refunded),
            other => Err(DealflowError::UnknownStage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stages_count() {
        assert_eq!(Stage::all().len(), STAGE_COUNT);
    }

    #[test]
    fn test_all_stages_unique() {
        let mut seen = std::collections::HashSet::new();
        for stage in Stage::all() {
            assert!(seen.insert(stage), "Duplicate stage: {stage}");
        }
    }

    #[test]
    fn test_canonical_index_is_monotone_over_all() {
        let mut prev = 0;
        for stage in Stage::all() {
            let idx = stage.canonical_index();
            assert!(idx >= prev, "canonical order regressed at {stage}");
            assert!(idx < CANONICAL_POSITIONS);
            prev = idx;
        }
    }

    #[test]
    fn test_terminal_stages_share_last_position() {
        assert_eq!(Stage::Released.canonical_index(), CANONICAL_POSITIONS - 1);
        assert_eq!(Stage::Refunded.canonical_index(), CANONICAL_POSITIONS - 1);
    }

    #[test]
    fn test_only_released_and_refunded_are_terminal() {
        for stage in Stage::all() {
            let expected = matches!(stage, Stage::Released | Stage::Refunded);
            assert_eq!(stage.is_terminal(), expected, "{stage}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for stage in Stage::all() {
            let parsed: Stage = stage.as_str().parse().unwrap();
            assert_eq!(*stage, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("DONE".parse::<Stage>().is_err());
        assert!("requested".parse::<Stage>().is_err()); // case-sensitive
        assert!("".parse::<Stage>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for stage in Stage::all() {
            let json = serde_json::to_string(stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
            let parsed: Stage = serde_json::from_str(&json).unwrap();
            assert_eq!(*stage, parsed);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for stage in Stage::all() {
            assert_eq!(stage.to_string(), stage.as_str());
        }
    }
}
