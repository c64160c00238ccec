//! # Navigation Guard — Stage-Picker Reachability
//!
//! Decides which stages a user may jump to in a stage-picker UI: every
//! stage at or before the current stage's position in the canonical
//! order, never a stage strictly ahead — a future step's preconditions
//! are not yet met.
//!
//! This is a client-side guard (disabled controls), not a server
//! authorization check; the authoritative transition still happens in
//! the backend collaborator.

use serde::{Deserialize, Serialize};

use crate::stage::{Stage, CANONICAL_POSITIONS};

/// One entry of the stage-picker, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// The stage this entry represents.
    pub stage: Stage,
    /// Whether the picker may navigate to it.
    pub reachable: bool,
}

/// The canonical picker sequence for a given current stage.
///
/// The final slot is shared by the two terminal stages: it shows
/// `Released` on the happy path and `Refunded` only when the deal
/// actually ended in a refund.
fn picker_sequence(current: Stage) -> [Stage; CANONICAL_POSITIONS] {
    let terminal = if current == Stage::Refunded {
        Stage::Refunded
    } else {
        Stage::Released
    };
    [
        Stage::Requested,
        Stage::PaymentRequired,
        Stage::PaymentConfirming,
        Stage::FundsLocked,
        Stage::CreativeDrafting,
        Stage::CreativeReview,
        Stage::CreativeApproved,
        Stage::Scheduled,
        Stage::Verifying,
        terminal,
    ]
}

/// Compute the picker entries for a resolved current stage.
///
/// The reachable set is always a prefix of the canonical order up to and
/// including the current stage.
pub fn reachable_stages(current: Stage) -> Vec<NavigationEntry> {
    let current_index = current.canonical_index();
    picker_sequence(current)
        .iter()
        .enumerate()
        .map(|(i, stage)| NavigationEntry {
            stage: *stage,
            reachable: i <= current_index,
        })
        .collect()
}
