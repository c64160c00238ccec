//! # Timeline Projector — Six-Milestone Progress Spine
//!
//! Expands a resolved [`Stage`] into the fixed six-step milestone list
//! rendered as a progress bar: Accepted, Payment, Creative, Scheduled,
//! Posted, Released.
//!
//! The projector emits position and completion state only. `Refunded`
//! lands on the same final slot as `Released` — re-toning that step for a
//! failed deal is the presentation layer's concern, typically via the
//! catalog's tone.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// The fixed milestones of the deal progress bar, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Milestone {
    /// Deal accepted by the channel owner.
    Accepted,
    /// Escrow payment.
    Payment,
    /// Creative submission and review.
    Creative,
    /// Publication slot booked.
    Scheduled,
    /// Ad live in the channel.
    Posted,
    /// Escrow settled.
    Released,
}

/// Number of milestones in the spine.
pub const MILESTONE_COUNT: usize = 6;

impl Milestone {
    /// All milestones in render order.
    pub fn all() -> &'static [Milestone] {
        &[
            Self::Accepted,
            Self::Payment,
            Self::Creative,
            Self::Scheduled,
            Self::Posted,
            Self::Released,
        ]
    }

    /// i18n label key for this milestone.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Accepted => "deal.timeline.accepted",
            Self::Payment => "deal.timeline.payment",
            Self::Creative => "deal.timeline.creative",
            Self::Scheduled => "deal.timeline.scheduled",
            Self::Posted => "deal.timeline.posted",
            Self::Released => "deal.timeline.released",
        }
    }
}

/// Completion state of one timeline step relative to the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepState {
    /// Milestone lies behind the current stage.
    Completed,
    /// Milestone contains the current stage.
    Current,
    /// Milestone lies ahead of the current stage.
    Upcoming,
}

/// One step of the rendered progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Which milestone this step represents.
    pub milestone: Milestone,
    /// Completion state relative to the resolved stage.
    pub state: StepState,
}

/// Milestone slot occupied by a stage, `0..=5`.
pub fn timeline_index(stage: Stage) -> usize {
    match stage {
        Stage::Requested => 0,
        Stage::PaymentRequired | Stage::PaymentConfirming => 1,
        Stage::FundsLocked | Stage::CreativeDrafting | Stage::CreativeReview => 2,
        Stage::CreativeApproved | Stage::Scheduled => 3,
        Stage::Verifying => 4,
        Stage::Released | Stage::Refunded => 5,
    }
}

/// Project a stage onto the six-step spine.
///
/// Steps before the stage's slot are `Completed`, the slot itself is
/// `Current`, everything after is `Upcoming`.
pub fn project(stage: Stage) -> [TimelineStep; MILESTONE_COUNT] {
    let current = timeline_index(stage);
    let mut steps = [TimelineStep {
        milestone: Milestone::Accepted,
        state: StepState::Upcoming,
    }; MILESTONE_COUNT];

    for (i, milestone) in Milestone::all().iter().enumerate() {
        let state = match i.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        };
        steps[i] = TimelineStep {
            milestone: *milestone,
            state,
        };
    }
    steps
}
