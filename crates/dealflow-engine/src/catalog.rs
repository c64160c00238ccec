//! # Presentation Catalog — Stage Display Metadata
//!
//! Static lookup from [`Stage`] to the display metadata a view needs:
//! i18n label key, optional call-to-action key, and tone. Pure data; the
//! engine's correctness is judged against it in that every stage has
//! exactly one entry.
//!
//! Views receive these keys, never raw status strings.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// Visual tone of a stage chip/panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tone {
    /// Nothing actionable yet.
    Muted,
    /// Waiting on the counterparty or the network.
    Info,
    /// Work in progress.
    Progress,
    /// Happy terminal.
    Success,
    /// Failed terminal.
    Danger,
}

/// Display metadata for one stage.
///
/// Serializable for view layers; never deserialized — the catalog is
/// static data compiled into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StagePresentation {
    /// i18n key for the stage label.
    pub label_key: &'static str,
    /// i18n key for the stage's primary call-to-action, if it has one.
    pub action_key: Option<&'static str>,
    /// Visual tone for chips and panels.
    pub tone: Tone,
}

/// Look up the display metadata for a stage.
pub fn presentation(stage: Stage) -> &'static StagePresentation {
    match stage {
        Stage::Requested => &StagePresentation {
            label_key: "deal.stage.requested",
            action_key: Some("deal.action.await_owner"),
            tone: Tone::Muted,
        },
        Stage::PaymentRequired => &StagePresentation {
            label_key: "deal.stage.payment_required",
            action_key: Some("deal.action.pay"),
            tone: Tone::Info,
        },
        Stage::PaymentConfirming => &StagePresentation {
            label_key: "deal.stage.payment_confirming",
            action_key: None,
            tone: Tone::Info,
        },
        Stage::FundsLocked => &StagePresentation {
            label_key: "deal.stage.funds_locked",
            action_key: Some("deal.action.start_creative"),
            tone: Tone::Progress,
        },
        Stage::CreativeDrafting => &StagePresentation {
            label_key: "deal.stage.creative_drafting",
            action_key: Some("deal.action.submit_creative"),
            tone: Tone::Progress,
        },
        Stage::CreativeReview => &StagePresentation {
            label_key: "deal.stage.creative_review",
            action_key: Some("deal.action.review_creative"),
            tone: Tone::Progress,
        },
        Stage::CreativeApproved => &StagePresentation {
            label_key: "deal.stage.creative_approved",
            action_key: Some("deal.action.pick_slot"),
            tone: Tone::Progress,
        },
        Stage::Scheduled => &StagePresentation {
            label_key: "deal.stage.scheduled",
            action_key: None,
            tone: Tone::Progress,
        },
        Stage::Verifying => &StagePresentation {
            label_key: "deal.stage.verifying",
            action_key: Some("deal.action.view_post"),
            tone: Tone::Progress,
        },
        Stage::Released => &StagePresentation {
            label_key: "deal.stage.released",
            action_key: None,
            tone: Tone::Success,
        },
        Stage::Refunded => &StagePresentation {
            label_key: "deal.stage.refunded",
            action_key: None,
            tone: Tone::Danger,
        },
    }
}
