//! # Raw Deal State — Wire Model
//!
//! The read-only input shape supplied by the deal-storage collaborator.
//! Two independently-evolving status taxonomies coexist here:
//!
//! - `DealStatus` — the legacy top-level lifecycle marker. Newer records
//!   omit it entirely, older records may carry a stale value.
//! - `EscrowStatus` — the escrow-side marker, more granular and always
//!   present.
//!
//! Neither taxonomy leaks past [`crate::normalize`] — the rest of the
//! engine only ever sees [`crate::NormalizedSignals`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use dealflow_core::{DealId, DealflowError, MessageId, Timestamp};

// ─── Legacy Deal Status ──────────────────────────────────────────────

/// Legacy top-level lifecycle marker.
///
/// Kept only for records written before the escrow-status rollout; the
/// normalizer treats it as one of two racing progress signals, never as
/// solely authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStatus {
    /// Advertiser has requested the placement.
    Requested,
    /// Channel owner accepted; payment not yet requested.
    OwnerAccepted,
    /// Awaiting advertiser payment into escrow.
    PaymentRequired,
    /// Payment received, funds held in escrow.
    Paid,
    /// Publication slot agreed.
    Scheduled,
    /// Ad has been posted to the channel.
    Posted,
    /// Escrow released to the channel owner (terminal).
    Released,
    /// Escrow returned to the advertiser (terminal).
    Refunded,
    /// Deal canceled before completion (terminal).
    Canceled,
}

impl DealStatus {
    /// All legacy statuses in lifecycle order.
    pub fn all() -> &'static [DealStatus] {
        &[
            Self::Requested,
            Self::OwnerAccepted,
            Self::PaymentRequired,
            Self::Paid,
            Self::Scheduled,
            Self::Posted,
            Self::Released,
            Self::Refunded,
            Self::Canceled,
        ]
    }

    /// The canonical wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::OwnerAccepted => "OWNER_ACCEPTED",
            Self::PaymentRequired => "PAYMENT_REQUIRED",
            Self::Paid => "PAID",
            Self::Scheduled => "SCHEDULED",
            Self::Posted => "POSTED",
            Self::Released => "RELEASED",
            Self::Refunded => "REFUNDED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for DealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealStatus {
    type Err = DealflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUESTED" => Ok(Self::Requested),
            "OWNER_ACCEPTED" => Ok(Self::OwnerAccepted),
            "PAYMENT_REQUIRED" => Ok(Self::PaymentRequired),
            "PAID" => Ok(Self::Paid),
            "SCHEDULED" => Ok(Self::Scheduled),
            "POSTED" => Ok(Self::Posted),
            "RELEASED" => Ok(Self::Released),
            "REFUNDED" => Ok(Self::Refunded),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(DealflowError::UnknownStatus(other.to_string())),
        }
    }
}

// ─── Escrow Status ───────────────────────────────────────────────────

/// Escrow-side lifecycle marker.
///
/// More granular than [`DealStatus`]; when the two disagree, whichever
/// implies more progress wins (see [`crate::normalize`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowStatus {
    /// Deal terms still being drafted.
    Draft,
    /// Parties negotiating price/slot.
    Negotiating,
    /// Escrow invoice issued, awaiting payment.
    AwaitingPayment,
    /// Payment observed, confirmations pending.
    PaymentConfirming,
    /// Funds locked in escrow.
    FundsConfirmed,
    /// Creative workflow opened, submission pending.
    CreativeAwaitingSubmit,
    /// Creative submitted, owner review pending.
    CreativeReview,
    /// Ad posted, verification window running.
    PostedVerifying,
    /// Escrow settled to the channel owner (terminal).
    Completed,
    /// Escrow returned to the advertiser (terminal).
    Refunded,
    /// Deal canceled (terminal).
    Canceled,
}

impl EscrowStatus {
    /// All escrow statuses in lifecycle order.
    pub fn all() -> &'static [EscrowStatus] {
        &[
            Self::Draft,
            Self::Negotiating,
            Self::AwaitingPayment,
            Self::PaymentConfirming,
            Self::FundsConfirmed,
            Self::CreativeAwaitingSubmit,
            Self::CreativeReview,
            Self::PostedVerifying,
            Self::Completed,
            Self::Refunded,
            Self::Canceled,
        ]
    }

    /// The canonical wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Negotiating => "NEGOTIATING",
            Self::AwaitingPayment => "AWAITING_PAYMENT",
            Self::PaymentConfirming => "PAYMENT_CONFIRMING",
            Self::FundsConfirmed => "FUNDS_CONFIRMED",
            Self::CreativeAwaitingSubmit => "CREATIVE_AWAITING_SUBMIT",
            Self::CreativeReview => "CREATIVE_REVIEW",
            Self::PostedVerifying => "POSTED_VERIFYING",
            Self::Completed => "COMPLETED",
            Self::Refunded => "REFUNDED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for EscrowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EscrowStatus {
    type Err = DealflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "NEGOTIATING" => Ok(Self::Negotiating),
            "AWAITING_PAYMENT" => Ok(Self::AwaitingPayment),
            "PAYMENT_CONFIRMING" => Ok(Self::PaymentConfirming),
            "FUNDS_CONFIRMED" => Ok(Self::FundsConfirmed),
            "CREATIVE_AWAITING_SUBMIT" => Ok(Self::CreativeAwaitingSubmit),
            "CREATIVE_REVIEW" => Ok(Self::CreativeReview),
            "POSTED_VERIFYING" => Ok(Self::PostedVerifying),
            "COMPLETED" => Ok(Self::Completed),
            "REFUNDED" => Ok(Self::Refunded),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(DealflowError::UnknownStatus(other.to_string())),
        }
    }
}

// ─── Sub-Records ─────────────────────────────────────────────────────

/// Creative sub-record: the ad content submitted for review.
///
/// Presence of the record means the backend has opened a creative slot;
/// only the timestamps mark actual submission and approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    /// When the creative was submitted, if it has been.
    pub submitted_at: Option<Timestamp>,
    /// When the creative was approved by the channel owner, if it has been.
    pub approved_at: Option<Timestamp>,
}

/// Schedule sub-record: the agreed publication slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// When the ad is scheduled to be posted.
    pub scheduled_at: Option<Timestamp>,
}

/// Post sub-record: the published ad message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Telegram message identifier of the live post.
    pub message_id: Option<MessageId>,
    /// Public URL of the post, if the channel exposes one.
    pub view_url: Option<String>,
    /// End of the verification window.
    pub verify_until: Option<Timestamp>,
}

// ─── Raw Deal State ──────────────────────────────────────────────────

/// A read-only snapshot of a deal as the storage collaborator holds it.
///
/// The engine never mutates or persists this shape; every render
/// recomputes the stage from the latest snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDealState {
    /// Deal identifier.
    pub id: DealId,
    /// Legacy top-level status; absent on newer records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_status: Option<DealStatus>,
    /// Escrow-side status, always present.
    pub escrow_status: EscrowStatus,
    /// Creative workflow sub-record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative: Option<Creative>,
    /// Publication schedule sub-record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// Published post sub-record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

impl RawDealState {
    /// A minimal snapshot: escrow status only, no legacy status, no sub-records.
    pub fn new(id: DealId, escrow_status: EscrowStatus) -> Self {
        Self {
            id,
            deal_status: None,
            escrow_status,
            creative: None,
            schedule: None,
            post: None,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_status_as_str_roundtrip() {
        for status in DealStatus::all() {
            let parsed: DealStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_escrow_status_as_str_roundtrip() {
        for status in EscrowStatus::all() {
            let parsed: EscrowStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("PROPOSED".parse::<DealStatus>().is_err());
        assert!("awaiting_payment".parse::<EscrowStatus>().is_err()); // case-sensitive
        assert!("".parse::<EscrowStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in EscrowStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for status in DealStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_raw_deal_state_minimal_json() {
        let json = format!(
            r#"{{"id":"{}","escrowStatus":"AWAITING_PAYMENT"}}"#,
            uuid::Uuid::nil()
        );
        let raw: RawDealState = serde_json::from_str(&json).unwrap();
        assert_eq!(raw.escrow_status, EscrowStatus::AwaitingPayment);
        assert!(raw.deal_status.is_none());
        assert!(raw.creative.is_none());
        assert!(raw.schedule.is_none());
        assert!(raw.post.is_none());
    }

    #[test]
    fn test_raw_deal_state_full_roundtrip() {
        let raw = RawDealState {
            id: DealId::new(),
            deal_status: Some(DealStatus::Paid),
            escrow_status: EscrowStatus::CreativeReview,
            creative: Some(Creative {
                submitted_at: Some(Timestamp::parse("2024-01-01T00:00:00Z").unwrap()),
                approved_at: None,
            }),
            schedule: Some(Schedule {
                scheduled_at: Some(Timestamp::parse("2024-01-05T09:00:00Z").unwrap()),
            }),
            post: Some(Post {
                message_id: Some(MessageId("99421".to_string())),
                view_url: Some("https://t.me/channel/99421".to_string()),
                verify_until: None,
            }),
        };
        let json = serde_json::to_string(&raw).unwrap();
        let parsed: RawDealState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.deal_status, raw.deal_status);
        assert_eq!(parsed.escrow_status, raw.escrow_status);
        assert_eq!(parsed.creative, raw.creative);
        assert_eq!(parsed.post, raw.post);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let raw = RawDealState {
            deal_status: Some(DealStatus::Requested),
            ..RawDealState::new(DealId::new(), EscrowStatus::Draft)
        };
        let json = serde_json::to_string(&raw).unwrap();
        assert!(json.contains("\"dealStatus\""));
        assert!(json.contains("\"escrowStatus\""));
    }
}
