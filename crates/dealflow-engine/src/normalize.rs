//! # Status Normalizer — Translation Boundary
//!
//! Collapses the two raw status taxonomies ([`DealStatus`] and
//! [`EscrowStatus`]) into one canonical internal vocabulary. Nothing past
//! this module ever sees a raw status value.
//!
//! ## Tie-Break Rule
//!
//! Both sides of the system are allowed to race: the payment service may
//! advance the escrow status before the deal record catches up, and the
//! bot may advance the deal record before the escrow does. Either signal
//! reaching an advanced state is sufficient evidence that progress
//! occurred — statuses only move forward, never back, except by explicit
//! refund/cancel. The normalizer therefore takes the **maximum** of the
//! two progress ranks, and carries refund/release as separate signals
//! that the resolver checks first.

use crate::raw::{DealStatus, EscrowStatus, RawDealState};

// ─── Progress Rank ───────────────────────────────────────────────────

/// Ordered progress vocabulary shared by both status taxonomies.
///
/// The derived `Ord` follows declaration order; the normalizer relies on
/// it for the max-rank tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgressRank {
    /// No progress beyond the initial request/negotiation.
    Requested,
    /// Payment has been requested but not observed.
    AwaitingPayment,
    /// Payment observed, confirmations pending.
    PaymentConfirming,
    /// Funds locked in escrow.
    FundsLocked,
    /// Creative workflow opened, nothing submitted.
    CreativeDrafting,
    /// Creative submitted, under review.
    CreativeReview,
    /// Publication slot booked.
    Scheduled,
    /// Ad live in the channel.
    Posted,
    /// Escrow settled or returned.
    Settled,
}

impl DealStatus {
    /// Progress implied by this legacy status.
    fn rank(self) -> ProgressRank {
        match self {
            Self::Requested => ProgressRank::Requested,
            // Acceptance means the owner is waiting on the advertiser to pay.
            Self::OwnerAccepted => ProgressRank::AwaitingPayment,
            Self::PaymentRequired => ProgressRank::AwaitingPayment,
            Self::Paid => ProgressRank::FundsLocked,
            Self::Scheduled => ProgressRank::Scheduled,
            Self::Posted => ProgressRank::Posted,
            Self::Released | Self::Refunded | Self::Canceled => ProgressRank::Settled,
        }
    }
}

impl EscrowStatus {
    /// Progress implied by this escrow status.
    fn rank(self) -> ProgressRank {
        match self {
            Self::Draft | Self::Negotiating => ProgressRank::Requested,
            Self::AwaitingPayment => ProgressRank::AwaitingPayment,
            Self::PaymentConfirming => ProgressRank::PaymentConfirming,
            Self::FundsConfirmed => ProgressRank::FundsLocked,
            Self::CreativeAwaitingSubmit => ProgressRank::CreativeDrafting,
            Self::CreativeReview => ProgressRank::CreativeReview,
            Self::PostedVerifying => ProgressRank::Posted,
            Self::Completed | Self::Refunded | Self::Canceled => ProgressRank::Settled,
        }
    }
}

// ─── Normalized Signals ──────────────────────────────────────────────

/// The canonical internal view of a deal snapshot.
///
/// Everything the resolver consults, nothing it doesn't: the merged
/// progress rank, the two terminal signals, and the presence facts from
/// the sub-records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedSignals {
    /// The more advanced of the two status ranks.
    pub rank: ProgressRank,
    /// A refund or cancel was signaled on either side.
    pub refund_signaled: bool,
    /// A release/completion was signaled on either side.
    pub release_signaled: bool,
    /// A creative has been submitted (`creative.submittedAt` set).
    pub creative_submitted: bool,
    /// The submitted creative has been approved (`creative.approvedAt` set).
    pub creative_approved: bool,
    /// A publication slot is booked (`schedule.scheduledAt` set).
    pub schedule_set: bool,
    /// A live post exists (`post.messageId` set).
    pub post_live: bool,
}

/// Collapse a raw snapshot into [`NormalizedSignals`].
///
/// Total function: every combination of statuses and sub-records maps to
/// exactly one signal set, and nothing here can fail.
pub fn normalize(raw: &RawDealState) -> NormalizedSignals {
    let deal_rank = raw.deal_status.map(DealStatus::rank);
    let escrow_rank = raw.escrow_status.rank();
    let rank = deal_rank.map_or(escrow_rank, |r| r.max(escrow_rank));

    let refund_signaled = matches!(
        raw.deal_status,
        Some(DealStatus::Refunded | DealStatus::Canceled)
    ) || matches!(
        raw.escrow_status,
        EscrowStatus::Refunded | EscrowStatus::Canceled
    );

    let release_signaled = matches!(raw.deal_status, Some(DealStatus::Released))
        || raw.escrow_status == EscrowStatus::Completed;

    let creative_submitted = raw
        .creative
        .as_ref()
        .is_some_and(|c| c.submitted_at.is_some());
    let creative_approved = raw
        .creative
        .as_ref()
        .is_some_and(|c| c.approved_at.is_some());
    let schedule_set = raw
        .schedule
        .as_ref()
        .is_some_and(|s| s.scheduled_at.is_some());
    let post_live = raw.post.as_ref().is_some_and(|p| p.message_id.is_some());

    NormalizedSignals {
        rank,
        refund_signaled,
        release_signaled,
        creative_submitted,
        creative_approved,
        schedule_set,
        post_live,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{Creative, Post, Schedule};
    use dealflow_core::{DealId, MessageId, Timestamp};

    fn snapshot(escrow: EscrowStatus) -> RawDealState {
        RawDealState::new(DealId::new(), escrow)
    }

    fn ts() -> Timestamp {
        Timestamp::parse("2024-01-01T00:00:00Z").unwrap()
    }

    #[test]
    fn test_rank_order_follows_lifecycle() {
        assert!(ProgressRank::Requested < ProgressRank::AwaitingPayment);
        assert!(ProgressRank::AwaitingPayment < ProgressRank::PaymentConfirming);
        assert!(ProgressRank::PaymentConfirming < ProgressRank::FundsLocked);
        assert!(ProgressRank::FundsLocked < ProgressRank::CreativeDrafting);
        assert!(ProgressRank::CreativeDrafting < ProgressRank::CreativeReview);
        assert!(ProgressRank::CreativeReview < ProgressRank::Scheduled);
        assert!(ProgressRank::Scheduled < ProgressRank::Posted);
        assert!(ProgressRank::Posted < ProgressRank::Settled);
    }

    #[test]
    fn test_escrow_rank_alone() {
        let signals = normalize(&snapshot(EscrowStatus::PaymentConfirming));
        assert_eq!(signals.rank, ProgressRank::PaymentConfirming);
        assert!(!signals.refund_signaled);
        assert!(!signals.release_signaled);
    }

    #[test]
    fn test_more_advanced_deal_status_wins() {
        let raw = RawDealState {
            deal_status: Some(DealStatus::Scheduled),
            ..snapshot(EscrowStatus::FundsConfirmed)
        };
        assert_eq!(normalize(&raw).rank, ProgressRank::Scheduled);
    }

    #[test]
    fn test_more_advanced_escrow_status_wins() {
        let raw = RawDealState {
            deal_status: Some(DealStatus::Requested),
            ..snapshot(EscrowStatus::PostedVerifying)
        };
        assert_eq!(normalize(&raw).rank, ProgressRank::Posted);
    }

    #[test]
    fn test_stale_deal_status_never_drags_rank_back() {
        for escrow in EscrowStatus::all() {
            let baseline = normalize(&snapshot(*escrow)).rank;
            let raw = RawDealState {
                deal_status: Some(DealStatus::Requested),
                ..snapshot(*escrow)
            };
            assert!(normalize(&raw).rank >= baseline, "regressed at {escrow}");
        }
    }

    #[test]
    fn test_refund_signaled_from_either_side() {
        assert!(normalize(&snapshot(EscrowStatus::Refunded)).refund_signaled);
        assert!(normalize(&snapshot(EscrowStatus::Canceled)).refund_signaled);

        let raw = RawDealState {
            deal_status: Some(DealStatus::Refunded),
            ..snapshot(EscrowStatus::FundsConfirmed)
        };
        assert!(normalize(&raw).refund_signaled);

        let raw = RawDealState {
            deal_status: Some(DealStatus::Canceled),
            ..snapshot(EscrowStatus::Draft)
        };
        assert!(normalize(&raw).refund_signaled);
    }

    #[test]
    fn test_release_signaled_from_either_side() {
        assert!(normalize(&snapshot(EscrowStatus::Completed)).release_signaled);

        let raw = RawDealState {
            deal_status: Some(DealStatus::Released),
            ..snapshot(EscrowStatus::PostedVerifying)
        };
        assert!(normalize(&raw).release_signaled);
    }

    #[test]
    fn test_owner_accepted_means_awaiting_payment() {
        let raw = RawDealState {
            deal_status: Some(DealStatus::OwnerAccepted),
            ..snapshot(EscrowStatus::Draft)
        };
        assert_eq!(normalize(&raw).rank, ProgressRank::AwaitingPayment);
    }

    #[test]
    fn test_creative_record_presence_is_not_submission() {
        let raw = RawDealState {
            creative: Some(Creative::default()),
            ..snapshot(EscrowStatus::FundsConfirmed)
        };
        let signals = normalize(&raw);
        assert!(!signals.creative_submitted);
        assert!(!signals.creative_approved);
    }

    #[test]
    fn test_creative_timestamps_drive_signals() {
        let raw = RawDealState {
            creative: Some(Creative {
                submitted_at: Some(ts()),
                approved_at: None,
            }),
            ..snapshot(EscrowStatus::CreativeReview)
        };
        let signals = normalize(&raw);
        assert!(signals.creative_submitted);
        assert!(!signals.creative_approved);

        let raw = RawDealState {
            creative: Some(Creative {
                submitted_at: Some(ts()),
                approved_at: Some(ts()),
            }),
            ..snapshot(EscrowStatus::CreativeReview)
        };
        assert!(normalize(&raw).creative_approved);
    }

    #[test]
    fn test_schedule_and_post_presence() {
        let raw = RawDealState {
            schedule: Some(Schedule {
                scheduled_at: Some(ts()),
            }),
            post: Some(Post {
                message_id: Some(MessageId("99421".to_string())),
                view_url: None,
                verify_until: None,
            }),
            ..snapshot(EscrowStatus::FundsConfirmed)
        };
        let signals = normalize(&raw);
        assert!(signals.schedule_set);
        assert!(signals.post_live);
    }

    #[test]
    fn test_empty_sub_records_carry_no_signal() {
        let raw = RawDealState {
            schedule: Some(Schedule::default()),
            post: Some(Post::default()),
            ..snapshot(EscrowStatus::Draft)
        };
        let signals = normalize(&raw);
        assert!(!signals.schedule_set);
        assert!(!signals.post_live);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = RawDealState {
            deal_status: Some(DealStatus::Paid),
            creative: Some(Creative {
                submitted_at: Some(ts()),
                approved_at: None,
            }),
            ..snapshot(EscrowStatus::CreativeReview)
        };
        assert_eq!(normalize(&raw), normalize(&raw));
    }
}
