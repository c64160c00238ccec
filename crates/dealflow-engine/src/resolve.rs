//! # Stage Resolver — Ordered Rule Set
//!
//! Derives the single canonical [`Stage`] from [`NormalizedSignals`].
//!
//! ## Design
//!
//! One ordered list of guard clauses, evaluated top-down, first match
//! wins. The order mirrors physical causality in reverse: each clause
//! checks the strongest available evidence, so a sparse or out-of-order
//! record (asynchronous backend events routinely deliver sub-records
//! before statuses catch up) still resolves to the most advanced stage
//! the evidence supports.
//!
//! Terminal signals come first — once funds are returned, no other
//! signal can revive the deal.
//!
//! The function is total: any combination of signals falls into exactly
//! one clause, and anything unrecognized degrades to `Requested`, the
//! most conservative reading.

use crate::normalize::{normalize, NormalizedSignals, ProgressRank};
use crate::raw::RawDealState;
use crate::stage::Stage;

/// Resolve the canonical stage for a normalized signal set.
///
/// Pure and deterministic: same signals, same stage, no hidden state.
pub fn resolve(signals: &NormalizedSignals) -> Stage {
    let s = signals;

    // Terminal signals outrank everything, refund outranks release.
    if s.refund_signaled {
        return Stage::Refunded;
    }
    if s.release_signaled {
        return Stage::Released;
    }

    // A live post is the strongest non-terminal evidence.
    if s.post_live || s.rank >= ProgressRank::Posted {
        return Stage::Verifying;
    }
    if s.schedule_set || s.rank == ProgressRank::Scheduled {
        return Stage::Scheduled;
    }

    // Creative timestamps outrank status-derived creative progress.
    if s.creative_approved {
        return Stage::CreativeApproved;
    }
    if s.creative_submitted || s.rank == ProgressRank::CreativeReview {
        return Stage::CreativeReview;
    }
    if s.rank == ProgressRank::CreativeDrafting {
        return Stage::CreativeDrafting;
    }

    if s.rank == ProgressRank::FundsLocked {
        return Stage::FundsLocked;
    }
    if s.rank == ProgressRank::PaymentConfirming {
        return Stage::PaymentConfirming;
    }
    if s.rank == ProgressRank::AwaitingPayment {
        return Stage::PaymentRequired;
    }

    Stage::Requested
}

/// Resolve the canonical stage straight from a raw snapshot.
///
/// Equivalent to `resolve(&normalize(raw))`; the call every view makes
/// on every render.
pub fn resolve_deal(raw: &RawDealState) -> Stage {
    resolve(&normalize(raw))
}

// ─── Tests ───────────────────────────────────────────────────────────
