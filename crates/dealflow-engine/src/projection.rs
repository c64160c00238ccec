//! # Deal Projection — One Call Per Render
//!
//! Bundles everything a view needs from one raw snapshot: the resolved
//! stage, its list-view category, the six-step timeline, and the
//! stage-picker entries. Views call [`DealProjection::from_raw()`] on
//! every render with the latest snapshot — projections are never cached
//! across input changes.

use serde::Serialize;

use dealflow_core::DealId;

use crate::category::{classify, Category};
use crate::navigation::{reachable_stages, NavigationEntry};
use crate::raw::RawDealState;
use crate::resolve::resolve_deal;
use crate::stage::Stage;
use crate::timeline::{project, TimelineStep};

/// Everything the presentation layer consumes for one deal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealProjection {
    /// The deal this projection was computed for.
    pub deal_id: DealId,
    /// Canonical lifecycle stage.
    pub stage: Stage,
    /// List-view bucket.
    pub category: Category,
    /// Six-step progress spine.
    pub timeline: Vec<TimelineStep>,
    /// Stage-picker entries in canonical order.
    pub navigation: Vec<NavigationEntry>,
}

impl DealProjection {
    /// Compute the full projection for a raw snapshot.
    pub fn from_raw(raw: &RawDealState) -> Self {
        let stage = resolve_deal(raw);
        Self {
            deal_id: raw.id.clone(),
            stage,
            category: classify(stage),
            timeline: project(stage).to_vec(),
            navigation: reachable_stages(stage),
        }
    }
}
