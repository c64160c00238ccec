//! # dealflow-engine — Deal Lifecycle Engine
//!
//! Derives the single canonical **Stage** of an escrow-backed ad deal
//! from its raw, partially-redundant state, and everything the views
//! hang off that stage. One engine, one source of truth, consumed
//! everywhere — the stage is never re-derived ad hoc in a view.
//!
//! ## Modules
//!
//! - **Raw model** (`raw.rs`): the read-only snapshot shape the storage
//!   collaborator supplies — two racing status taxonomies plus optional
//!   creative/schedule/post sub-records.
//!
//! - **Normalizer** (`normalize.rs`): collapses both taxonomies into one
//!   ordered progress rank plus side signals. The more advanced signal
//!   wins; neither taxonomy leaks past this boundary.
//!
//! - **Resolver** (`resolve.rs`): one ordered, first-match-wins rule
//!   list producing exactly one `Stage`. Total — sparse or contradictory
//!   records degrade to the most conservative matching stage.
//!
//! - **Navigation** (`navigation.rs`): stage-picker reachability — a
//!   prefix of the canonical order, never ahead of current progress.
//!
//! - **Category** (`category.rs`): `Pending`/`Active`/`Completed` list
//!   tabs.
//!
//! - **Timeline** (`timeline.rs`): the fixed six-milestone progress
//!   spine.
//!
//! - **Catalog** (`catalog.rs`): static stage → display metadata lookup.
//!
//! - **Projection** (`projection.rs`): `DealProjection`, the one call a
//!   view makes per render.
//!
//! ## Design
//!
//! The engine is pure domain logic: synchronous, side-effect free,
//! snapshot-in/value-out. Every stage-keyed mapping is an exhaustive
//! `match` on the closed `Stage` enum — adding a stage is a compile
//! error until resolver, navigation, timeline, category, and catalog all
//! handle it.

pub mod catalog;
pub mod category;
pub mod navigation;
pub mod normalize;
pub mod projection;
pub mod raw;
pub mod resolve;
pub mod stage;
pub mod timeline;

// ─── Raw model re-exports ───────────────────────────────────────────

pub use raw::{Creative, DealStatus, EscrowStatus, Post, RawDealState, Schedule};

// ─── Normalizer re-exports ──────────────────────────────────────────

pub use normalize::{normalize, NormalizedSignals, ProgressRank};

// ─── Stage and resolver re-exports ──────────────────────────────────

pub use resolve::{resolve, resolve_deal};
pub use stage::{Stage, CANONICAL_POSITIONS, STAGE_COUNT};

// ─── View-facing re-exports ─────────────────────────────────────────

pub use catalog::{presentation, StagePresentation, Tone};
pub use category::{classify, Category};
pub use navigation::{reachable_stages, NavigationEntry};
pub use projection::DealProjection;
pub use timeline::{project, timeline_index, Milestone, StepState, TimelineStep, MILESTONE_COUNT};
