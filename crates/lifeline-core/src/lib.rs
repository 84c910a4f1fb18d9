//! Lifeline core: deterministic cascading-failure analysis for small
//! interdependent infrastructure networks.
//!
//! The crate is organized around three algorithmic stages plus the thin
//! orchestrator that sequences them:
//! - [`simulate`] drives node conditions down through dependency edges until
//!   the cascade stabilizes or the step budget runs out;
//! - [`metrics`] replays a failure history onto a fresh graph copy and
//!   derives per-step service and health figures;
//! - [`select`] picks a budget-constrained subset of mitigation actions,
//!   greedily or by exhaustive search;
//! - [`pipeline`] bundles all of it into one result for the presentation
//!   layer.
//!
//! Everything is synchronous and in-memory. Each stage receives its own
//! exclusively-owned graph copy, so no stage can observe another's
//! mutations.

pub mod coupling;
pub mod demo;
pub mod error;
pub mod metrics;
pub mod network;
pub mod pipeline;
pub mod select;
pub mod simulate;

pub use coupling::CouplingMode;
pub use demo::{demo_action_catalog, demo_network};
pub use error::{NetworkError, ParseTagError, PipelineError};
pub use metrics::{resilience_curve, OperationalModel, ResiliencePoint};
pub use network::{Asset, AssetKind, AssetNetwork, Dependency, Domain};
pub use pipeline::{run_pipeline, PipelineInputs, PipelineOutput};
pub use select::{prioritize_actions, Action, Phase, SelectionStrategy};
pub use simulate::{simulate, FailureHistory, FailureScenario, FailureStep};
