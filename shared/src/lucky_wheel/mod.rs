//! Draw engine for the lucky wheel: turns a server-decided prize into a spin
//! that lands on the matching wedge, one draw at a time.

pub mod catalog;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod orchestrator;
pub mod presenter;
pub mod resolver;
pub mod service;
pub mod spin;

pub use catalog::{Prize, PrizeCatalog, Wedge};
pub use config::{UnknownPrizePolicy, WheelConfig};
pub use error::{CatalogError, ConfigError, DrawError, ServiceError};
pub use lifecycle::{DrawEvent, DrawPhase};
pub use model::{DrawInit, DrawOutcome, DrawRecord, DrawReveal, DrawSession};
pub use orchestrator::DrawOrchestrator;
pub use presenter::{
    AnimatedProperty, CompletionSignal, RotationCompletion, RotationRequest, RotationTicket,
    WheelPresenter,
};
pub use resolver::{resolve_outcome, resolve_wedge, Resolution};
pub use service::{ApiErrorBody, DrawService};
pub use spin::{landing_angle, plan_spin, SpinPlan};
