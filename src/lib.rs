#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod auditor;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod project;
pub mod reconcile;
pub mod report;
pub mod scanning;
pub mod selection;

pub use auditor::{AssetAuditor, AuditOutcome, AuditReport};
pub use error::{AuditError, AuditResult};
pub use models::{AssetPath, Declaration, DeclarationKind, ReconciliationResult, UnusedAsset};
pub use project::{AuditContext, ProjectLayout};
pub use reconcile::{Evaluation, evaluate, reconcile};
