//! Desired-state reconciliation for Cisco ASA policy objects.
//!
//! Each invocation converges one resource:
//!
//! - **Translator** ([`objects`]): declared arguments become a desired wire
//!   body, validated before any remote call.
//! - **Fetcher** ([`fetch`]): one read, classified as found / not found or a
//!   fatal error.
//! - **Reconciler** ([`reconcile`]): a generic create/update/delete/no-op
//!   engine driven by the per-kind [`ManagedObject`] strategy.
//! - **Reporter** ([`Report`]): the changed flag or a failure message.
//!
//! [`Device`] wires these to an [`asactl_api::AsaClient`]; tests plug in any
//! other [`DeviceClient`].

pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod fetch;
pub mod model;
pub mod objects;
pub mod reconcile;
pub mod report;
pub mod tables;
pub mod task;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::DeviceClient;
pub use config::{DeviceConfig, TlsVerification};
pub use device::Device;
pub use error::{CoreError, ValidationError};
pub use fetch::CurrentState;
pub use model::{
    Authentication, Category, Encryption, HashAlgorithm, Intent, MemberEntry, ResourceKind,
    parse_choice,
};
pub use objects::{
    Ikev1Policy, Ikev1PolicyArgs, NetworkObject, NetworkObjectArgs, NetworkObjectGroup,
    NetworkObjectGroupArgs, ServiceObject, ServiceObjectArgs,
};
pub use reconcile::{Action, ManagedObject, Outcome, Step};
pub use report::Report;
pub use task::{Task, run_task};

// Transport-level types consumers need without a direct api dependency.
pub use asactl_api::{DeviceResponse, ObjectEndpoint};
