// asactl-api: Async Rust client for the Cisco ASA REST management API

pub mod client;
pub mod commands;
pub mod error;
pub mod models;
pub mod objects;
pub mod transport;

pub use client::{AsaClient, Credentials};
pub use error::Error;
pub use models::{DeviceResponse, ObjectEndpoint};
pub use transport::{TlsMode, TransportConfig};
