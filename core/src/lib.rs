//! Core components for signing Chime API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! `chimectl` workspace. It knows nothing about the Chime wire protocol
//! itself; it defines the scaffolding a request signer is built on:
//!
//! - **Context**: a container holding implementations for file reading,
//!   HTTP sending, and environment access
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and request signing ([`SignRequest`])
//! - **Signer**: the orchestrator that loads a credential, caches it while
//!   valid, and hands requests to the signing implementation
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: timestamp formatting for credential scopes
//! - [`utils`]: secret redaction for Debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, FileRead, HttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
