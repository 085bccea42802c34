//! Chime service signer and resource client.
//!
//! This crate implements the service-specific half of the workspace: the
//! credential type and its providers, the SigV4 request signer for the fixed
//! Chime deployment, and a thin resource client covering the meeting,
//! attendee, and channel families.

mod constants;
pub use constants::{CHIME_ENDPOINT, CHIME_HOST, CHIME_REGION, CHIME_SERVICE};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
    StoreCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod error;
pub use error::ApiError;

mod api;
pub use api::{ChimeClient, CreateAttendeeInput, CreateChannelInput, CreateMeetingInput};
