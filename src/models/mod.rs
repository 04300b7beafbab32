//! Records, request and response models for the API
//!
//! This module defines the stored entities and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{Post, RecordId, User};
pub use requests::{
    parse_int_prefix, CreatePostRequest, CreateUserRequest, DelayQuery, EchoPayload,
    UpdateUserRequest, ValidateRequest,
};
pub use responses::{DelayResponse, EchoData, Envelope};
