//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the HTTP API contract with explicit serialization
//! control. They decouple internal domain types from external API representation.

pub mod names;

pub use names::{
    CreatedRecordDto, DataResponse, InsertRequest, RawRecordId, RecordDto, SuccessResponse,
    UpdateRequest,
};
