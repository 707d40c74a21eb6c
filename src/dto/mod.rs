//! DTOs describing payloads exchanged with the list backend.

pub mod envelope;
