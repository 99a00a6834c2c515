//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract consumed by the service layer.
//! - Isolate SQLite query details from service/console orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Lookup misses are reported as `Option::None`, never as errors.

pub mod entity_repo;
