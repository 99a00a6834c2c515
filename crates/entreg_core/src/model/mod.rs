//! Domain model for the entity registry.
//!
//! # Responsibility
//! - Define the canonical record shared by repository and service layers.
//!
//! # Invariants
//! - Every persisted record is identified by a storage-assigned `EntityId`.
//! - Deletion is a hard delete; there are no tombstones or versions.

pub mod entity;
