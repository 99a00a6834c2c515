//! Core domain logic for the entreg registry.
//! This crate is the single source of truth for entity persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{EntityId, EntityModel};
pub use repo::entity_repo::{EntityRepository, RepoError, RepoResult, SqliteEntityRepository};
pub use service::entity_service::EntityService;
