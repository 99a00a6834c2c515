//! Entity use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for console callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Lookup misses are `Ok(None)`/`Ok(false)`, never errors.
//! - Updates mutate `name` only; the id is preserved as found.
//! - Service layer remains storage-agnostic.

use crate::model::entity::{EntityId, EntityModel};
use crate::repo::entity_repo::{EntityRepository, RepoResult};

/// Use-case service wrapper for entity CRUD operations.
pub struct EntityService<R: EntityRepository> {
    repo: R,
}

impl<R: EntityRepository> EntityService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every persisted entity, unfiltered.
    pub fn find_all(&self) -> RepoResult<Vec<EntityModel>> {
        self.repo.find_all()
    }

    /// Gets one entity by id; `None` is the explicit not-found marker.
    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<EntityModel>> {
        self.repo.find_by_id(id)
    }

    /// Creates an entity with the given name and a storage-assigned id.
    ///
    /// # Contract
    /// - `name` is persisted as given; empty and blank strings are accepted.
    /// - Returns the persisted entity with its id populated.
    pub fn add_entity(&self, name: impl Into<String>) -> RepoResult<EntityModel> {
        self.repo.save(&EntityModel::new(name))
    }

    /// Renames an existing entity.
    ///
    /// # Contract
    /// - Only `name` is mutated; the id is preserved.
    /// - Returns `Ok(None)` when the id resolves to no record, leaving
    ///   storage unchanged.
    pub fn update_entity(
        &self,
        id: EntityId,
        name: impl Into<String>,
    ) -> RepoResult<Option<EntityModel>> {
        match self.repo.find_by_id(id)? {
            Some(mut entity) => {
                entity.name = name.into();
                Ok(Some(self.repo.save(&entity)?))
            }
            None => Ok(None),
        }
    }

    /// Deletes an entity by id.
    ///
    /// # Contract
    /// - Returns `true` when a record existed and was removed.
    /// - Returns `false` when nothing matched; storage is left unchanged.
    pub fn delete_entity(&self, id: EntityId) -> RepoResult<bool> {
        if !self.repo.exists_by_id(id)? {
            return Ok(false);
        }

        self.repo.delete_by_id(id)?;
        Ok(true)
    }
}
