//! Entity repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `entities` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Insert paths never carry a client-supplied id; the engine assigns it.
//! - A zero-row update surfaces as `RepoError::NotFound`, not as success.

use crate::db::DbError;
use crate::model::entity::{EntityId, EntityModel};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTITY_SELECT_SQL: &str = "SELECT id, name FROM entities";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(EntityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for entity CRUD operations.
pub trait EntityRepository {
    /// Inserts when the entity has no id, updates the name otherwise.
    /// Returns the persisted entity with its id populated.
    fn save(&self, entity: &EntityModel) -> RepoResult<EntityModel>;
    /// Returns the matching entity, or `None` on a miss.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<EntityModel>>;
    /// Returns every persisted entity, ordered by ascending id.
    fn find_all(&self) -> RepoResult<Vec<EntityModel>>;
    /// Returns whether a row with this id exists.
    fn exists_by_id(&self, id: EntityId) -> RepoResult<bool>;
    /// Removes the row if present; absent ids are a no-op.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed entity repository.
pub struct SqliteEntityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntityRepository for SqliteEntityRepository<'_> {
    fn save(&self, entity: &EntityModel) -> RepoResult<EntityModel> {
        match entity.id {
            None => {
                self.conn.execute(
                    "INSERT INTO entities (name) VALUES (?1);",
                    params![entity.name.as_str()],
                )?;

                let id = self.conn.last_insert_rowid();
                Ok(EntityModel::with_id(id, entity.name.clone()))
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE entities SET name = ?1 WHERE id = ?2;",
                    params![entity.name.as_str(), id],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound(id));
                }

                Ok(entity.clone())
            }
        }
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<EntityModel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTITY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entity_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<EntityModel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTITY_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut entities = Vec::new();

        while let Some(row) = rows.next()? {
            entities.push(parse_entity_row(row)?);
        }

        Ok(entities)
    }

    fn exists_by_id(&self, id: EntityId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM entities WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists != 0)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        // Absent ids are a no-op here; the service checks existence first
        // when it needs to distinguish the two outcomes.
        self.conn
            .execute("DELETE FROM entities WHERE id = ?1;", params![id])?;

        Ok(())
    }
}

fn parse_entity_row(row: &Row<'_>) -> RepoResult<EntityModel> {
    let id: EntityId = row.get("id")?;
    let name: String = row.get("name")?;
    Ok(EntityModel::with_id(id, name))
}
