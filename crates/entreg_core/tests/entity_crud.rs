use entreg_core::db::open_db_in_memory;
use entreg_core::{EntityModel, EntityRepository, EntityService, RepoError, SqliteEntityRepository};

#[test]
fn save_insert_assigns_id_and_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let saved = repo.save(&EntityModel::new("first entry")).unwrap();
    assert!(saved.is_persisted());
    assert_eq!(saved.name, "first entry");

    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn generated_ids_start_at_one_and_are_monotonic() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let first = repo.save(&EntityModel::new("a")).unwrap();
    let second = repo.save(&EntityModel::new("b")).unwrap();
    let third = repo.save(&EntityModel::new("c")).unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(third.id, Some(3));
}

#[test]
fn deleted_ids_are_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let first = repo.save(&EntityModel::new("short-lived")).unwrap();
    repo.delete_by_id(first.id.unwrap()).unwrap();

    let second = repo.save(&EntityModel::new("successor")).unwrap();
    assert_eq!(second.id, Some(2));
}

#[test]
fn save_update_renames_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let saved = repo.save(&EntityModel::new("draft")).unwrap();
    let id = saved.id.unwrap();

    let renamed = repo.save(&EntityModel::with_id(id, "final")).unwrap();
    assert_eq!(renamed.id, Some(id));
    assert_eq!(renamed.name, "final");

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.name, "final");
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn save_update_on_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let err = repo.save(&EntityModel::with_id(404, "ghost")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn find_by_id_miss_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    assert!(repo.find_by_id(1).unwrap().is_none());
}

#[test]
fn find_all_returns_every_row_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    assert!(repo.find_all().unwrap().is_empty());

    repo.save(&EntityModel::new("one")).unwrap();
    assert_eq!(repo.find_all().unwrap().len(), 1);

    repo.save(&EntityModel::new("two")).unwrap();
    repo.save(&EntityModel::new("three")).unwrap();

    let all = repo.find_all().unwrap();
    let names: Vec<&str> = all.iter().map(|entity| entity.name.as_str()).collect();
    assert_eq!(names, ["one", "two", "three"]);

    let ids: Vec<_> = all.iter().map(|entity| entity.id.unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn exists_by_id_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let saved = repo.save(&EntityModel::new("present")).unwrap();

    assert!(repo.exists_by_id(saved.id.unwrap()).unwrap());
    assert!(!repo.exists_by_id(999).unwrap());
}

#[test]
fn delete_by_id_removes_row_and_ignores_absent_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);

    let saved = repo.save(&EntityModel::new("doomed")).unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).unwrap();
    assert!(repo.find_by_id(id).unwrap().is_none());

    // Absent ids are a silent no-op at the repository level.
    repo.delete_by_id(id).unwrap();
    repo.delete_by_id(12345).unwrap();
}

#[test]
fn empty_and_blank_names_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntityRepository::new(&conn);
    let service = EntityService::new(repo);

    let empty = service.add_entity("").unwrap();
    let blank = service.add_entity("   ").unwrap();

    assert_eq!(service.find_by_id(empty.id.unwrap()).unwrap().unwrap().name, "");
    assert_eq!(
        service.find_by_id(blank.id.unwrap()).unwrap().unwrap().name,
        "   "
    );
}

#[test]
fn service_add_persists_exact_name() {
    let conn = open_db_in_memory().unwrap();
    let service = EntityService::new(SqliteEntityRepository::new(&conn));

    let added = service.add_entity("Alice Smith").unwrap();
    assert!(added.is_persisted());

    let loaded = service.find_by_id(added.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.name, "Alice Smith");
}

#[test]
fn service_update_changes_name_only() {
    let conn = open_db_in_memory().unwrap();
    let service = EntityService::new(SqliteEntityRepository::new(&conn));

    let added = service.add_entity("Bob").unwrap();
    let id = added.id.unwrap();

    let updated = service.update_entity(id, "Bobby").unwrap().unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Bobby");

    let loaded = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Bobby");
}

#[test]
fn service_update_miss_returns_none_and_leaves_storage_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = EntityService::new(SqliteEntityRepository::new(&conn));

    service.add_entity("survivor").unwrap();

    assert!(service.update_entity(99, "nobody").unwrap().is_none());

    let all = service.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "survivor");
}

#[test]
fn service_delete_distinguishes_hit_from_miss() {
    let conn = open_db_in_memory().unwrap();
    let service = EntityService::new(SqliteEntityRepository::new(&conn));

    let added = service.add_entity("target").unwrap();
    let id = added.id.unwrap();

    assert!(service.delete_entity(id).unwrap());
    assert!(service.find_by_id(id).unwrap().is_none());

    // Second delete is an idempotent miss, not an error.
    assert!(!service.delete_entity(id).unwrap());
    assert!(!service.delete_entity(12345).unwrap());
}

#[test]
fn service_find_all_reflects_adds_and_deletes() {
    let conn = open_db_in_memory().unwrap();
    let service = EntityService::new(SqliteEntityRepository::new(&conn));

    assert!(service.find_all().unwrap().is_empty());

    let first = service.add_entity("keep").unwrap();
    let second = service.add_entity("drop").unwrap();
    assert_eq!(service.find_all().unwrap().len(), 2);

    service.delete_entity(second.id.unwrap()).unwrap();

    let remaining = service.find_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first.id);
}
