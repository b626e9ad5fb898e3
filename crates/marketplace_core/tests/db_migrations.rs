use marketplace_core::db::migrations::latest_version;
use marketplace_core::db::{open_store, DbError, StoreConfig, DB_FILE_NAME};
use rusqlite::Connection;

#[test]
fn open_store_bootstraps_the_collection_tables() {
    let conn = open_store(&StoreConfig::InMemory).unwrap();

    for table in ["freelancers", "projects"] {
        let count: u32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "table {table} should exist");
    }

    let user_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(user_version, latest_version());
}

#[test]
fn reopening_a_migrated_file_store_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::for_data_dir(dir.path());

    {
        let conn = open_store(&config).unwrap();
        conn.execute(
            "INSERT INTO freelancers (id, name, skill, rate_per_hour, rating)
             VALUES ('00000000-0000-4000-8000-000000000001', 'Budi', 'Programmer Java', 50.0, 4.8);",
            [],
        )
        .unwrap();
    }

    let conn = open_store(&config).unwrap();
    let count: u32 = conn
        .query_row("SELECT COUNT(*) FROM freelancers;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn store_from_a_newer_binary_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join(DB_FILE_NAME);

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let result = open_store(&StoreConfig::File(db_path));
    match result {
        Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, latest_version() + 1);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected schema version rejection"),
    }
}

#[test]
fn for_data_dir_appends_the_fixed_db_file_name() {
    let config = StoreConfig::for_data_dir("/var/lib/marketplace");
    assert_eq!(
        config,
        StoreConfig::File(std::path::PathBuf::from("/var/lib/marketplace").join(DB_FILE_NAME))
    );
}
