use std::path::Path;

use super::AirportDb;

use crate::errors::AddsDataErr;

impl AirportDb {
    /// Default name of the database file inside a data root directory.
    pub const DB_FILE: &'static str = "airports.db";

    /// Initialize a new, empty database. Any existing airports table in the file is dropped.
    pub fn create(db_file: &dyn AsRef<Path>) -> Result<Self, AddsDataErr> {
        let db_file = db_file.as_ref().to_path_buf();

        if let Some(parent) = db_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db_conn = rusqlite::Connection::open_with_flags(
            &db_file,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE | rusqlite::OpenFlags::SQLITE_OPEN_CREATE,
        )
        .map_err(AddsDataErr::Connection)?;

        db_conn.execute_batch(include_str!("root/create_airports.sql"))?;

        Ok(AirportDb { db_file, db_conn })
    }

    /// Open an existing database.
    pub fn connect(db_file: &dyn AsRef<Path>) -> Result<Self, AddsDataErr> {
        let db_file = db_file.as_ref().to_path_buf();

        let db_conn =
            rusqlite::Connection::open_with_flags(&db_file, rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE)
                .map_err(AddsDataErr::Connection)?;

        Self::validate_db_structure(&db_conn)?;

        Ok(AirportDb { db_file, db_conn })
    }

    /// Open the database if the file exists, otherwise create it.
    ///
    /// Unlike `create`, an existing airports table is left alone so a later failed import keeps
    /// the old data.
    pub fn open_or_create(db_file: &dyn AsRef<Path>) -> Result<Self, AddsDataErr> {
        if db_file.as_ref().exists() {
            Self::connect(db_file)
        } else {
            Self::create(db_file)
        }
    }

    /// The path to the database file.
    pub fn db_file(&self) -> &Path {
        &self.db_file
    }

    /// Validate the database structure is correct.
    fn validate_db_structure(db_conn: &rusqlite::Connection) -> Result<(), AddsDataErr> {
        let num_tables: i64 = db_conn
            .query_row(
                "SELECT COUNT(name) FROM sqlite_master WHERE type='table' AND name='airports'",
                rusqlite::NO_PARAMS,
                |row| row.get(0),
            )
            .map_err(AddsDataErr::Connection)?;

        if num_tables != 1 {
            return Err(AddsDataErr::InvalidSchema);
        }

        Ok(())
    }
}
