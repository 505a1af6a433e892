#![allow(dead_code)]

use rsa_portal::db::{DbPool, establish_connection_pool, run_migrations};
use rsa_portal::repository::DieselRepository;
use tempfile::TempDir;

/// SQLite database living in a temporary directory for one test.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Repository over this database, already marked ready.
    pub fn ready_repo(&self) -> DieselRepository {
        let repo = DieselRepository::new(self.pool.clone());
        repo.mark_ready();
        repo
    }
}
