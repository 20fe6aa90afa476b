/// Database test utilities with singleton pattern
///
/// Integration tests run against `TEST_DATABASE_URL`. When it is unset the
/// pool is `None` and callers skip instead of failing.
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use enrollment_lib::shared::infrastructure::{DbConnection, DbPool};
use enrollment_lib::shared::{Database, DatabaseState, SharedDatabaseState};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static DB_POOL: OnceLock<Option<DbPool>> = OnceLock::new();

/// Get or create the shared test pool, migrated once per test binary
pub fn get_test_db_pool() -> Option<DbPool> {
    DB_POOL
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())?;

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = Pool::builder()
                .max_size(5)
                .build(manager)
                .expect("Failed to create test database pool");

            Database::from_pool(pool.clone())
                .run_migrations()
                .expect("Failed to run migrations on test database");

            Some(pool)
        })
        .clone()
}

/// Wrap the pool the way the running service holds it
pub fn shared_state(pool: &DbPool) -> SharedDatabaseState {
    DatabaseState::Available(Arc::new(Database::from_pool(pool.clone()))).into_shared()
}

pub fn connection(pool: &DbPool) -> DbConnection {
    pool.get().expect("Failed to get DB connection")
}

/// Clean all tables - use at the start of each test
pub fn clean_test_db(pool: &DbPool) {
    let mut conn = connection(pool);
    diesel::sql_query(
        "TRUNCATE TABLE enrollments, students, courses, departments RESTART IDENTITY CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to clean test tables");
}

/// Run each statement in order; fixtures only
pub fn seed(pool: &DbPool, statements: &[&str]) {
    let mut conn = connection(pool);
    for statement in statements {
        diesel::sql_query(*statement)
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Seed statement failed ({statement}): {e}"));
    }
}

#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let mut conn = connection(pool);
    diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
        .get_result::<RowCount>(&mut conn)
        .expect("Failed to count rows")
        .count
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Bind a migrated, empty test pool or return early from the test
macro_rules! require_test_db {
    () => {
        match crate::utils::db::get_test_db_pool() {
            Some(pool) => {
                crate::utils::db::clean_test_db(&pool);
                pool
            }
            None => {
                eprintln!("TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}
