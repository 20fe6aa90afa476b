use crate::shared::config::DatabaseSettings;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_info, log_warn};
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::{Duration, Instant};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a caller waits for a pooled connection before the store counts
/// as unreachable
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_CHECKOUT: Duration = Duration::from_millis(100);

/// r2d2 pool over Postgres
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Build the pool; fails with `ServiceUnavailable` when no connection can
    /// be opened within the checkout timeout
    pub fn connect(settings: &DatabaseSettings) -> AppResult<Self> {
        log_info!(
            "Connecting to {} ({:?})",
            settings.target(),
            settings.source()
        );

        let (max_size, min_idle) = Self::pool_size();
        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(min_idle))
            .connection_timeout(CHECKOUT_TIMEOUT)
            .idle_timeout(Some(Duration::from_secs(300)))
            .test_on_check_out(true)
            .build(ConnectionManager::<PgConnection>::new(settings.url()))
            .map_err(|e| {
                AppError::ServiceUnavailable(format!(
                    "Cannot reach database at {}: {}",
                    settings.target(),
                    e
                ))
            })?;

        log_info!("Connection pool ready (max {}, min idle {})", max_size, min_idle);
        Ok(Self { pool })
    }

    /// Wrap a pool built elsewhere
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Twice the core count, between 2 and 10
    fn pool_size() -> (u32, u32) {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(2);
        let max_size = (cores * 2).clamp(2, 10);
        (max_size, (max_size / 4).max(1))
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = Instant::now();
        let conn = self.pool.get().map_err(|e| {
            log_warn!("Connection checkout failed: {}", e);
            AppError::from(e)
        })?;

        let waited = start.elapsed();
        if waited > SLOW_CHECKOUT {
            LogContext::slow_connection(waited);
        }
        Ok(conn)
    }

    /// Apply pending embedded migrations, returning how many ran
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?
            .len();

        if applied > 0 {
            log_info!("Applied {} migrations", applied);
        }
        Ok(applied)
    }

    /// (open, idle) connections
    pub fn pool_usage(&self) -> (u32, u32) {
        let state = self.pool.state();
        (state.connections, state.idle_connections)
    }
}
