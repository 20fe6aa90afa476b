use super::database::{Database, DbConnection};
use crate::shared::config::DatabaseSettings;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info, log_warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task;

/// Shared between the repositories and the health monitor
pub type SharedDatabaseState = Arc<RwLock<DatabaseState>>;

const MAX_BACKOFF: Duration = Duration::from_secs(300);
const RECONNECT_INTERVAL: Duration = Duration::from_secs(30);

/// Whether the store can currently be reached.
///
/// The service starts and keeps answering while the store is down; every
/// repository call then fails with `ServiceUnavailable` until a reconnect
/// succeeds.
#[derive(Debug, Clone)]
pub enum DatabaseState {
    Available(Arc<Database>),
    Unavailable {
        reason: String,
        since: Instant,
        failed_attempts: u32,
    },
}

impl DatabaseState {
    /// Connect once; a failure yields `Unavailable` rather than an error
    pub fn initialize(settings: &DatabaseSettings) -> Self {
        match Database::connect(settings) {
            Ok(db) => DatabaseState::Available(Arc::new(db)),
            Err(e) => {
                log_error!("Starting without a database: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        DatabaseState::Unavailable {
            reason: reason.into(),
            since: Instant::now(),
            failed_attempts: 0,
        }
    }

    pub fn into_shared(self) -> SharedDatabaseState {
        Arc::new(RwLock::new(self))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DatabaseState::Available(_))
    }

    pub fn get_database(&self) -> AppResult<Arc<Database>> {
        match self {
            DatabaseState::Available(db) => Ok(Arc::clone(db)),
            DatabaseState::Unavailable { reason, .. } => Err(AppError::ServiceUnavailable(
                format!("Database unavailable: {}", reason),
            )),
        }
    }

    /// Wait before the next attempt: 2^failed_attempts seconds, capped
    fn backoff(failed_attempts: u32) -> Duration {
        Duration::from_secs(2_u64.saturating_pow(failed_attempts)).min(MAX_BACKOFF)
    }

    /// True when the store is down and its backoff has elapsed
    pub fn reconnect_due(&self) -> bool {
        match self {
            DatabaseState::Available(_) => false,
            DatabaseState::Unavailable {
                since,
                failed_attempts,
                ..
            } => since.elapsed() >= Self::backoff(*failed_attempts),
        }
    }

    /// Apply the outcome of a reconnect made outside the lock. Returns true
    /// only when this outcome brought the database back.
    pub fn record_reconnect(&mut self, outcome: AppResult<Database>) -> bool {
        let failed_attempts = match self {
            DatabaseState::Available(_) => return false,
            DatabaseState::Unavailable {
                failed_attempts, ..
            } => *failed_attempts,
        };

        match outcome {
            Ok(db) => {
                log_info!("Database back after {} failed attempts", failed_attempts);
                *self = DatabaseState::Available(Arc::new(db));
                true
            }
            Err(e) => {
                log_warn!("Reconnect attempt {} failed: {}", failed_attempts + 1, e);
                *self = DatabaseState::Unavailable {
                    reason: e.to_string(),
                    since: Instant::now(),
                    failed_attempts: failed_attempts + 1,
                };
                false
            }
        }
    }

    /// Human-readable line for the health endpoint
    pub fn status_message(&self) -> String {
        match self {
            DatabaseState::Available(db) => {
                let (open, idle) = db.pool_usage();
                format!("connected ({} open, {} idle)", open, idle)
            }
            DatabaseState::Unavailable {
                reason,
                failed_attempts,
                ..
            } => format!("unavailable after {} retries: {}", failed_attempts, reason),
        }
    }
}

/// Run `work` on a pooled connection on the blocking thread pool.
///
/// Only the `Arc<Database>` is cloned under the read lock, so a slow
/// checkout or statement never holds the lock or a runtime worker.
pub async fn with_connection<T, F>(state: &SharedDatabaseState, work: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut DbConnection) -> AppResult<T> + Send + 'static,
{
    let database = state.read().await.get_database()?;

    task::spawn_blocking(move || -> AppResult<T> {
        let mut conn = database.get_connection()?;
        work(&mut conn)
    })
    .await?
}

/// Background task that reconnects an unavailable database and migrates it
pub struct DatabaseHealthMonitor {
    state: SharedDatabaseState,
    settings: DatabaseSettings,
}

impl DatabaseHealthMonitor {
    pub fn new(state: SharedDatabaseState, settings: DatabaseSettings) -> Self {
        Self { state, settings }
    }

    pub fn start_monitoring(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(RECONNECT_INTERVAL);

            loop {
                interval.tick().await;

                if !self.state.read().await.reconnect_due() {
                    continue;
                }

                let settings = self.settings.clone();
                reconnect(&self.state, move || {
                    let db = Database::connect(&settings)?;
                    if let Err(e) = db.run_migrations() {
                        log_error!("Migrations after reconnect failed: {}", e);
                    }
                    Ok(db)
                })
                .await;
            }
        })
    }
}

/// Run `connect` on the blocking pool and take the write lock only to
/// record its outcome.
async fn reconnect<F>(state: &SharedDatabaseState, connect: F) -> bool
where
    F: FnOnce() -> AppResult<Database> + Send + 'static,
{
    let outcome = task::spawn_blocking(connect)
        .await
        .map_err(AppError::from)
        .and_then(|outcome| outcome);

    state.write().await.record_reconnect(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::pg::PgConnection;
    use diesel::r2d2::{ConnectionManager, Pool};

    fn unreachable_database() -> Database {
        let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@127.0.0.1:1/none");
        Database::from_pool(Pool::builder().min_idle(Some(0)).build_unchecked(manager))
    }

    #[tokio::test]
    async fn unavailable_state_reports_service_unavailable() {
        let state = DatabaseState::unavailable("connection refused").into_shared();

        let Err(err) = with_connection(&state, |_| Ok(())).await else {
            panic!("expected ServiceUnavailable");
        };
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn requests_are_answered_while_a_reconnect_is_in_flight() {
        let state = DatabaseState::unavailable("down").into_shared();
        let (release, connecting) = std::sync::mpsc::channel::<()>();

        let pending = tokio::spawn({
            let state = Arc::clone(&state);
            async move {
                reconnect(&state, move || {
                    connecting.recv().ok();
                    Ok(unreachable_database())
                })
                .await
            }
        });
        tokio::task::yield_now().await;

        let answered =
            tokio::time::timeout(Duration::from_secs(1), with_connection(&state, |_| Ok(()))).await;
        let Ok(Err(err)) = answered else {
            panic!("expected an immediate ServiceUnavailable");
        };
        assert!(err.is_unavailable());

        release.send(()).unwrap();
        assert!(pending.await.unwrap());
        assert!(state.read().await.is_available());
    }

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(DatabaseState::backoff(0), Duration::from_secs(1));
        assert_eq!(DatabaseState::backoff(3), Duration::from_secs(8));
        assert_eq!(DatabaseState::backoff(40), MAX_BACKOFF);
    }

    #[test]
    fn reconnect_waits_out_the_backoff() {
        let state = DatabaseState::Unavailable {
            reason: "down".to_string(),
            since: Instant::now(),
            failed_attempts: 5,
        };
        assert!(!state.reconnect_due());
        assert!(!DatabaseState::Available(Arc::new(unreachable_database())).reconnect_due());
    }

    #[test]
    fn failed_reconnect_extends_the_backoff() {
        let mut state = DatabaseState::unavailable("down");

        let recovered =
            state.record_reconnect(Err(AppError::ServiceUnavailable("still refused".into())));

        assert!(!recovered);
        assert!(!state.reconnect_due());
        assert!(matches!(
            &state,
            DatabaseState::Unavailable { failed_attempts: 1, reason, .. } if reason.contains("still refused")
        ));
    }

    #[test]
    fn successful_reconnect_makes_the_store_available() {
        let mut state = DatabaseState::unavailable("down");

        assert!(state.record_reconnect(Ok(unreachable_database())));
        assert!(state.is_available());
        assert!(!state.record_reconnect(Ok(unreachable_database())));
    }
}
