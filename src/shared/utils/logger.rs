use log::{debug, info, warn};
use std::sync::Once;
use std::time::{Duration, Instant};

static INIT: Once = Once::new();

/// Operations slower than this are logged at info instead of debug
const SLOW_OPERATION: Duration = Duration::from_millis(250);

/// Install env_logger for the batch binaries.
///
/// `RUST_LOG` overrides the defaults. The HTTP server installs a tracing
/// subscriber instead, which also receives these `log` records.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .filter_module("enrollment_lib", log::LevelFilter::Info)
            .filter_module("upload_students", log::LevelFilter::Info)
            .format_timestamp_secs()
            .format_target(false)
            .parse_default_env()
            .init();

        debug!("env_logger installed");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// One-line log formats shared by the repositories and the import path
pub struct LogContext;

impl LogContext {
    /// `elapsed` is `None` when the statement is about to run
    pub fn db_operation(operation: &str, table: &str, elapsed: Option<Duration>) {
        match elapsed {
            Some(elapsed) => info!("DB: {} on {} took {:?}", operation, table, elapsed),
            None => debug!("DB: {} on {}", operation, table),
        }
    }

    pub fn import_progress(rows: usize, source: &str) {
        info!("Import: read {} rows from '{}'", rows, source);
    }

    pub fn search_operation(fragment: &str, matches: Option<usize>) {
        match matches {
            Some(n) => debug!("Search: '{}' matched {} students on this page", fragment, n),
            None => debug!("Search: '{}'", fragment),
        }
    }

    pub fn slow_connection(elapsed: Duration) {
        warn!("DB: waited {:?} for a pooled connection", elapsed);
    }
}

/// Logs how long an operation took when finished
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn finish(self) -> Duration {
        self.finish_with_info("")
    }

    pub fn finish_with_info(self, detail: &str) -> Duration {
        let elapsed = self.start.elapsed();
        let detail = if detail.is_empty() {
            String::new()
        } else {
            format!(" ({})", detail)
        };

        if elapsed >= SLOW_OPERATION {
            info!("{} took {:?}{}", self.operation, elapsed, detail);
        } else {
            debug!("{} took {:?}{}", self.operation, elapsed, detail);
        }
        elapsed
    }
}
