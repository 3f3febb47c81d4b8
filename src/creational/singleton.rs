// Singleton Pattern with OnceLock
// One lazily built instance per process, handed out by reference.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Lazily initialised shared value.
///
/// Concurrent first callers race on [`Lazy::get`]; exactly one runs the
/// initializer, the rest block until it returns, and every caller receives a
/// reference to the same instance. A `Lazy` can live in a `static` for
/// process-wide state or on the stack for isolated tests.
pub struct Lazy<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
    initializations: AtomicUsize,
}

impl<T> Lazy<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
            initializations: AtomicUsize::new(0),
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            self.initializations.fetch_add(1, Ordering::SeqCst);
            tracing::debug!(type_name = std::any::type_name::<T>(), "initializing singleton");
            (self.init)()
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times the initializer has run. Never exceeds one.
    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Example: application configuration
// ============================================================================

#[derive(Debug, Default)]
pub struct AppConfig {
    app_name: Mutex<String>,
}

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

impl AppConfig {
    pub fn global() -> &'static AppConfig {
        APP_CONFIG.get()
    }

    pub fn app_name(&self) -> String {
        self.app_name
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_app_name(&self, name: impl Into<String>) {
        *self.app_name.lock().unwrap_or_else(PoisonError::into_inner) = name.into();
    }
}

// ============================================================================
// Example: shared logger counting its messages
// ============================================================================

#[derive(Debug, Default)]
pub struct Logger {
    count: AtomicU64,
}

static LOGGER: Lazy<Logger> = Lazy::new(Logger::default);

impl Logger {
    pub fn global() -> &'static Logger {
        LOGGER.get()
    }

    /// Record a message and return the formatted line.
    pub fn log(&self, message: &str) -> String {
        let count = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(count, "{message}");
        format!("[LOG]: {message}")
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Example: process-wide counter
// ============================================================================

#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

static COUNTER: Lazy<Counter> = Lazy::new(Counter::default);

impl Counter {
    pub fn global() -> &'static Counter {
        COUNTER.get()
    }

    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn value(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
