//! # Hearth Counter Library
//!
//! Interactive order-taking counter built on `hearth-core`.
//!
//! ## Module Organization
//! ```text
//! hearth_counter/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── One visit: login → orders → bill
//! ├── prompt.rs       ◄─── Prompter: ask / re-ask over any reader+writer
//! ├── receipt.rs      ◄─── Menu, summary and bill text
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── ledger.rs   ◄─── LedgerState (Arc<Mutex<OrderLedger>>)
//! │   └── config.rs   ◄─── CounterConfig from HEARTH_* variables
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── login.rs    ◄─── Credential challenge
//! │   ├── order.rs    ◄─── Order loop
//! │   └── checkout.rs ◄─── Customer details and bill
//! └── error.rs        ◄─── AppError for startup and sessions
//! ```

pub mod commands;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod session;
pub mod state;

use std::fs;
use std::io;

use hearth_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{AppError, AppResult};
use prompt::Prompter;
use session::{Session, SessionOutcome};
use state::CounterConfig;

/// Runs one counter session on the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Counter Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • HEARTH_* environment variables over defaults                      │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • HEARTH_CATALOG_PATH JSON file, or the built-in menu               │
/// │     • Exit choice must not shadow a product number                      │
/// │                                                                         │
/// │  4. Run Session on stdin/stdout ──────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<SessionOutcome> {
    init_tracing();

    let config = CounterConfig::load()?;
    info!(shop = %config.shop_name, capacity = config.ledger_capacity, "Configuration loaded");

    let catalog = load_catalog(&config)?;
    config.check_exit_choice(&catalog)?;
    info!(
        products = catalog.product_count(),
        add_ons = catalog.add_on_count(),
        "Catalog ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(&config, &catalog, prompter);
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show rejected input and recorded lines
/// - `RUST_LOG=hearth_counter=info` - Session events only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A host may already have installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads the configured catalog file, or falls back to the built-in menu.
pub fn load_catalog(config: &CounterConfig) -> AppResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::reference());
    };

    let text = fs::read_to_string(path).map_err(|source| AppError::CatalogFile {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "Loading catalog file");

    Ok(Catalog::from_json(&text)?)
}
