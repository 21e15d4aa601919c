//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the console. All concrete implementations are instantiated here:
//! - Record store (via opsdesk-db)
//! - Host statistics source (via opsdesk-runtime)
//! - Core services (via opsdesk-core)
//!
//! Responders receive the composed `ConsoleContext` and never construct
//! adapters themselves.

use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

use opsdesk_core::{HostStatsPort, UserDirectory};
use opsdesk_db::FsRecordStore;
use opsdesk_runtime::SysinfoStatsSource;
use tracing::{info, warn};

use crate::presentation::{Renderer, Width};

/// Environment variable naming the record store root.
pub const DATA_DIR_ENV: &str = "OPSDESK_DATA_DIR";

/// Record store root used when `OPSDESK_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = ".data";

/// Bootstrap configuration for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Root directory of the record store.
    pub data_dir: PathBuf,
    /// Whether output may contain ANSI colors.
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            color: true,
        }
    }
}

impl ConsoleConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);
        // https://no-color.org: any non-empty value disables color
        let color = lookup("NO_COLOR").is_none_or(|value| value.is_empty());

        Self { data_dir, color }
    }
}

/// Fully composed context handed to every responder.
pub struct ConsoleContext<W: Write> {
    /// Output primitives.
    pub renderer: Renderer<W>,
    /// Read access to user records.
    pub users: UserDirectory,
    /// Host statistics source.
    pub stats: Arc<dyn HostStatsPort>,
}

impl<W: Write> ConsoleContext<W> {
    pub fn new(renderer: Renderer<W>, users: UserDirectory, stats: Arc<dyn HostStatsPort>) -> Self {
        Self {
            renderer,
            users,
            stats,
        }
    }
}

/// Bootstrap the console against stdout.
///
/// This is the composition root. It:
/// 1. Opens the file record store at the configured root
/// 2. Creates the host statistics source
/// 3. Builds a terminal-width renderer over stdout
pub fn bootstrap(config: &ConsoleConfig) -> ConsoleContext<Stdout> {
    if !config.data_dir.is_dir() {
        warn!(
            data_dir = %config.data_dir.display(),
            "Record store directory does not exist; listings will be empty"
        );
    }

    let store = Arc::new(FsRecordStore::new(&config.data_dir));
    let users = UserDirectory::new(store);
    let stats: Arc<dyn HostStatsPort> = Arc::new(SysinfoStatsSource::new());
    let renderer = Renderer::new(io::stdout(), Width::Terminal, config.color);

    info!(data_dir = %config.data_dir.display(), color = config.color, "Console bootstrapped");
    ConsoleContext::new(renderer, users, stats)
}
