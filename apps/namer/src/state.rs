use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::layout::ReportConfig;
use crate::naming::catalog::FormatCatalog;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Transient per-session entry lists.
    pub sessions: SessionStore,
    /// Page geometry and card style for PDF export. Defaults to A4.
    pub report_config: ReportConfig,
}

impl AppState {
    pub fn new(config: Config, report_config: ReportConfig) -> Self {
        AppState {
            config,
            sessions: SessionStore::default(),
            report_config,
        }
    }

    pub fn catalog(&self) -> &FormatCatalog {
        &self.config.catalog
    }

    /// Local calendar date, used for date fallback and report titles.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
