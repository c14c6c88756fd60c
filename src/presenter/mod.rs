pub mod command_handler;
pub mod intent;
pub mod listener;
pub mod table;

use crate::app::PricingSheet;
use crate::config::AppConfig;
use std::time::Instant;

/// Everything the terminal front end needs while the session runs.
pub struct Session {
    pub sheet: PricingSheet,
    pub config: AppConfig,
    pub start_time: Instant,
}

impl Session {
    pub fn new(sheet: PricingSheet, config: AppConfig) -> Self {
        Self {
            sheet,
            config,
            start_time: Instant::now(),
        }
    }
}
