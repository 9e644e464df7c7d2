use std::sync::Arc;

use crate::config::Config;
use crate::runner::Runner;

#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<Runner>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            runner: Arc::new(Runner::from_config(config)),
        }
    }
}
