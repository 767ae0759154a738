use std::sync::Arc;

use dinesafely_core::application::DineSafelyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DineSafelyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DineSafelyService) -> Self {
        Self { args, service }
    }
}
