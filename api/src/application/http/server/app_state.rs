use std::sync::Arc;

use casino_crm_core::application::CrmService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CrmService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CrmService) -> Self {
        Self { args, service }
    }
}
