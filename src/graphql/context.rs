use std::sync::Arc;

use crate::app_context::AppContext;

#[derive(Clone)]
pub struct GraphQLContext {
    pub app: Arc<AppContext>,
}

impl GraphQLContext {
    pub fn new(app: AppContext) -> Self {
        Self { app: Arc::new(app) }
    }

    pub fn app(&self) -> &AppContext {
        &self.app
    }
}
