use std::sync::Arc;

use crate::{config::AppConfig, db::dao::TodoStore, services::todo_service::TodoService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub todos: TodoService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn TodoStore>) -> Arc<Self> {
        let todos = TodoService::new(store, config.request_timeout());
        Arc::new(Self { config, todos })
    }
}
