use std::sync::Arc;

use chrono::FixedOffset;
use diesel::PgConnection;

use crate::auth::AdminSessions;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub sessions: AdminSessions,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        let sessions = AdminSessions::new(chrono::Duration::hours(config.admin_session_hours));
        Self {
            pool,
            sessions,
            config: Arc::new(config),
        }
    }

    pub fn timezone(&self) -> FixedOffset {
        self.config.timezone()
    }

    /// Run a blocking diesel query on a pooled connection.
    pub async fn db<T, F>(&self, query: F) -> ApiResult<T>
    where
        F: FnOnce(&mut PgConnection) -> diesel::QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.pool.get().await?;
        let result = conn
            .interact(query)
            .await
            .map_err(|e| ApiError::Interact(e.to_string()))??;

        Ok(result)
    }
}
