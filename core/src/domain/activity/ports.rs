use std::future::Future;

use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait ActivityLogRepository: Send + Sync {
    /// Creates the log with one visit or atomically increments it. Returns the
    /// visit count after the increment.
    fn record_visit(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
