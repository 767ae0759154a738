use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    moderation::{entities::ModerationNotice, ports::ModerationNotifier},
};

/// Emits moderation notices as structured log events. Mail delivery lives
/// outside this service.
#[derive(Debug, Clone, Default)]
pub struct TracingModerationNotifier;

impl TracingModerationNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl ModerationNotifier for TracingModerationNotifier {
    async fn notify(&self, notice: ModerationNotice) -> Result<(), CoreError> {
        info!(
            recipient_id = %notice.recipient_id,
            moderator_id = %notice.moderator_id,
            target = %notice.target,
            target_id = %notice.target_id,
            decision = %notice.decision,
            "moderation notice"
        );

        Ok(())
    }
}
