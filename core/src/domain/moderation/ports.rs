use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    moderation::{
        entities::{ModerationDecision, ModerationNotice, Report, ReportTarget},
        value_objects::{ModerationOutcome, ReportContentInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ModerationService: Send + Sync {
    fn report_content(
        &self,
        identity: Identity,
        target: ReportTarget,
        target_id: Uuid,
        input: ReportContentInput,
    ) -> impl Future<Output = Result<Report, CoreError>> + Send;

    /// Staff only.
    fn moderate_content(
        &self,
        identity: Identity,
        target: ReportTarget,
        target_id: Uuid,
        decision: ModerationDecision,
    ) -> impl Future<Output = Result<ModerationOutcome, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReportRepository: Send + Sync {
    fn create(&self, report: Report) -> impl Future<Output = Result<Report, CoreError>> + Send;

    /// Deletes every report on the target and returns how many were closed.
    fn close_reports(
        &self,
        target: ReportTarget,
        target_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Delivers moderation notices to content authors.
#[cfg_attr(test, mockall::automock)]
pub trait ModerationNotifier: Send + Sync {
    fn notify(
        &self,
        notice: ModerationNotice,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
