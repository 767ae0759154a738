/// Application service. Every domain service trait (`RestaurantService`,
/// `ReviewService`, `CommunityService`, `ModerationService`, `UserService`,
/// `SafetyFeedbackService`, `AuthService`, `HealthCheckService`) is implemented
/// on this struct, so the HTTP layer only ever holds one value.
#[derive(Clone)]
pub struct Service<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> {
    pub restaurant_repository: RE,
    pub review_repository: RV,
    pub comment_repository: CM,
    pub question_repository: QA,
    pub activity_log_repository: AL,
    pub favorite_repository: FV,
    pub report_repository: RP,
    pub user_repository: U,
    pub hasher_repository: H,
    pub health_check_repository: HC,
    pub metadata_client: MC,
    pub inspection_client: IC,
    pub token_verifier: TV,
    pub random_source: RS,
    pub moderation_notifier: MN,
    pub covid_zone_client: CZ,
    pub safety_feedback_repository: SF,
}
