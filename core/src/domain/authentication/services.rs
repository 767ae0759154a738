use tracing::debug;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{
        ports::{AuthService, TokenVerifier},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    community::ports::QuestionRepository,
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    moderation::ports::{ModerationNotifier, ReportRepository},
    restaurant::ports::{
        CovidZoneClient, InspectionClient, RandomSource, RestaurantMetadataClient,
        RestaurantRepository,
    },
    review::ports::{CommentRepository, ReviewRepository},
    safety::ports::SafetyFeedbackRepository,
    user::ports::{HasherRepository, UserRepository},
};

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> AuthService
    for Service<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
where
    RE: RestaurantRepository,
    RV: ReviewRepository,
    CM: CommentRepository,
    QA: QuestionRepository,
    AL: ActivityLogRepository,
    FV: FavoriteRepository,
    RP: ReportRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    MC: RestaurantMetadataClient,
    IC: InspectionClient,
    TV: TokenVerifier,
    RS: RandomSource,
    MN: ModerationNotifier,
    CZ: CovidZoneClient,
    SF: SafetyFeedbackRepository,
{
    async fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.token_verifier.verify(&token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                debug!(user_id = %claims.sub, "token subject has no user");
                CoreError::Unauthorized
            })?;

        Ok(Identity::from(user))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        authentication::entities::JwtClaim, common::test_support::Mocks, user::entities::User,
    };

    fn claims(sub: Uuid) -> JwtClaim {
        JwtClaim {
            sub,
            preferred_username: None,
            exp: i64::MAX,
            iat: None,
        }
    }

    #[tokio::test]
    async fn test_identity_reflects_staff_flag() {
        let mut user = User::new("mod".to_string(), "mod@example.com".to_string(), "h".to_string());
        user.is_staff = true;
        let user_id = user.id;

        let mut mocks = Mocks::default();
        mocks
            .token_verifier
            .expect_verify()
            .returning(move |_| Ok(claims(user_id)));
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });

        let identity = mocks
            .into_service()
            .authorize_request("token".to_string())
            .await
            .unwrap();

        assert_eq!(identity.user_id, user_id);
        assert!(identity.is_staff());
    }

    #[tokio::test]
    async fn test_unknown_subject_is_unauthorized() {
        let mut mocks = Mocks::default();
        mocks
            .token_verifier
            .expect_verify()
            .returning(|_| Ok(claims(Uuid::new_v4())));
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = mocks
            .into_service()
            .authorize_request("token".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected_before_lookup() {
        let mut mocks = Mocks::default();
        mocks
            .token_verifier
            .expect_verify()
            .returning(|_| Err(CoreError::Unauthorized));
        mocks.user_repository.expect_get_by_id().never();

        let err = mocks
            .into_service()
            .authorize_request("garbage".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Unauthorized);
    }
}
