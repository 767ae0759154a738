use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, instrument};

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
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
    user::{
        entities::{User, UserPreferences, UserProfile},
        password::{PasswordContext, validate_password},
        ports::{HasherRepository, UserRepository, UserService},
        value_objects::{RegisterUserInput, UpdatePreferencesInput},
    },
};

static CATEGORY_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid category alias regex"));

fn normalize_categories(categories: Vec<String>) -> Result<Vec<String>, CoreError> {
    let mut normalized: Vec<String> = Vec::with_capacity(categories.len());

    for category in categories {
        let category = category.trim().to_lowercase();
        if !CATEGORY_ALIAS.is_match(&category) {
            return Err(CoreError::InputError(format!(
                "invalid category alias: {category:?}"
            )));
        }
        if !normalized.contains(&category) {
            normalized.push(category);
        }
    }

    Ok(normalized)
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> UserService
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
    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        let username = input.username.trim().to_string();
        let email = input.email.trim().to_lowercase();

        if username.is_empty() {
            return Err(CoreError::InputError("username is required".to_string()));
        }
        if !email.contains('@') {
            return Err(CoreError::InputError("a valid email is required".to_string()));
        }

        let context = PasswordContext {
            username: &username,
            email: &email,
        };
        validate_password(&input.password, &context).map_err(|violations| {
            let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
            CoreError::InputError(messages.join(" "))
        })?;

        if self
            .user_repository
            .exists(username.clone(), email.clone())
            .await?
        {
            return Err(CoreError::AlreadyExists(
                "username or email already taken".to_string(),
            ));
        }

        let password_hash = self.hasher_repository.hash_password(&input.password)?;
        let user = User::new(username, email, password_hash);
        let profile = UserProfile::new(user.id, input.profile);

        let user = self
            .user_repository
            .create_user_with_profile(user, profile)
            .await?;

        info!(user_id = %user.id, "user registered");

        Ok(user)
    }

    async fn get_preferences(&self, identity: Identity) -> Result<UserPreferences, CoreError> {
        let categories = self.user_repository.get_preferences(identity.id()).await?;

        Ok(UserPreferences {
            user_id: identity.id(),
            categories,
        })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn update_preferences(
        &self,
        identity: Identity,
        input: UpdatePreferencesInput,
    ) -> Result<UserPreferences, CoreError> {
        let categories = normalize_categories(input.categories)?;

        let categories = self
            .user_repository
            .replace_preferences(identity.id(), categories)
            .await?;

        Ok(UserPreferences {
            user_id: identity.id(),
            categories,
        })
    }
}
