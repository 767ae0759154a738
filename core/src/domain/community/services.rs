use std::collections::{HashMap, HashSet};

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    activity::ports::ActivityLogRepository,
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    community::{
        entities::{Answer, AnswerView, Faq, Question, QuestionView},
        ports::{CommunityService, QuestionRepository},
        value_objects::{
            ANSWER_PREVIEW, ANSWERS_PAGE_SIZE, AnswerPage, AnswerQuestionInput, AskQuestionInput,
            QUESTIONS_PAGE_SIZE, QuestionPage, page_offset,
        },
    },
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
        entities::AuthorSummary,
        ports::{HasherRepository, UserRepository},
    },
};

fn author_of(authors: &HashMap<Uuid, AuthorSummary>, user_id: Uuid) -> AuthorSummary {
    authors
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| AuthorSummary::unknown(user_id))
}

/// Attaches authors, the newest `ANSWER_PREVIEW` answers and the answer count
/// to each question.
pub fn assemble_question_views(
    questions: Vec<Question>,
    answers: Vec<Answer>,
    answer_counts: &HashMap<Uuid, u64>,
    authors: &HashMap<Uuid, AuthorSummary>,
) -> Vec<QuestionView> {
    let mut answers_by_question: HashMap<Uuid, Vec<Answer>> = HashMap::new();
    for answer in answers {
        answers_by_question
            .entry(answer.question_id)
            .or_default()
            .push(answer);
    }

    questions
        .into_iter()
        .map(|question| {
            let mut answers = answers_by_question.remove(&question.id).unwrap_or_default();
            answers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            answers.truncate(ANSWER_PREVIEW as usize);

            QuestionView {
                author: author_of(authors, question.user_id),
                answers: answers
                    .into_iter()
                    .map(|answer| AnswerView {
                        author: author_of(authors, answer.user_id),
                        answer,
                    })
                    .collect(),
                total_answers_count: answer_counts.get(&question.id).copied().unwrap_or(0),
                question,
            }
        })
        .collect()
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
    Service<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF>
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
    /// One window of a restaurant's questions with their answer previews, plus
    /// the restaurant's total question count.
    pub(crate) async fn question_views(
        &self,
        restaurant_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<QuestionView>, u64), CoreError> {
        let total = self
            .question_repository
            .count_questions(restaurant_id)
            .await?;
        let questions = self
            .question_repository
            .list_questions(restaurant_id, offset, limit)
            .await?;

        if questions.is_empty() {
            return Ok((Vec::new(), total));
        }

        let question_ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
        let answers = self
            .question_repository
            .latest_answers(question_ids.clone(), ANSWER_PREVIEW)
            .await?;
        let counts = self.question_repository.count_answers(question_ids).await?;

        let author_ids: HashSet<Uuid> = questions
            .iter()
            .map(|q| q.user_id)
            .chain(answers.iter().map(|a| a.user_id))
            .collect();
        let authors = self.user_repository.get_authors(author_ids).await?;

        Ok((
            assemble_question_views(questions, answers, &counts, &authors),
            total,
        ))
    }
}

impl<RE, RV, CM, QA, AL, FV, RP, U, H, HC, MC, IC, TV, RS, MN, CZ, SF> CommunityService
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
    async fn list_questions(&self, restaurant_id: Uuid, page: u64) -> Result<QuestionPage, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let (items, total) = self
            .question_views(
                restaurant_id,
                page_offset(page, QUESTIONS_PAGE_SIZE),
                QUESTIONS_PAGE_SIZE,
            )
            .await?;

        Ok(QuestionPage {
            items,
            page: page.max(1),
            page_size: QUESTIONS_PAGE_SIZE,
            total,
        })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn ask_question(
        &self,
        identity: Identity,
        restaurant_id: Uuid,
        input: AskQuestionInput,
    ) -> Result<Question, CoreError> {
        let text = input.question.trim();
        if text.is_empty() {
            return Err(CoreError::InputError("question is required".to_string()));
        }

        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let question = Question::new(restaurant_id, identity.id(), text.to_string());
        self.question_repository.create_question(question).await
    }

    async fn list_answers(&self, question_id: Uuid, page: u64) -> Result<AnswerPage, CoreError> {
        self.question_repository
            .get_question(question_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let answers = self
            .question_repository
            .list_answers(
                question_id,
                page_offset(page, ANSWERS_PAGE_SIZE),
                ANSWERS_PAGE_SIZE,
            )
            .await?;
        let total = self
            .question_repository
            .count_answers(vec![question_id])
            .await?
            .get(&question_id)
            .copied()
            .unwrap_or(0);

        let author_ids: HashSet<Uuid> = answers.iter().map(|a| a.user_id).collect();
        let authors = self.user_repository.get_authors(author_ids).await?;

        let items = answers
            .into_iter()
            .map(|answer| AnswerView {
                author: author_of(&authors, answer.user_id),
                answer,
            })
            .collect();

        Ok(AnswerPage {
            items,
            page: page.max(1),
            page_size: ANSWERS_PAGE_SIZE,
            total,
        })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn answer_question(
        &self,
        identity: Identity,
        question_id: Uuid,
        input: AnswerQuestionInput,
    ) -> Result<Answer, CoreError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(CoreError::InputError("answer is required".to_string()));
        }

        self.question_repository
            .get_question(question_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let answer = Answer::new(question_id, identity.id(), text.to_string());
        self.question_repository.create_answer(answer).await
    }

    async fn list_faqs(&self) -> Result<Vec<Faq>, CoreError> {
        self.question_repository.list_faqs().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::common::test_support::{Mocks, identity, sample_restaurant};

    fn answer_at(question_id: Uuid, minutes_ago: i64) -> Answer {
        let mut answer = Answer::new(question_id, Uuid::new_v4(), format!("{minutes_ago}m ago"));
        answer.created_at = Utc::now() - Duration::minutes(minutes_ago);
        answer
    }

    #[test]
    fn test_question_views_keep_two_newest_answers() {
        let question = Question::new(Uuid::new_v4(), Uuid::new_v4(), "Step-free entry?".to_string());
        let answers = vec![
            answer_at(question.id, 30),
            answer_at(question.id, 5),
            answer_at(question.id, 10),
        ];
        let counts = HashMap::from([(question.id, 7)]);

        let views = assemble_question_views(vec![question], answers, &counts, &HashMap::new());

        assert_eq!(views.len(), 1);
        let texts: Vec<&str> = views[0].answers.iter().map(|a| a.answer.text.as_str()).collect();
        assert_eq!(texts, vec!["5m ago", "10m ago"]);
        assert_eq!(views[0].total_answers_count, 7);
    }

    #[tokio::test]
    async fn test_list_questions_pages_by_ten() {
        let restaurant = sample_restaurant();
        let restaurant_id = restaurant.id;
        let question = Question::new(restaurant_id, Uuid::new_v4(), "Is there a ramp?".to_string());
        let question_id = question.id;

        let mut mocks = Mocks::default();
        mocks.restaurant_repository.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        mocks
            .question_repository
            .expect_count_questions()
            .returning(|_| Box::pin(async { Ok(11) }));
        mocks
            .question_repository
            .expect_list_questions()
            .withf(|_, offset, limit| *offset == 10 && *limit == 10)
            .returning(move |_, _, _| {
                let question = question.clone();
                Box::pin(async move { Ok(vec![question]) })
            });
        mocks
            .question_repository
            .expect_latest_answers()
            .withf(|_, per_question| *per_question == 2)
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));
        mocks
            .question_repository
            .expect_count_answers()
            .returning(|_| Box::pin(async { Ok(HashMap::new()) }));
        mocks
            .user_repository
            .expect_get_authors()
            .returning(|_| Box::pin(async { Ok(HashMap::new()) }));

        let page = mocks
            .into_service()
            .list_questions(restaurant_id, 2)
            .await
            .unwrap();

        assert_eq!(page.total, 11);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].question.id, question_id);
        assert_eq!(page.items[0].total_answers_count, 0);
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let mut mocks = Mocks::default();
        mocks.question_repository.expect_create_question().never();

        let err = mocks
            .into_service()
            .ask_question(
                identity(false),
                Uuid::new_v4(),
                AskQuestionInput {
                    question: "   ".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InputError(_)));
    }

    #[tokio::test]
    async fn test_list_faqs_returns_stored_order() {
        let faq = |position: i32, question: &str| Faq {
            id: Uuid::new_v4(),
            question: question.to_string(),
            answer: "See the profile page.".to_string(),
            position,
            created_at: Utc::now(),
        };
        let stored = vec![faq(1, "How are grades computed?"), faq(2, "Who can review?")];
        let expected = stored.clone();

        let mut mocks = Mocks::default();
        mocks
            .question_repository
            .expect_list_faqs()
            .times(1)
            .returning(move || {
                let stored = stored.clone();
                Box::pin(async move { Ok(stored) })
            });

        let faqs = mocks.into_service().list_faqs().await.unwrap();

        assert_eq!(faqs, expected);
    }

    #[tokio::test]
    async fn test_answer_unknown_question() {
        let mut mocks = Mocks::default();
        mocks
            .question_repository
            .expect_get_question()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = mocks
            .into_service()
            .answer_question(
                identity(false),
                Uuid::new_v4(),
                AnswerQuestionInput {
                    text: "Yes".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
