use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement, Value,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        community::{
            entities::{Answer, Faq, Question},
            ports::QuestionRepository,
        },
    },
    entity::{faqs, restaurant_answers, restaurant_questions},
};

#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
    pub db: DatabaseConnection,
}

impl PostgresQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `$first, $first+1, ...` for `count` bind parameters.
fn placeholders(first: usize, count: usize) -> String {
    (first..first + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl QuestionRepository for PostgresQuestionRepository {
    async fn create_question(&self, question: Question) -> Result<Question, CoreError> {
        let active_model = restaurant_questions::ActiveModel {
            id: Set(question.id),
            restaurant_id: Set(question.restaurant_id),
            user_id: Set(question.user_id),
            question: Set(question.question.clone()),
            created_at: Set(question.created_at.fixed_offset()),
        };

        let created = restaurant_questions::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create question: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Question::from(created))
    }

    async fn get_question(&self, question_id: Uuid) -> Result<Option<Question>, CoreError> {
        let question = restaurant_questions::Entity::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get question: {}", e);
                CoreError::InternalServerError
            })?
            .map(Question::from);

        Ok(question)
    }

    async fn list_questions(
        &self,
        restaurant_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Question>, CoreError> {
        let questions = restaurant_questions::Entity::find()
            .filter(restaurant_questions::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(restaurant_questions::Column::CreatedAt)
            .order_by_desc(restaurant_questions::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list questions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(questions.into_iter().map(Question::from).collect())
    }

    async fn count_questions(&self, restaurant_id: Uuid) -> Result<u64, CoreError> {
        restaurant_questions::Entity::find()
            .filter(restaurant_questions::Column::RestaurantId.eq(restaurant_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count questions: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn create_answer(&self, answer: Answer) -> Result<Answer, CoreError> {
        let active_model = restaurant_answers::ActiveModel {
            id: Set(answer.id),
            question_id: Set(answer.question_id),
            user_id: Set(answer.user_id),
            text: Set(answer.text.clone()),
            created_at: Set(answer.created_at.fixed_offset()),
        };

        let created = restaurant_answers::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create answer: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Answer::from(created))
    }

    async fn list_answers(
        &self,
        question_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Answer>, CoreError> {
        let answers = restaurant_answers::Entity::find()
            .filter(restaurant_answers::Column::QuestionId.eq(question_id))
            .order_by_desc(restaurant_answers::Column::CreatedAt)
            .order_by_desc(restaurant_answers::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list answers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(answers.into_iter().map(Answer::from).collect())
    }

    async fn latest_answers(
        &self,
        question_ids: Vec<Uuid>,
        per_question: u64,
    ) -> Result<Vec<Answer>, CoreError> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM (
              SELECT
                a.*,
                ROW_NUMBER() OVER (PARTITION BY a.question_id ORDER BY a.created_at DESC, a.id DESC) AS answer_rank
              FROM restaurant_answers a
              WHERE a.question_id IN ({})
            ) ranked
            WHERE answer_rank <= $1
            ORDER BY question_id, created_at DESC
            "#,
            placeholders(2, question_ids.len())
        );

        let mut values: Vec<Value> = vec![(per_question as i64).into()];
        values.extend(question_ids.into_iter().map(Value::from));

        let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);

        let answers = restaurant_answers::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load latest answers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(answers.into_iter().map(Answer::from).collect())
    }

    async fn count_answers(&self, question_ids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, CoreError> {
        if question_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = restaurant_answers::Entity::find()
            .select_only()
            .column(restaurant_answers::Column::QuestionId)
            .column_as(restaurant_answers::Column::Id.count(), "answers")
            .filter(restaurant_answers::Column::QuestionId.is_in(question_ids))
            .group_by(restaurant_answers::Column::QuestionId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count answers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|(question_id, answers)| (question_id, answers.max(0) as u64))
            .collect())
    }

    async fn list_faqs(&self) -> Result<Vec<Faq>, CoreError> {
        let faqs = faqs::Entity::find()
            .order_by_asc(faqs::Column::Position)
            .order_by_asc(faqs::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list FAQs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(faqs.into_iter().map(Faq::from).collect())
    }
}
