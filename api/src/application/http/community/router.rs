use super::handlers::answer_question::{__path_answer_question, answer_question};
use super::handlers::ask_question::{__path_ask_question, ask_question};
use super::handlers::list_answers::{__path_list_answers, list_answers};
use super::handlers::list_faqs::{__path_list_faqs, list_faqs};
use super::handlers::list_questions::{__path_list_questions, list_questions};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_questions, ask_question, list_answers, answer_question, list_faqs))]
pub struct CommunityApiDoc;

pub fn community_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/restaurants/{{restaurant_id}}/questions"),
            get(list_questions).post(ask_question),
        )
        .route(
            &format!("{root_path}/questions/{{question_id}}/answers"),
            get(list_answers).post(answer_question),
        )
        .route(&format!("{root_path}/faqs"), get(list_faqs))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
