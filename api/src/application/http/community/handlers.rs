pub mod answer_question;
pub mod ask_question;
pub mod list_answers;
pub mod list_faqs;
pub mod list_questions;
