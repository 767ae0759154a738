pub mod safety_feedback_repository;
