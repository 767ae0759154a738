pub mod question_repository;
