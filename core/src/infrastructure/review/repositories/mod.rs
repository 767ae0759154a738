pub mod comment_repository;
pub mod review_repository;
