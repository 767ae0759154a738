pub mod create_comment;
pub mod create_review;
pub mod delete_comment;
pub mod delete_review;
pub mod toggle_like;
pub mod update_review;
