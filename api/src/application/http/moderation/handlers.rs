pub mod moderate_comment;
pub mod moderate_review;
pub mod report_comment;
pub mod report_review;
