pub mod activity_log_repository;
