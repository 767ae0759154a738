pub mod report_repository;
