pub mod favorite_repository;
