pub mod session_repository;
