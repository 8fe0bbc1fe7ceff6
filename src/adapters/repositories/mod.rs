mod file_session_repository;
mod memory_session_repository;

pub use file_session_repository::FileSessionRepository;
pub use memory_session_repository::InMemorySessionRepository;
