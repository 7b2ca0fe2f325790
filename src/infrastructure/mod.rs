// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod document_mapper;
pub mod http_response;
pub mod memory_repository;
pub mod mongo_repository;
