// Application layer - Use cases and repository ports
pub mod reading_repository;
pub mod sensor_service;
