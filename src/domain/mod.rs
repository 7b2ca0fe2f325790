// Domain layer - Pure sensor logic, no I/O
pub mod generator;
pub mod reading;
pub mod rules;
