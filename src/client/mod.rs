// Client side - HTTP API client and dashboard view state
pub mod api_client;
pub mod dashboard;
