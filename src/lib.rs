// Relay server modules
pub mod auth;
pub mod gateway;
pub mod models;
pub mod routes;

// Model client adapter
pub mod llm;
