// Brainstorm - multi-persona idea generation server
// Library exports

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod ideas;
pub mod personas;
pub mod providers;
pub mod realtime;
pub mod scoring;
pub mod server;
pub mod store;
