pub mod engine;
pub mod pulse;
pub mod state;
