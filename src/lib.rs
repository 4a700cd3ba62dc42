pub mod config;
pub mod constants;
pub mod engine;
pub mod ffmpeg;
pub mod konami;
pub mod starfield;
pub mod surface;
pub mod timer;
pub mod typing;
