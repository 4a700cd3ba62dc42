pub mod camera;
pub mod engine;
pub mod star;
