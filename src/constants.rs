use raylib::prelude::Color;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the recorded framebuffer
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the recorded framebuffer
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame when recording (seconds)

pub const NUM_STARS: usize = 200;             // Pool size, never changes after init
pub const MAX_DEPTH: f32 = 2000.0;            // Farthest z, also the perspective focal length
pub const MIN_DEPTH: f32 = 1.0;               // Stars closer than this respawn
pub const DEPTH_STEP: f32 = 5.0;              // z decrease per frame, multiplied by star speed
pub const SPAWN_MARGIN: f32 = 50.0;           // Off-screen margin before a star respawns (px)

pub const MAX_OFFSET: f32 = 100.0;            // Maximum parallax offset (px)
pub const PARALLAX_EASING: f32 = 0.05;        // Fraction of the remaining offset covered per frame
pub const PARALLAX_DEPTH_FACTOR: f32 = 0.3;   // How much of the offset the nearest stars receive

pub const GREEN_THRESHOLD: f64 = 0.7;         // Classifier residue above this is green
pub const TRAIL_SPEED: f32 = 0.5;             // Stars faster than this draw a trail
pub const TRAIL_LENGTH: f32 = 30.0;           // Trail length at scale 0 (px)

pub const TERMINAL_GREEN: Color = Color::new(0, 255, 65, 255);

pub const PROMPT: &str = "> ";
pub const PROMPT_FONT_SIZE: f32 = 32.0;
pub const PROMPT_MARGIN: f32 = 40.0;          // Distance of the prompt line from the bottom-left corner (px)
pub const CURSOR_BLINK: f32 = 0.53;           // Prompt cursor half period (seconds)
pub const PULSE_DURATION: f32 = 0.5;          // One easter egg pulse (seconds)
pub const PULSE_COUNT: u32 = 3;
pub const PULSE_SCALE: f32 = 0.02;            // Extra scale at the top of a pulse
