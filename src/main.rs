use std::path::PathBuf;
use anyhow::{Result, anyhow};
use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use starfield_terminal::config::AppConfig;
use starfield_terminal::constants::*;
use starfield_terminal::engine::Engine;
use starfield_terminal::ffmpeg::Ffmpeg;
use starfield_terminal::konami::KonamiCode;
use starfield_terminal::starfield::engine::Starfield;
use starfield_terminal::surface::RaylibSurface;
use starfield_terminal::typing::engine::TypingEffect;

/// Parallax starfield behind a typewriter terminal prompt.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with window, typing and phrase settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for a reproducible starfield and typing rhythm
    #[arg(long)]
    seed: Option<u64>,

    /// Record a 1920x1080 video to this file (requires ffmpeg)
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Stop recording after this many seconds
    #[arg(short, long, requires = "record")]
    duration: Option<f32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(fps) = args.fps {
        config.window.fps = fps;
    }

    print_banner();

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Recording renders at a fixed size whatever the window does
    let recording = args.record.is_some();
    let (canvas_width, canvas_height) = if recording {
        (RENDER_WIDTH, RENDER_HEIGHT)
    } else {
        (rl.get_screen_width(), rl.get_screen_height())
    };

    let mut starfield = Starfield::new(canvas_width as f32, canvas_height as f32, StdRng::from_rng(&mut rng));
    let mut typing = TypingEffect::new(config.phrases.clone(), config.typing.clone(), StdRng::from_rng(&mut rng));
    if let Some(typing) = typing.as_mut() {
        typing.resize(canvas_width as f32, canvas_height as f32);
    }
    let mut konami = KonamiCode::new();

    let mut framebuffer = load_framebuffer(&mut rl, &thread, canvas_width, canvas_height)?;
    let font = rl.get_font_default();

    let mut ffmpeg = match &args.record {
        Some(path) => {
            info!("Recording to {}", path.display());
            Some(Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, path)?)
        }
        None => None,
    };
    let mut recorded = 0.0;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if recording { FRAME_TIME } else { rl.get_frame_time() };

        // --- Host events ---

        if rl.is_window_resized() && !recording {
            let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
            starfield.resize(width as f32, height as f32);
            if let Some(typing) = typing.as_mut() {
                typing.resize(width as f32, height as f32);
            }
            framebuffer = load_framebuffer(&mut rl, &thread, width, height)?;
        }

        let mouse_delta = rl.get_mouse_delta();
        if mouse_delta.x != 0.0 || mouse_delta.y != 0.0 {
            // The framebuffer is stretched over the whole window
            let bounds = Rectangle::new(0.0, 0.0, rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            starfield.on_pointer_move(rl.get_mouse_position(), bounds);
        }

        while let Some(key) = rl.get_key_pressed() {
            if konami.push(key) {
                info!("Konami code activated!");
                if let Some(typing) = typing.as_mut() {
                    typing.pulse();
                }
            }
        }

        // --- Update Logic ---

        starfield.update(dt);
        if let Some(typing) = typing.as_mut() {
            typing.update(dt);
        }

        // --- Render each frame into the framebuffer ---

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut surface = RaylibSurface::new(&mut tmd, &font);
            starfield.draw(&mut surface);
            if let Some(typing) = &typing {
                typing.draw(&mut surface);
            }
        });

        // Draw inverted copy of framebuffer to the screen
        {
            let mut d = rl.begin_drawing(&thread);

            let sw = d.get_screen_width() as f32;
            let sh = d.get_screen_height() as f32;

            d.clear_background(Color::BLACK);
            d.draw_texture_pro(
                &framebuffer,
                Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
                Rectangle::new(0.0, 0.0, sw, sh),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        if let Some(recorder) = ffmpeg.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("Failed to read back framebuffer: {}", e))?;

            if let Err(e) = recorder.write(&image) {
                error!("Recording stopped: {}", e);
                break;
            }

            recorded += dt;
            if args.duration.is_some_and(|limit| recorded >= limit) {
                info!("Recorded {:.1}s, done", recorded);
                break;
            }
        }
    }

    // Close stdin pipe and wait for ffmpeg to finish
    drop(ffmpeg);
    Ok(())
}

fn load_framebuffer(rl: &mut RaylibHandle, thread: &RaylibThread, width: i32, height: i32) -> Result<RenderTexture2D> {
    // A minimized window reports 0x0, keep at least one pixel
    rl.load_render_texture(thread, width.max(1) as u32, height.max(1) as u32)
        .map_err(|e| anyhow!("Failed to create {}x{} render texture: {}", width, height, e))
}

fn print_banner() {
    info!("Starfield Terminal :: {}", env!("CARGO_PKG_VERSION"));
    info!("Welcome to my terminal!");
    info!("> Move the mouse to steer the stars.");
    info!("> Try the Konami code for a surprise...");
}
