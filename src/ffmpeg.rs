use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use anyhow::{Context, Result};
use log::{debug, error};
use raylib::prelude::*;

/// Pipes raw RGBA frames into an ffmpeg child encoding H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("Failed to start ffmpeg process")?;
        let stdin = process.stdin.take().context("Failed to open ffmpeg stdin")?;

        debug!("ffmpeg recording {}x{} @ {} fps into {}", width, height, fps, output.display());
        Ok(Ffmpeg { process, stdin: Some(stdin) })
    }

    pub fn write(&mut self, image: &Image) -> io::Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "ffmpeg stdin closed"))?;

        let width = image.width().max(0) as usize;
        let height = image.height().max(0) as usize;
        let row_len = width * 4; // 4 bytes per pixel (RGBA)

        // SAFETY: a loaded RGBA image owns width * height * 4 bytes at `data`
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        // Render textures are stored bottom-up, ffmpeg wants rows top-down
        for row in pixels.chunks_exact(row_len.max(1)).rev() {
            stdin.write_all(row)?;
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Close stdin pipe and wait for ffmpeg to finish
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if !status.success() => error!("ffmpeg exited with {}", status),
            Err(e) => error!("Failed to wait for ffmpeg process: {}", e),
            _ => {}
        }
    }
}
