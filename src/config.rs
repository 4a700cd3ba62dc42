use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;
use crate::constants::*;

/// Runtime settings, read from an optional TOML file. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub typing: TypingConfig,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

/// Typewriter timings, all in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub typing_speed_ms: u64,
    pub deleting_speed_ms: u64,
    pub pause_after_complete_ms: u64,
    pub pause_before_delete_ms: u64,
    pub start_delay_ms: u64,
    /// Upper bound of the random delay added to each keystroke, 0 disables it.
    pub jitter_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            typing: TypingConfig::default(),
            phrases: [
                "Game Developer since 1996",
                "Software Architect",
                "Cyber Security Expert",
                "Demo Scene Programmer",
                "Creator of Piranha (DOS)",
                "Full-Stack Developer",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield Terminal".to_string(),
            width: RENDER_WIDTH / 2,
            height: RENDER_HEIGHT / 2,
            fps: FPS,
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 100,
            deleting_speed_ms: 50,
            pause_after_complete_ms: 2000,
            pause_before_delete_ms: 1500,
            start_delay_ms: 500,
            jitter_ms: 50,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_timings() {
        let config = AppConfig::default();
        assert_eq!(config.typing.typing_speed_ms, 100);
        assert_eq!(config.typing.deleting_speed_ms, 50);
        assert_eq!(config.typing.pause_after_complete_ms, 2000);
        assert_eq!(config.typing.pause_before_delete_ms, 1500);
        assert_eq!(config.typing.start_delay_ms, 500);
        assert_eq!(config.phrases.len(), 6);
        assert_eq!(config.phrases[0], "Game Developer since 1996");
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.window.fps, FPS);
        assert_eq!(config.phrases.len(), 6);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::parse(
            r#"
            phrases = ["Rustacean", "Ferris fan"]

            [typing]
            typing_speed_ms = 80
            jitter_ms = 0

            [window]
            title = "Stars"
            "#,
        )
        .unwrap();

        assert_eq!(config.phrases, vec!["Rustacean", "Ferris fan"]);
        assert_eq!(config.typing.typing_speed_ms, 80);
        assert_eq!(config.typing.jitter_ms, 0);
        assert_eq!(config.typing.deleting_speed_ms, 50);
        assert_eq!(config.window.title, "Stars");
        assert_eq!(config.window.width, RENDER_WIDTH / 2);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(AppConfig::parse("[typing]\ntyping_speed_ms = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.toml"));
    }
}
