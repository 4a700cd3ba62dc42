use rand::Rng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use crate::config::TypingConfig;
use crate::constants::*;
use crate::engine::Engine;
use crate::surface::Surface;
use crate::timer::Timeout;
use crate::typing::pulse::Pulse;
use crate::typing::state::TypingState;

/// Typewriter prompt cycling through a list of phrases forever.
pub struct TypingEffect {
    phrases: Vec<String>,
    config: TypingConfig,

    phrase_index: usize,
    char_index: usize,
    state: TypingState,
    text: String,

    timer: Timeout,
    rng: StdRng,

    anchor: Vector2,
    cursor_timer: f32,
    pulse: Option<Pulse>,
}

impl TypingEffect {
    /// `None` when there is nothing to type.
    pub fn new(phrases: Vec<String>, config: TypingConfig, rng: StdRng) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }

        let timer = Timeout::after(config.start_delay_ms as f32 / 1000.0);
        Some(Self {
            phrases,
            config,
            phrase_index: 0,
            char_index: 0,
            state: TypingState::Typing,
            text: String::new(),
            timer,
            rng,
            anchor: Vector2::new(PROMPT_MARGIN, PROMPT_MARGIN),
            cursor_timer: 0.0,
            pulse: None,
        })
    }

    /// Types or erases one character and returns the delay until the next
    /// step, in milliseconds.
    pub fn step(&mut self) -> f32 {
        let jitter = self.jitter();
        let deleting = matches!(self.state, TypingState::Deleting | TypingState::PausedBeforeDelete);

        let phrase = &self.phrases[self.phrase_index];
        let length = phrase.chars().count();

        self.char_index = if deleting {
            self.char_index.saturating_sub(1)
        } else {
            (self.char_index + 1).min(length)
        };
        self.text = prefix(phrase, self.char_index).to_string();

        if !deleting && self.char_index == length {
            self.state = TypingState::PausedBeforeDelete;
            self.config.pause_before_delete_ms as f32
        } else if deleting && self.char_index == 0 {
            self.state = TypingState::PausedAfterComplete;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.config.pause_after_complete_ms as f32
        } else if deleting {
            self.state = TypingState::Deleting;
            self.config.deleting_speed_ms as f32 + jitter
        } else {
            self.state = TypingState::Typing;
            self.config.typing_speed_ms as f32 + jitter
        }
    }

    /// Start the easter egg pulse, restarting it if one is running.
    pub fn pulse(&mut self) {
        self.pulse = Some(Pulse::new());
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> TypingState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    pub(crate) fn char_index(&self) -> usize {
        self.char_index
    }

    #[cfg(test)]
    pub(crate) fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    fn jitter(&mut self) -> f32 {
        if self.config.jitter_ms == 0 {
            return 0.0;
        }
        self.rng.random::<f32>() * self.config.jitter_ms as f32
    }

    fn cursor_visible(&self) -> bool {
        (self.cursor_timer / CURSOR_BLINK) as u32 % 2 == 0
    }
}

/// First `count` characters of `text`.
fn prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

impl Engine for TypingEffect {
    fn resize(&mut self, _width: f32, height: f32) {
        self.anchor = Vector2::new(PROMPT_MARGIN, height - PROMPT_MARGIN - PROMPT_FONT_SIZE);
    }

    fn update(&mut self, dt: f32) {
        self.cursor_timer = (self.cursor_timer + dt) % (CURSOR_BLINK * 2.0);

        if let Some(pulse) = self.pulse.as_mut() {
            if !pulse.update(dt) {
                self.pulse = None;
            }
        }

        self.timer.tick(dt);
        while self.timer.is_due() {
            let delay = self.step();
            self.timer.rearm(delay / 1000.0);
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        let scale = self.pulse.map_or(1.0, |pulse| pulse.scale());
        let cursor = if self.cursor_visible() { "_" } else { "" };
        let line = format!("{}{}{}", PROMPT, self.text, cursor);

        surface.text(&line, self.anchor, PROMPT_FONT_SIZE * scale, TERMINAL_GREEN);
    }
}
