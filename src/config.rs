//! Tunable thresholds, timings and literals for every controller.
//!
//! DESIGN
//! ======
//! All numbers the behaviour layer reacts to live here instead of being
//! scattered through handlers. The page may override any subset by embedding
//! a JSON object in `<script id="site-config" type="application/json">`;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_PROBE_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const DEFAULT_NAVBAR_FALLBACK_HEIGHT_PX: f64 = 70.0;
pub const DEFAULT_BACK_TO_TOP_PX: f64 = 300.0;
pub const DEFAULT_PARALLAX_BASE_SPEED: f64 = 0.1;
pub const DEFAULT_PARALLAX_SPEED_STEP: f64 = 0.05;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@example.com";
pub const DEFAULT_PENDING_LABEL: &str = "Sending...";
pub const DEFAULT_COUNTER_STEPS: u32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Millisecond timings for deferred effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Simulated delay between a valid submit and the mail handoff.
    pub submit_delay_ms: u32,
    /// Interval between counter animation ticks.
    pub counter_tick_ms: u32,
    /// Delay before a freshly inserted toast slides in.
    pub toast_enter_ms: u32,
    /// How long a toast stays up before dismissing itself.
    pub toast_lifetime_ms: u32,
    /// Slide-out duration before a dismissed toast is removed.
    pub toast_exit_ms: u32,
    /// How long the body colour transition stays applied after a theme change.
    pub theme_transition_ms: u32,
    /// Duration of the toggle button's press pulse.
    pub toggle_pulse_ms: u32,
    /// Delay before the first hero element starts its entrance.
    pub hero_stagger_base_ms: u32,
    /// Additional delay per hero element.
    pub hero_stagger_step_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            counter_tick_ms: 30,
            toast_enter_ms: 100,
            toast_lifetime_ms: 5000,
            toast_exit_ms: 300,
            theme_transition_ms: 300,
            toggle_pulse_ms: 100,
            hero_stagger_base_ms: 500,
            hero_stagger_step_ms: 150,
        }
    }
}

/// Page-wide behaviour configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Distance below the viewport top that decides the "current" section.
    pub probe_offset_px: f64,
    /// Scroll offset past which the navigation bar switches to its scrolled style.
    pub navbar_scrolled_px: f64,
    /// Navigation bar height assumed when the bar element is missing.
    pub navbar_fallback_height_px: f64,
    /// Scroll offset past which the back-to-top control is shown.
    pub back_to_top_px: f64,
    /// Parallax speed of the first hero shape.
    pub parallax_base_speed: f64,
    /// Parallax speed added for each subsequent hero shape.
    pub parallax_speed_step: f64,
    /// Local storage key holding the explicit theme choice.
    pub theme_storage_key: String,
    /// Recipient of the generated `mailto:` link.
    pub contact_address: String,
    /// Submit button label while a submission is pending.
    pub pending_label: String,
    /// Number of increments a stat counter takes to reach its target.
    pub counter_steps: u32,
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            probe_offset_px: DEFAULT_PROBE_OFFSET_PX,
            navbar_scrolled_px: DEFAULT_NAVBAR_SCROLLED_PX,
            navbar_fallback_height_px: DEFAULT_NAVBAR_FALLBACK_HEIGHT_PX,
            back_to_top_px: DEFAULT_BACK_TO_TOP_PX,
            parallax_base_speed: DEFAULT_PARALLAX_BASE_SPEED,
            parallax_speed_step: DEFAULT_PARALLAX_SPEED_STEP,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            contact_address: DEFAULT_CONTACT_ADDRESS.to_owned(),
            pending_label: DEFAULT_PENDING_LABEL.to_owned(),
            counter_steps: DEFAULT_COUNTER_STEPS,
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a controller misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("probe_offset_px", self.probe_offset_px),
            ("navbar_scrolled_px", self.navbar_scrolled_px),
            ("navbar_fallback_height_px", self.navbar_fallback_height_px),
            ("back_to_top_px", self.back_to_top_px),
            ("parallax_base_speed", self.parallax_base_speed),
            ("parallax_speed_step", self.parallax_speed_step),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, reason: "must be a finite, non-negative number" });
            }
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "theme_storage_key", reason: "must not be empty" });
        }
        if !self.contact_address.contains('@') {
            return Err(ConfigError::Invalid { field: "contact_address", reason: "must be an email address" });
        }
        if self.counter_steps == 0 {
            return Err(ConfigError::Invalid { field: "counter_steps", reason: "must be at least 1" });
        }
        if self.timings.counter_tick_ms == 0 {
            return Err(ConfigError::Invalid { field: "timings.counter_tick_ms", reason: "must be at least 1" });
        }
        Ok(())
    }
}
