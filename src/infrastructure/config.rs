use std::{path::PathBuf, str::FromStr};

use color_eyre::eyre::Result;
use config::ConfigError;
use ratatui::style::Color;
use serde::Deserialize;

use crate::{
    core::state::hero::{HeroProfile, HeroState},
    domain::{CatalogError, MismatchPolicy, SkillCatalog, SkillEntry, ThemeColors, ThemeMode},
    model::role_rotation::{RoleRotation, RoleTimings},
    presentation::config::keybindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "default_theatrical_color")]
    pub theatrical_color: String,
    #[serde(default = "default_tech_color")]
    pub tech_color: String,
}

fn default_theatrical_color() -> String {
    ThemeColors::default().theatrical
}

fn default_tech_color() -> String {
    ThemeColors::default().tech
}

impl ThemeConfig {
    /// Accent colors, with any unparsable entry replaced by its default.
    ///
    /// Called once at startup, so a bad value is reported once rather than
    /// on every frame.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors {
            theatrical: valid_color(&self.theatrical_color, default_theatrical_color()),
            tech: valid_color(&self.tech_color, default_tech_color()),
        }
    }
}

fn valid_color(color: &str, fallback: String) -> String {
    if Color::from_str(color).is_ok() {
        color.to_owned()
    } else {
        log::warn!("invalid theme color {color:?}, using {fallback}");
        fallback
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            theatrical_color: default_theatrical_color(),
            tech_color: default_tech_color(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub enter_ms: u64,
    pub dwell_ms: u64,
    pub exit_ms: u64,
}

impl HeroConfig {
    pub fn timings(&self) -> RoleTimings {
        RoleTimings::from_millis(self.enter_ms, self.dwell_ms, self.exit_ms)
    }

    pub fn state(&self) -> HeroState {
        let profile = HeroProfile {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
        };
        HeroState::new(profile, self.roles.clone(), self.timings())
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        let profile = HeroProfile::default();
        let timings = RoleTimings::default();
        Self {
            name: profile.name,
            tagline: profile.tagline,
            roles: RoleRotation::default().roles().to_vec(),
            enter_ms: timings.enter.as_millis() as u64,
            dwell_ms: timings.dwell.as_millis() as u64,
            exit_ms: timings.exit.as_millis() as u64,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    /// Overrides the build's mismatch policy when set
    #[serde(default)]
    pub strict_labels: Option<bool>,
}

impl Config {
    /// Load user configuration from the config directory, over the embedded
    /// defaults. Every file is optional.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg.merge_defaults(default_config))
    }

    /// The configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill what the user left out from `defaults`
    pub fn merge_defaults(mut self, defaults: Config) -> Self {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }

        if self.skills.is_empty() {
            self.skills = defaults.skills;
        }

        self
    }

    pub fn policy(&self) -> MismatchPolicy {
        MismatchPolicy::from_override(self.strict_labels)
    }

    pub fn catalog(&self) -> Result<SkillCatalog, CatalogError> {
        SkillCatalog::from_entries(&self.skills, self.policy())
    }
}
