use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{FinDashError, Result};
use crate::utils::{app_data_dir, config_file_in};

const TMP_SUFFIX: &str = "tmp";

/// User-editable settings shown on the settings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display currency code; amounts are shown with its symbol.
    pub currency: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            profile: Profile::default(),
            preferences: Preferences::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            phone: "555-123-4567".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub two_factor_auth: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            two_factor_auth: true,
            dark_mode: false,
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::set`].
    pub const KEYS: [&'static str; 8] = [
        "currency",
        "profile.name",
        "profile.email",
        "profile.phone",
        "notifications.email",
        "notifications.sms",
        "security.two_factor",
        "appearance.dark_mode",
    ];

    /// Updates a single setting addressed by its dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency" => self.currency = value.trim().to_uppercase(),
            "profile.name" => self.profile.name = value.trim().to_string(),
            "profile.email" => self.profile.email = value.trim().to_string(),
            "profile.phone" => self.profile.phone = value.trim().to_string(),
            "notifications.email" => self.preferences.email_notifications = parse_toggle(value)?,
            "notifications.sms" => self.preferences.sms_notifications = parse_toggle(value)?,
            "security.two_factor" => self.preferences.two_factor_auth = parse_toggle(value)?,
            "appearance.dark_mode" => self.preferences.dark_mode = parse_toggle(value)?,
            other => {
                return Err(FinDashError::Config(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Flattened `(key, value)` pairs in [`Config::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let toggle = |on: bool| if on { "on" } else { "off" }.to_string();
        vec![
            ("currency", self.currency.clone()),
            ("profile.name", self.profile.name.clone()),
            ("profile.email", self.profile.email.clone()),
            ("profile.phone", self.profile.phone.clone()),
            ("notifications.email", toggle(self.preferences.email_notifications)),
            ("notifications.sms", toggle(self.preferences.sms_notifications)),
            ("security.two_factor", toggle(self.preferences.two_factor_auth)),
            ("appearance.dark_mode", toggle(self.preferences.dark_mode)),
        ]
    }
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(FinDashError::Config(format!(
            "expected on/off, got `{}`",
            other
        ))),
    }
}

/// Loads and stores [`Config`] as pretty JSON under the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
