use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the working roster file
    pub roster: String,
    /// Room label used when `export` is called without --room
    #[serde(default = "default_room")]
    pub default_room: String,
}

fn default_room() -> String {
    String::new()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: Self::roster_file().to_string_lossy().to_string(),
            default_room: default_room(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("examboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".examboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("examboard.conf")
    }

    /// Return the full path of the default working roster file
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("roster.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Initialize configuration and the working roster file
    pub fn init_all(custom_roster: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // roster path: user provided or default
        let roster_path = if let Some(name) = custom_roster {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::roster_file()
        };

        let config = Config {
            roster: roster_path.to_string_lossy().to_string(),
            default_room: default_room(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty roster file if not exists
        if !roster_path.exists() {
            fs::write(&roster_path, "{\n  \"examInfos\": []\n}")?;
        }

        println!("✅ Roster file: {:?}", roster_path);

        Ok(())
    }
}
