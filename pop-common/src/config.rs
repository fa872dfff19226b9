//! Roster configuration loading and roster file resolution
//!
//! A roster file is TOML with one `[[racer]]` table per contestant, tagged by
//! `kind`. See [`RacerSpec`] for the accepted fields.
//!
//! Roster file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`POP_RACE_ROSTER`)
//! 3. User config file (`<config dir>/pop-race/roster.toml`)
//! 4. Built-in roster (fallback)

use crate::bird::{FlappyBird, Penguin, SwiftBird, UnladenSwallow};
use crate::cheat::{validate_boost, Cheat};
use crate::roster::{Contestant, Roster};
use crate::vehicle::Motorcycle;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming a roster file
pub const ROSTER_ENV_VAR: &str = "POP_RACE_ROSTER";

/// Directory under the platform config dir holding the user roster
pub const CONFIG_DIR_NAME: &str = "pop-race";

/// File name of the user roster
pub const ROSTER_FILE_NAME: &str = "roster.toml";

/// One contestant in a roster file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RacerSpec {
    FlappyBird {
        name: String,
        flappy_amplitude: f64,
        flappy_frequency: f64,
    },
    SwiftBird {
        version: f64,
        /// Boosts applied in order right after construction
        #[serde(default)]
        boosts: Vec<f64>,
    },
    Penguin {
        name: String,
    },
    UnladenSwallow {
        species: UnladenSwallow,
    },
    Motorcycle {
        name: String,
    },
}

impl RacerSpec {
    /// Check field values without building the contestant
    pub fn validate(&self) -> Result<()> {
        match self {
            RacerSpec::FlappyBird {
                name,
                flappy_amplitude,
                flappy_frequency,
            } => {
                require_name("flappy_bird", name)?;
                require_finite("flappy_amplitude", *flappy_amplitude)?;
                require_finite("flappy_frequency", *flappy_frequency)
            }
            RacerSpec::SwiftBird { version, boosts } => {
                require_finite("version", *version)?;
                if *version < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "swift_bird version must not be negative, got {}",
                        version
                    )));
                }
                boosts.iter().try_for_each(|power| validate_boost(*power))
            }
            RacerSpec::Penguin { name } => require_name("penguin", name),
            RacerSpec::UnladenSwallow { .. } => Ok(()),
            RacerSpec::Motorcycle { name } => require_name("motorcycle", name),
        }
    }

    /// Build the contestant described by this entry
    pub fn build(&self) -> Result<Contestant> {
        self.validate()?;

        let contestant = match self {
            RacerSpec::FlappyBird {
                name,
                flappy_amplitude,
                flappy_frequency,
            } => Contestant::Flappy(FlappyBird::new(
                name.clone(),
                *flappy_amplitude,
                *flappy_frequency,
            )),
            RacerSpec::SwiftBird { version, boosts } => {
                let mut bird = SwiftBird::new(*version);
                for power in boosts {
                    bird.boost(*power);
                }
                Contestant::Swift(bird)
            }
            RacerSpec::Penguin { name } => Contestant::Penguin(Penguin::new(name.clone())),
            RacerSpec::UnladenSwallow { species } => Contestant::Swallow(*species),
            RacerSpec::Motorcycle { name } => Contestant::Motorcycle(Motorcycle::new(name.clone())),
        };

        Ok(contestant)
    }
}

fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Parsed roster file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    #[serde(default, rename = "racer")]
    pub racers: Vec<RacerSpec>,
}

impl RosterConfig {
    /// Parse a roster from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a roster file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read roster {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            "Loaded {} racer(s) from {}",
            config.racers.len(),
            path.display()
        );
        Ok(config)
    }

    /// The classic seven-racer line-up
    pub fn builtin() -> Self {
        Self {
            racers: vec![
                RacerSpec::UnladenSwallow {
                    species: UnladenSwallow::African,
                },
                RacerSpec::UnladenSwallow {
                    species: UnladenSwallow::European,
                },
                RacerSpec::UnladenSwallow {
                    species: UnladenSwallow::Unknown,
                },
                RacerSpec::Penguin {
                    name: "King Penguin".to_string(),
                },
                RacerSpec::SwiftBird {
                    version: 5.1,
                    boosts: Vec::new(),
                },
                RacerSpec::FlappyBird {
                    name: "Felipe".to_string(),
                    flappy_amplitude: 3.0,
                    flappy_frequency: 20.0,
                },
                RacerSpec::Motorcycle {
                    name: "Giacomo".to_string(),
                },
            ],
        }
    }

    /// Validate every entry and build the roster in file order
    pub fn build(&self) -> Result<Roster> {
        let contestants = self
            .racers
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build().map_err(|e| match e {
                    Error::InvalidInput(msg) => {
                        Error::InvalidInput(format!("racer #{}: {}", index + 1, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Roster::new(contestants))
    }
}

/// Where a roster came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Path given on the command line
    CommandLine(PathBuf),
    /// Path taken from [`ROSTER_ENV_VAR`]
    Environment(PathBuf),
    /// Existing roster file in the user config directory
    UserConfig(PathBuf),
    /// No file; use [`RosterConfig::builtin`]
    Builtin,
}

impl RosterSource {
    /// Load the roster this source points at
    ///
    /// Explicitly named files (command line, environment) must exist.
    pub fn load(&self) -> Result<RosterConfig> {
        match self {
            RosterSource::CommandLine(path)
            | RosterSource::Environment(path)
            | RosterSource::UserConfig(path) => RosterConfig::load(path),
            RosterSource::Builtin => Ok(RosterConfig::builtin()),
        }
    }
}

/// Resolves which roster to race
#[derive(Debug, Clone)]
pub struct RosterResolver {
    env_var_name: String,
    config_dir: Option<PathBuf>,
}

impl Default for RosterResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterResolver {
    /// Resolver using [`ROSTER_ENV_VAR`] and the platform config directory
    pub fn new() -> Self {
        Self {
            env_var_name: ROSTER_ENV_VAR.to_string(),
            config_dir: dirs::config_dir(),
        }
    }

    /// Override the base config directory searched for a user roster
    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(config_dir.into());
        self
    }

    /// Override the environment variable consulted
    pub fn with_env_var(mut self, env_var_name: impl Into<String>) -> Self {
        self.env_var_name = env_var_name.into();
        self
    }

    /// Path of the user roster file, whether or not it exists
    pub fn user_roster_path(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(ROSTER_FILE_NAME))
    }

    /// Pick the roster source by priority
    pub fn resolve(&self, cli_arg: Option<&Path>) -> RosterSource {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            info!("Using roster from command line: {}", path.display());
            return RosterSource::CommandLine(path.to_path_buf());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(&self.env_var_name) {
            if !path.trim().is_empty() {
                info!("Using roster from {}: {}", self.env_var_name, path);
                return RosterSource::Environment(PathBuf::from(path));
            }
        }

        // Priority 3: User config file
        match self.user_roster_path() {
            Some(path) if path.is_file() => {
                info!("Using user roster: {}", path.display());
                return RosterSource::UserConfig(path);
            }
            Some(path) => {
                warn!("No user roster at {}", path.display());
            }
            None => {
                warn!("Could not determine config directory");
            }
        }

        // Priority 4: Built-in roster
        info!("Using built-in roster");
        RosterSource::Builtin
    }
}
