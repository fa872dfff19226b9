//! Bird capabilities and the concrete bird racers
//!
//! A [`Bird`] has a name and may or may not fly. Its human-readable
//! description is derived from [`Bird::can_fly`], so implementors only
//! override it when they need a different wording.
//!
//! Birds that fly also implement [`Flyable`], which exposes an airspeed
//! velocity. The unladen swallow is the odd one out: its `Unknown` case has
//! no airspeed, so the enum exposes a fallible accessor and a separate
//! [`SwallowSpecies`] type holds only the cases that can fly.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Description of a bird that can fly
pub const CAN_FLY: &str = "I can fly";

/// Description of a bird that cannot fly
pub const CANNOT_FLY: &str = "I can't fly :(";

/// A named bird
pub trait Bird {
    /// Display name of the bird
    fn name(&self) -> Cow<'_, str>;

    /// Whether the bird can fly
    ///
    /// Defaults to `false`; flying birds override it.
    fn can_fly(&self) -> bool {
        false
    }

    /// Human-readable description derived from [`Bird::can_fly`]
    fn description(&self) -> &'static str {
        if self.can_fly() {
            CAN_FLY
        } else {
            CANNOT_FLY
        }
    }
}

/// Something with an airspeed velocity
pub trait Flyable {
    fn airspeed_velocity(&self) -> f64;
}

/// A bird that flies by flapping
///
/// Airspeed is `3 × amplitude × frequency`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlappyBird {
    pub name: String,
    pub flappy_amplitude: f64,
    pub flappy_frequency: f64,
}

impl FlappyBird {
    pub fn new(name: impl Into<String>, flappy_amplitude: f64, flappy_frequency: f64) -> Self {
        Self {
            name: name.into(),
            flappy_amplitude,
            flappy_frequency,
        }
    }
}

impl Bird for FlappyBird {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn can_fly(&self) -> bool {
        true
    }
}

impl Flyable for FlappyBird {
    fn airspeed_velocity(&self) -> f64 {
        3.0 * self.flappy_amplitude * self.flappy_frequency
    }
}

/// A flightless bird
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    pub name: String,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bird for Penguin {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }
}

/// Default multiplier applied to a swift bird's version
pub const DEFAULT_SPEED_FACTOR: f64 = 1000.0;

/// A versioned bird whose airspeed is `version × speed_factor`
///
/// The speed factor starts at [`DEFAULT_SPEED_FACTOR`] and can only be raised
/// through [`crate::Cheat::boost`].
#[derive(Debug, Clone, PartialEq)]
pub struct SwiftBird {
    pub version: f64,
    pub(crate) speed_factor: f64,
}

impl SwiftBird {
    pub fn new(version: f64) -> Self {
        Self {
            version,
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }

    /// Current speed factor, including any boosts applied so far
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }
}

impl Bird for SwiftBird {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Swift {}", self.version))
    }

    fn can_fly(&self) -> bool {
        true
    }
}

impl Flyable for SwiftBird {
    fn airspeed_velocity(&self) -> f64 {
        self.version * self.speed_factor
    }
}

/// The flying kinds of unladen swallow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwallowSpecies {
    African,
    European,
}

impl Flyable for SwallowSpecies {
    fn airspeed_velocity(&self) -> f64 {
        match self {
            SwallowSpecies::African => 10.0,
            SwallowSpecies::European => 9.0,
        }
    }
}

/// An unladen swallow, possibly of unknown kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnladenSwallow {
    African,
    European,
    Unknown,
}

impl UnladenSwallow {
    /// The flying species, or `None` for an unknown swallow
    pub fn species(&self) -> Option<SwallowSpecies> {
        match self {
            UnladenSwallow::African => Some(SwallowSpecies::African),
            UnladenSwallow::European => Some(SwallowSpecies::European),
            UnladenSwallow::Unknown => None,
        }
    }

    /// Airspeed of the swallow
    ///
    /// Returns [`Error::Grounded`] for an unknown swallow.
    pub fn airspeed_velocity(&self) -> Result<f64> {
        self.species()
            .map(|species| species.airspeed_velocity())
            .ok_or_else(|| Error::Grounded(self.name().into_owned()))
    }

    pub fn all_variants() -> &'static [UnladenSwallow] {
        &[
            UnladenSwallow::African,
            UnladenSwallow::European,
            UnladenSwallow::Unknown,
        ]
    }
}

impl Bird for UnladenSwallow {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            UnladenSwallow::African => "African",
            UnladenSwallow::European => "European",
            UnladenSwallow::Unknown => "Unknown",
        })
    }

    fn can_fly(&self) -> bool {
        *self != UnladenSwallow::Unknown
    }
}

macro_rules! display_as_description {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.description())
                }
            }
        )+
    };
}

display_as_description!(FlappyBird, Penguin, SwiftBird, UnladenSwallow);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flappy_bird_airspeed() {
        let felipe = FlappyBird::new("Felipe", 3.0, 20.0);
        assert_eq!(felipe.airspeed_velocity(), 180.0);
        assert_eq!(felipe.name(), "Felipe");
    }

    #[test]
    fn test_swift_bird_name_and_airspeed() {
        let bird = SwiftBird::new(5.0);
        assert_eq!(bird.name(), "Swift 5");
        assert_eq!(bird.speed_factor(), DEFAULT_SPEED_FACTOR);
        assert_eq!(bird.airspeed_velocity(), 5000.0);

        assert_eq!(SwiftBird::new(5.1).name(), "Swift 5.1");
    }

    #[test]
    fn test_can_fly() {
        assert!(FlappyBird::new("Felipe", 1.0, 1.0).can_fly());
        assert!(SwiftBird::new(1.0).can_fly());
        assert!(!Penguin::new("King Penguin").can_fly());
        assert!(UnladenSwallow::African.can_fly());
        assert!(UnladenSwallow::European.can_fly());
        assert!(!UnladenSwallow::Unknown.can_fly());
    }

    #[test]
    fn test_description_follows_can_fly() {
        assert_eq!(Penguin::new("King Penguin").description(), CANNOT_FLY);
        assert_eq!(UnladenSwallow::Unknown.description(), CANNOT_FLY);
        assert_eq!(UnladenSwallow::European.description(), CAN_FLY);
        assert_eq!(format!("{}", SwiftBird::new(5.0)), "I can fly");
        assert_eq!(format!("{}", Penguin::new("Pingu")), "I can't fly :(");
    }

    #[test]
    fn test_swallow_airspeed() {
        assert_eq!(UnladenSwallow::African.airspeed_velocity().unwrap(), 10.0);
        assert_eq!(UnladenSwallow::European.airspeed_velocity().unwrap(), 9.0);
    }

    #[test]
    fn test_unknown_swallow_is_grounded() {
        let err = UnladenSwallow::Unknown.airspeed_velocity().unwrap_err();
        assert!(matches!(err, Error::Grounded(ref name) if name == "Unknown"));
        assert!(err.to_string().contains("bridge of death"));
        assert_eq!(UnladenSwallow::Unknown.species(), None);
    }

    #[test]
    fn test_species_matches_swallow() {
        for swallow in UnladenSwallow::all_variants() {
            match swallow.species() {
                Some(species) => {
                    assert!(swallow.can_fly());
                    assert_eq!(
                        species.airspeed_velocity(),
                        swallow.airspeed_velocity().unwrap()
                    );
                }
                None => assert!(!swallow.can_fly()),
            }
        }
    }
}
