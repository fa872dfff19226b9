//! Boosting racers

use crate::bird::SwiftBird;
use crate::{Error, Result};
use tracing::debug;

/// Check a boost power before it is applied
///
/// Boosts only ever raise speed, so the power must be finite and not
/// negative. Zero is accepted and changes nothing.
pub fn validate_boost(power: f64) -> Result<()> {
    if !power.is_finite() {
        return Err(Error::InvalidInput(format!(
            "boost must be a finite number, got {}",
            power
        )));
    }
    if power < 0.0 {
        return Err(Error::InvalidInput(format!(
            "boost must not be negative, got {}",
            power
        )));
    }
    Ok(())
}

/// A racer whose speed can be permanently raised
pub trait Cheat {
    /// Raise future speed by `power`; boosts accumulate
    ///
    /// Callers validate `power` with [`validate_boost`] first.
    fn boost(&mut self, power: f64);
}

impl Cheat for SwiftBird {
    fn boost(&mut self, power: f64) {
        self.speed_factor += power;
        debug!(
            version = self.version,
            power,
            speed_factor = self.speed_factor,
            "Boosted swift bird"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flyable, Racer};

    #[test]
    fn test_boost_accumulates() {
        let mut swift_bird = SwiftBird::new(5.0);
        assert_eq!(swift_bird.airspeed_velocity(), 5000.0);

        swift_bird.boost(3.0);
        assert_eq!(swift_bird.speed_factor(), 1003.0);
        assert_eq!(swift_bird.airspeed_velocity(), 5015.0);

        swift_bird.boost(3.0);
        assert_eq!(swift_bird.speed_factor(), 1006.0);
        assert_eq!(swift_bird.airspeed_velocity(), 5030.0);
        assert_eq!(swift_bird.speed(), 5030.0);
    }

    #[test]
    fn test_zero_boost_is_noop() {
        let mut swift_bird = SwiftBird::new(2.0);
        swift_bird.boost(0.0);
        assert_eq!(swift_bird.speed(), 2000.0);
    }

    #[test]
    fn test_boost_through_trait_object() {
        let mut swift_bird = SwiftBird::new(1.0);
        {
            let cheater: &mut dyn Cheat = &mut swift_bird;
            cheater.boost(10.0);
        }
        assert_eq!(swift_bird.speed(), 1010.0);
    }

    #[test]
    fn test_validate_boost() {
        assert!(validate_boost(0.0).is_ok());
        assert!(validate_boost(3.0).is_ok());

        let err = validate_boost(-2000.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("negative")));

        for power in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(validate_boost(power), Err(Error::InvalidInput(_))),
                "{} should be rejected",
                power
            );
        }
    }
}
