//! Race rosters
//!
//! A [`Roster`] is an ordered line-up of [`Contestant`]s. Contestants are a
//! closed set of racer kinds, so the roster can name them and boost the
//! ones that support it while still racing them through [`Racer`].

use crate::bird::{Bird, FlappyBird, Penguin, SwiftBird, UnladenSwallow};
use crate::cheat::{validate_boost, Cheat};
use crate::racer::{fastest, top_speed, Racer};
use crate::vehicle::Motorcycle;
use crate::{Error, Result};
use std::borrow::Cow;
use std::ops::Range;
use tracing::debug;

/// One entry in a roster
#[derive(Debug, Clone, PartialEq)]
pub enum Contestant {
    Flappy(FlappyBird),
    Swift(SwiftBird),
    Penguin(Penguin),
    Swallow(UnladenSwallow),
    Motorcycle(Motorcycle),
}

impl Contestant {
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Contestant::Flappy(bird) => bird.name(),
            Contestant::Swift(bird) => bird.name(),
            Contestant::Penguin(bird) => bird.name(),
            Contestant::Swallow(bird) => bird.name(),
            Contestant::Motorcycle(bike) => Cow::Borrowed(bike.name.as_str()),
        }
    }

    /// The contestant as a bird, if it is one
    pub fn as_bird(&self) -> Option<&dyn Bird> {
        match self {
            Contestant::Flappy(bird) => Some(bird),
            Contestant::Swift(bird) => Some(bird),
            Contestant::Penguin(bird) => Some(bird),
            Contestant::Swallow(bird) => Some(bird),
            Contestant::Motorcycle(_) => None,
        }
    }

    /// The contestant as something boostable, if it supports boosting
    pub fn as_cheat_mut(&mut self) -> Option<&mut dyn Cheat> {
        match self {
            Contestant::Swift(bird) => Some(bird),
            _ => None,
        }
    }

    /// Move the contestant into a boxed trait object
    pub fn into_racer(self) -> Box<dyn Racer> {
        match self {
            Contestant::Flappy(bird) => Box::new(bird),
            Contestant::Swift(bird) => Box::new(bird),
            Contestant::Penguin(bird) => Box::new(bird),
            Contestant::Swallow(bird) => Box::new(bird),
            Contestant::Motorcycle(bike) => Box::new(bike),
        }
    }
}

impl Racer for Contestant {
    fn speed(&self) -> f64 {
        match self {
            Contestant::Flappy(bird) => bird.speed(),
            Contestant::Swift(bird) => bird.speed(),
            Contestant::Penguin(bird) => bird.speed(),
            Contestant::Swallow(bird) => bird.speed(),
            Contestant::Motorcycle(bike) => bike.speed(),
        }
    }
}

/// Ordered line-up of contestants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    contestants: Vec<Contestant>,
}

impl Roster {
    pub fn new(contestants: Vec<Contestant>) -> Self {
        Self { contestants }
    }

    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    /// Boost every contestant that supports it; returns how many were boosted
    ///
    /// Negative or non-finite powers are rejected before anything changes.
    pub fn boost_all(&mut self, power: f64) -> Result<usize> {
        validate_boost(power)?;

        let mut boosted = 0;
        for contestant in &mut self.contestants {
            if let Some(cheat) = contestant.as_cheat_mut() {
                cheat.boost(power);
                boosted += 1;
            }
        }
        debug!(power, boosted, "Applied boost to roster");
        Ok(boosted)
    }

    /// Contiguous sub-range of the roster
    ///
    /// Fails when the range is inverted or runs past the end.
    pub fn slice(&self, range: Range<usize>) -> Result<&[Contestant]> {
        if range.start > range.end || range.end > self.contestants.len() {
            return Err(Error::InvalidInput(format!(
                "range {}..{} is outside roster of {} racer(s)",
                range.start,
                range.end,
                self.contestants.len()
            )));
        }
        Ok(&self.contestants[range])
    }

    pub fn top_speed(&self) -> f64 {
        top_speed(&self.contestants)
    }

    pub fn fastest(&self) -> Option<&Contestant> {
        fastest(&self.contestants)
    }

    /// Move every contestant into boxed trait objects, keeping order
    pub fn into_racers(self) -> Vec<Box<dyn Racer>> {
        self.contestants
            .into_iter()
            .map(Contestant::into_racer)
            .collect()
    }
}

/// Parse a range such as `1..4`, `1..=3`, `2..` or `..3`
///
/// Open ends are resolved against `len`. Bounds are checked by
/// [`Roster::slice`], not here.
pub fn parse_range(text: &str, len: usize) -> Result<Range<usize>> {
    let invalid = || Error::InvalidInput(format!("invalid range '{}'", text));

    let text = text.trim();
    let (start, end, inclusive) = if let Some((start, end)) = text.split_once("..=") {
        (start, end, true)
    } else if let Some((start, end)) = text.split_once("..") {
        (start, end, false)
    } else {
        return Err(invalid());
    };

    let start = match start.trim() {
        "" => 0,
        s => s.parse::<usize>().map_err(|_| invalid())?,
    };

    let end = match (end.trim(), inclusive) {
        ("", false) => len,
        ("", true) => return Err(invalid()),
        (e, false) => e.parse::<usize>().map_err(|_| invalid())?,
        (e, true) => e
            .parse::<usize>()
            .map_err(|_| invalid())?
            .checked_add(1)
            .ok_or_else(invalid)?,
    };

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::{CANNOT_FLY, CAN_FLY};
    use crate::config::RosterConfig;

    fn builtin() -> Roster {
        RosterConfig::builtin().build().unwrap()
    }

    #[test]
    fn test_builtin_top_speed() {
        let roster = builtin();
        assert_eq!(roster.len(), 7);
        // Swift 5.1 leads: 5.1 × 1000
        assert!((roster.top_speed() - 5100.0).abs() < 1e-9);
        assert_eq!(roster.fastest().unwrap().name(), "Swift 5.1");
    }

    #[test]
    fn test_builtin_sub_range() {
        let roster = builtin();
        let middle = roster.slice(1..4).unwrap();
        assert_eq!(top_speed(middle), 42.0);
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let roster = builtin();
        assert!(matches!(roster.slice(3..9), Err(Error::InvalidInput(_))));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 5..2;
        assert!(matches!(
            roster.slice(inverted),
            Err(Error::InvalidInput(_))
        ));
        assert!(roster.slice(7..7).unwrap().is_empty());
    }

    #[test]
    fn test_boost_all_only_boosts_swift_birds() {
        let mut roster = Roster::new(vec![
            Contestant::Swift(SwiftBird::new(5.0)),
            Contestant::Penguin(Penguin::new("King Penguin")),
            Contestant::Motorcycle(Motorcycle::new("Giacomo")),
        ]);
        assert_eq!(roster.boost_all(3.0).unwrap(), 1);
        assert!(matches!(
            roster.boost_all(f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(roster.top_speed(), 5015.0);
        assert_eq!(roster.contestants()[1].speed(), 42.0);
        assert_eq!(roster.contestants()[2].speed(), 200.0);
    }

    #[test]
    fn test_negative_boost_leaves_roster_unchanged() {
        let mut roster = Roster::new(vec![
            Contestant::Swift(SwiftBird::new(5.0)),
            Contestant::Swift(SwiftBird::new(2.0)),
        ]);
        match roster.boost_all(-2000.0) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("negative"), "got {}", msg),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert_eq!(roster.contestants()[0].speed(), 5000.0);
        assert_eq!(roster.contestants()[1].speed(), 2000.0);

        // Zero is a no-op boost, not an error
        assert_eq!(roster.boost_all(0.0).unwrap(), 2);
        assert_eq!(roster.top_speed(), 5000.0);
    }

    #[test]
    fn test_as_bird_descriptions() {
        let roster = builtin();
        let descriptions: Vec<Option<&str>> = roster
            .contestants()
            .iter()
            .map(|c| c.as_bird().map(|b| b.description()))
            .collect();
        assert_eq!(
            descriptions,
            vec![
                Some(CAN_FLY),
                Some(CAN_FLY),
                Some(CANNOT_FLY),
                Some(CANNOT_FLY),
                Some(CAN_FLY),
                Some(CAN_FLY),
                None,
            ]
        );
    }

    #[test]
    fn test_into_racers_keeps_speeds() {
        let roster = builtin();
        let expected: Vec<f64> = roster.contestants().iter().map(Racer::speed).collect();
        let racers = roster.into_racers();
        let speeds: Vec<f64> = racers.iter().map(|r| r.speed()).collect();
        assert_eq!(speeds, expected);
    }

    #[test]
    fn test_parse_range_forms() {
        assert_eq!(parse_range("1..4", 7).unwrap(), 1..4);
        assert_eq!(parse_range("1..=3", 7).unwrap(), 1..4);
        assert_eq!(parse_range("2..", 7).unwrap(), 2..7);
        assert_eq!(parse_range("..3", 7).unwrap(), 0..3);
        assert_eq!(parse_range("..", 7).unwrap(), 0..7);
        assert_eq!(parse_range(" 0 ..= 0 ", 7).unwrap(), 0..1);
    }

    #[test]
    fn test_parse_range_invalid() {
        for text in ["", "3", "a..b", "1..=", "-1..2", "1...3"] {
            assert!(
                matches!(parse_range(text, 7), Err(Error::InvalidInput(_))),
                "'{}' should be rejected",
                text
            );
        }
    }
}
