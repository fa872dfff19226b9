//! Race results
//!
//! A [`RaceReport`] captures the speeds of the racers that took part and the
//! winning speed, ready to print or serialize.

use crate::racer::{fastest, top_speed, Racer};
use crate::roster::Contestant;
use crate::score::{RacingScore, Score};
use crate::Result;
use serde::Serialize;
use std::fmt;

/// One racer's line in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceEntry {
    pub name: String,
    pub speed: f64,
    /// Bird description, absent for non-birds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Outcome of a race
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceReport {
    pub racers: Vec<RaceEntry>,
    pub top_speed: f64,
    /// Name of the fastest racer, absent for an empty race
    pub fastest: Option<String>,
    pub score: RacingScore,
}

impl RaceReport {
    /// Race the given contestants
    pub fn from_contestants(contestants: &[Contestant]) -> Self {
        let racers = contestants
            .iter()
            .map(|contestant| RaceEntry {
                name: contestant.name().into_owned(),
                speed: contestant.speed(),
                description: contestant.as_bird().map(|bird| bird.description()),
            })
            .collect();

        let top = top_speed(contestants);
        Self {
            racers,
            top_speed: top,
            fastest: fastest(contestants).map(|winner| winner.name().into_owned()),
            score: RacingScore::from_speed(top),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .racers
            .iter()
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.racers {
            write!(
                f,
                "{:<width$}  {:>10.1}",
                entry.name,
                entry.speed,
                width = width
            )?;
            if let Some(description) = entry.description {
                write!(f, "  {}", description)?;
            }
            writeln!(f)?;
        }

        match &self.fastest {
            Some(name) => writeln!(f, "Top speed: {:.1} ({})", self.top_speed, name)?,
            None => writeln!(f, "Top speed: {:.1} (no racers)", self.top_speed)?,
        }
        write!(f, "Score: {}", self.score.value())
    }
}
