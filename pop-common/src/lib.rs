//! # POP Common Library
//!
//! Shared code for the POP race tools including:
//! - Capability traits (Bird, Flyable, Racer, Cheat, Score)
//! - Concrete racers (birds and the motorcycle)
//! - Top-speed selection over heterogeneous racers
//! - Roster configuration loading
//! - Race reports

pub mod bird;
pub mod cheat;
pub mod config;
pub mod error;
pub mod racer;
pub mod report;
pub mod roster;
pub mod score;
pub mod vehicle;

pub use bird::{Bird, FlappyBird, Flyable, Penguin, SwallowSpecies, SwiftBird, UnladenSwallow};
pub use cheat::Cheat;
pub use error::{Error, Result};
pub use racer::{fastest, top_speed, Racer, TopSpeed};
pub use roster::{Contestant, Roster};
pub use score::{RacingScore, Score};
pub use vehicle::Motorcycle;
