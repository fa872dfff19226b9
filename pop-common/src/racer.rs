//! Racers and top-speed selection
//!
//! Speed is the only thing racers care about. Any type can join a race by
//! implementing [`Racer`], including types defined elsewhere that know
//! nothing about racing, such as [`Motorcycle`].
//!
//! The selector works on anything iterable whose items are racers: owned
//! vectors of boxed trait objects, slices, sub-slices or iterators of
//! references.
//!
//! ```
//! use pop_common::{Penguin, Racer, TopSpeed, UnladenSwallow};
//!
//! let racers: Vec<Box<dyn Racer>> = vec![
//!     Box::new(UnladenSwallow::African),
//!     Box::new(Penguin::new("King Penguin")),
//! ];
//! assert_eq!(racers.iter().top_speed(), 42.0);
//! assert_eq!(racers[..1].top_speed(), 10.0);
//! ```

use crate::bird::{FlappyBird, Flyable, Penguin, SwiftBird, UnladenSwallow};
use crate::vehicle::Motorcycle;
use tracing::trace;

/// Speed a penguin runs at
pub const PENGUIN_SPEED: f64 = 42.0;

/// Anything that can race
pub trait Racer {
    fn speed(&self) -> f64;
}

impl<R: Racer + ?Sized> Racer for &R {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for Box<R> {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl Racer for FlappyBird {
    fn speed(&self) -> f64 {
        self.airspeed_velocity()
    }
}

impl Racer for SwiftBird {
    fn speed(&self) -> f64 {
        self.airspeed_velocity()
    }
}

impl Racer for Penguin {
    fn speed(&self) -> f64 {
        PENGUIN_SPEED
    }
}

impl Racer for UnladenSwallow {
    /// Airspeed of the species, or 0.0 for a swallow that cannot fly
    fn speed(&self) -> f64 {
        self.species().map_or(0.0, |species| species.airspeed_velocity())
    }
}

impl Racer for Motorcycle {
    fn speed(&self) -> f64 {
        self.speed
    }
}

/// Highest speed among `racers`, or `0.0` when there are none
///
/// Single linear scan; racers are only read.
pub fn top_speed<I>(racers: I) -> f64
where
    I: IntoIterator,
    I::Item: Racer,
{
    let mut count = 0usize;
    let mut top: Option<f64> = None;

    for racer in racers {
        count += 1;
        let speed = racer.speed();
        if top.map_or(true, |current| current < speed) {
            top = Some(speed);
        }
    }

    let top = top.unwrap_or(0.0);
    trace!(racers = count, top_speed = top, "Selected top speed");
    top
}

/// The racer with the highest speed, or `None` when there are none
///
/// On ties the first racer reaching the top speed wins.
pub fn fastest<I>(racers: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Racer,
{
    let mut best: Option<(f64, I::Item)> = None;

    for racer in racers {
        let speed = racer.speed();
        if best.as_ref().map_or(true, |(current, _)| *current < speed) {
            best = Some((speed, racer));
        }
    }

    best.map(|(_, racer)| racer)
}

/// Method form of [`top_speed`] for any sequence of racers
pub trait TopSpeed {
    fn top_speed(self) -> f64;
}

impl<I> TopSpeed for I
where
    I: IntoIterator,
    I::Item: Racer,
{
    fn top_speed(self) -> f64 {
        top_speed(self)
    }
}
