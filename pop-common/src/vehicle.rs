//! Ground vehicles
//!
//! `Motorcycle` knows nothing about racing; it gains [`crate::Racer`] in the
//! racer module.

/// Speed every motorcycle is built with
pub const MOTORCYCLE_SPEED: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    pub name: String,
    pub speed: f64,
}

impl Motorcycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speed: MOTORCYCLE_SPEED,
        }
    }
}
