//! One tracked body.

use hecs::Entity;

use farsight_core::enums::Iff;

/// A body on the radar, with the state sensors derive for it.
///
/// Dynamic contacts always own a trail. Static landmark contacts have
/// none. Dropping the contact drops its trail.
#[derive(Debug)]
pub struct RadarContact<T> {
    pub(crate) body: Entity,
    pub(crate) distance: f64,
    pub(crate) iff: Iff,
    pub(crate) trail: Option<T>,
    pub(crate) fresh: bool,
}

impl<T> RadarContact<T> {
    /// A contact for `body` with no trail, unclassified and zero distance.
    pub fn new(body: Entity) -> Self {
        Self {
            body,
            distance: 0.0,
            iff: Iff::Unknown,
            trail: None,
            fresh: true,
        }
    }

    pub(crate) fn with_trail(body: Entity, iff: Iff, trail: T) -> Self {
        Self {
            iff,
            trail: Some(trail),
            ..Self::new(body)
        }
    }

    pub fn body(&self) -> Entity {
        self.body
    }

    /// Last measured range from the owner (meters).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn iff(&self) -> Iff {
        self.iff
    }

    pub fn trail(&self) -> Option<&T> {
        self.trail.as_ref()
    }

    /// Whether the body was seen since the last sweep.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }
}
