//! Per-ship sensors for Farsight.
//!
//! A [`Sensors`] instance belongs to one ship. Each update it scans the
//! space around its owner, keeps one [`RadarContact`] per nearby ship
//! (mark and sweep), classifies contacts by IFF, drives one trail per
//! contact, and rebuilds the list of static landmarks. Target selection
//! picks the nearest matching contact on demand.

pub mod config;
pub mod contact;
pub mod contacts;
pub mod error;
pub mod events;
pub mod iff;
pub mod landmarks;
pub mod sensors;
pub mod space;
pub mod targeting;
pub mod trail;

pub use config::{SensorsConfig, TrailConfig};
pub use contact::RadarContact;
pub use error::SensorsError;
pub use events::SensorEvent;
pub use farsight_core as core;
pub use sensors::Sensors;
pub use space::Space;
pub use trail::{HudTrail, HudTrailFactory, Trail, TrailFactory};

#[cfg(test)]
mod testing;
