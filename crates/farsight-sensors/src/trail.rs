//! Contact trails: a short, time-windowed history of a body's positions.
//!
//! Sensors only rely on the [`Trail`] contract. [`HudTrail`] is the
//! implementation the HUD renders from.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};

use farsight_core::components::Position;
use farsight_core::types::{Color, FrameId};

use crate::config::TrailConfig;
use crate::space;

/// A visual trail bound to one body.
pub trait Trail {
    fn color(&self) -> Color;

    /// Change the color. Setting the current color again is a no-op.
    fn set_color(&mut self, color: Color);

    /// Advance by `dt` seconds, sampling the bound body's current position.
    fn update(&mut self, dt: f64, world: &World);

    /// Forget all history and rebind to `frame`. `None` means "no frame".
    fn reset(&mut self, frame: Option<FrameId>);
}

/// Builds trails for newly acquired contacts.
pub trait TrailFactory {
    type Trail: Trail;

    fn create(&mut self, world: &World, body: Entity, color: Color) -> Self::Trail;
}

/// Trail sampled at a fixed interval, keeping a bounded number of points.
#[derive(Debug, Clone)]
pub struct HudTrail {
    body: Entity,
    color: Color,
    frame: Option<FrameId>,
    points: VecDeque<DVec3>,
    since_sample: f64,
    config: TrailConfig,
}

impl HudTrail {
    pub fn new(world: &World, body: Entity, color: Color, config: TrailConfig) -> Self {
        Self {
            body,
            color,
            frame: space::frame(world, body),
            points: VecDeque::with_capacity(config.max_points),
            since_sample: 0.0,
            config,
        }
    }

    pub fn body(&self) -> Entity {
        self.body
    }

    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    /// Recorded positions, oldest first.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as offsets from `current`, oldest first, fading in toward
    /// the newest.
    pub fn render_points(&self, current: &Position) -> Vec<(DVec3, Color)> {
        let count = self.points.len();
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let fade = (i + 1) as f64 / count as f64;
                (*point - current.0, self.color.faded(fade))
            })
            .collect()
    }
}

impl Trail for HudTrail {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn update(&mut self, dt: f64, world: &World) {
        self.since_sample += dt;
        if self.since_sample <= self.config.update_interval {
            return;
        }
        self.since_sample = 0.0;

        let body_frame = space::frame(world, self.body);
        // After a reset to no frame, follow the body into whatever frame
        // it is flying in now.
        if self.frame.is_none() {
            self.frame = body_frame;
        }
        if body_frame == self.frame {
            if let Some(pos) = space::position(world, self.body) {
                self.points.push_back(pos.0);
            }
        }

        while self.points.len() > self.config.max_points {
            self.points.pop_front();
        }
    }

    fn reset(&mut self, frame: Option<FrameId>) {
        self.frame = frame;
        self.points.clear();
        self.since_sample = 0.0;
    }
}

/// Factory for [`HudTrail`]s sharing one [`TrailConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HudTrailFactory {
    pub config: TrailConfig,
}

impl HudTrailFactory {
    pub fn new(config: TrailConfig) -> Self {
        Self { config }
    }
}

impl TrailFactory for HudTrailFactory {
    type Trail = HudTrail;

    fn create(&mut self, world: &World, body: Entity, color: Color) -> HudTrail {
        HudTrail::new(world, body, color, self.config)
    }
}
