//! Test doubles shared by the sensors tests.

use std::cell::Cell;
use std::rc::Rc;

use hecs::{Entity, World};

use farsight_core::types::{Color, FrameId};

use crate::space::Space;
use crate::trail::{Trail, TrailFactory};

/// Trail that records what was done to it and counts live instances.
#[derive(Debug)]
pub struct RecordingTrail {
    pub body: Entity,
    pub color: Color,
    pub updates: Vec<f64>,
    pub resets: Vec<Option<FrameId>>,
    live: Rc<Cell<usize>>,
}

impl Trail for RecordingTrail {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn update(&mut self, dt: f64, _world: &World) {
        self.updates.push(dt);
    }

    fn reset(&mut self, frame: Option<FrameId>) {
        self.resets.push(frame);
    }
}

impl Drop for RecordingTrail {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingTrailFactory {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl RecordingTrailFactory {
    /// Trails created and not yet dropped.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }
}

impl TrailFactory for RecordingTrailFactory {
    type Trail = RecordingTrail;

    fn create(&mut self, _world: &World, body: Entity, color: Color) -> RecordingTrail {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);
        RecordingTrail {
            body,
            color,
            updates: Vec::new(),
            resets: Vec::new(),
            live: Rc::clone(&self.live),
        }
    }
}

/// Space whose proximity query returns a fixed list, in order.
pub struct FixedSpace<'a> {
    pub world: &'a World,
    pub near: Vec<Entity>,
}

impl<'a> FixedSpace<'a> {
    pub fn new(world: &'a World, near: Vec<Entity>) -> Self {
        Self { world, near }
    }
}

impl Space for FixedSpace<'_> {
    fn world(&self) -> &World {
        self.world
    }

    fn bodies_maybe_near(&self, _centre: Entity, _radius: f64) -> Vec<Entity> {
        self.near.clone()
    }
}
