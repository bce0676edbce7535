//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world and the player's sensors,
//! processes player commands, runs all systems, and produces
//! `SensorSnapshot`s. Headless and deterministic for a given seed.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use farsight_core::commands::PlayerCommand;
use farsight_core::components::{CombatTarget, Dead, FlightState, Frame, Relations};
use farsight_core::constants::{DT, GRID_CELL_SIZE};
use farsight_core::events::ContactEvent;
use farsight_core::state::SensorSnapshot;
use farsight_core::types::{BodyId, SimTime};
use farsight_sensors::{Sensors, SensorsConfig};

use crate::error::SimConfigError;
use crate::systems;
use crate::systems::spatial::{GridSpace, SectorGrid};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Edge length of a spatial grid cell (meters).
    pub grid_cell_size: f64,
    /// NPC ships spawned around the player at start.
    pub traffic: usize,
    pub sensors: SensorsConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_cell_size: GRID_CELL_SIZE,
            traffic: 8,
            sensors: SensorsConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, SimConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the spatial grid and sensors depend on.
    pub fn validate(&self) -> Result<(), SimConfigError> {
        if !(self.grid_cell_size.is_finite() && self.grid_cell_size > 0.0) {
            return Err(SimConfigError::GridCellSize(self.grid_cell_size));
        }
        let range = self.sensors.radar_range;
        if !(range.is_finite() && range >= 0.0) {
            return Err(SimConfigError::RadarRange(range));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    player: Entity,
    sensors: Sensors,
    grid: SectorGrid,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<ContactEvent>,
}

impl SimulationEngine {
    /// Create a new simulation with the home system and a wave of traffic.
    pub fn new(config: SimConfig) -> Result<Self, SimConfigError> {
        config.validate()?;
        log::info!("starting simulation with seed {}", config.seed);

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player = world_setup::setup_system(&mut world);
        world_setup::spawn_traffic(&mut world, &mut rng, player, config.traffic);

        Ok(Self {
            world,
            time: SimTime::default(),
            rng,
            player,
            sensors: Sensors::new(player, config.sensors),
            grid: SectorGrid::new(config.grid_cell_size),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SensorSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.sensors, events)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn sensors(&self) -> &Sensors {
        &self.sensors
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn more random traffic around the origin.
    pub fn spawn_traffic(&mut self, count: usize) -> Vec<Entity> {
        world_setup::spawn_traffic(&mut self.world, &mut self.rng, self.player, count)
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::ChooseTarget { criteria } => {
                match self.sensors.choose_target(&mut self.world, criteria) {
                    Ok(true) => {}
                    Ok(false) => log::debug!("no contact to target for {criteria:?}"),
                    Err(err) => log::warn!("choose target failed: {err}"),
                }
            }
            PlayerCommand::ClearTarget => {
                if let Ok(mut target) = self.world.get::<&mut CombatTarget>(self.player) {
                    target.0 = None;
                }
            }
            PlayerCommand::SetRelations { body, value } => {
                let Some(entity) = self.resolve(body) else {
                    return;
                };
                if let Ok(mut relations) = self.world.get::<&mut Relations>(self.player) {
                    relations.set(entity, value);
                }
                self.sensors.update_iff(&self.world, entity);
            }
            PlayerCommand::SetFlightState { body, state } => {
                let Some(entity) = self.resolve(body) else {
                    return;
                };
                match self.world.get::<&mut FlightState>(entity) {
                    Ok(mut current) => *current = state,
                    Err(_) => log::warn!("body {body:?} has no flight state"),
                }
            }
            PlayerCommand::EnterFrame { frame } => {
                if let Ok(mut current) = self.world.get::<&mut Frame>(self.player) {
                    current.0 = frame;
                }
                log::info!("player entered frame {frame}");
                if let Err(err) = self.sensors.reset_trails(&self.world) {
                    log::warn!("trail reset failed: {err}");
                }
            }
            PlayerCommand::Kill { body } => {
                let Some(entity) = self.resolve(body) else {
                    return;
                };
                let _ = self.world.insert_one(entity, Dead);
            }
        }
    }

    /// Map a command's body id to a live entity.
    fn resolve(&self, body: BodyId) -> Option<Entity> {
        let entity = body.to_entity().filter(|&e| self.world.contains(e));
        if entity.is_none() {
            log::warn!("ignoring command for unknown body {body:?}");
        }
        entity
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Kinematics
        systems::movement::run(&mut self.world, DT);
        // 2. Spatial index for this tick's positions
        self.grid.rebuild(&self.world);
        // 3. Sensors (mark and sweep)
        let space = GridSpace {
            world: &self.world,
            grid: &self.grid,
        };
        if let Err(err) = self.sensors.update(&space, self.player, DT) {
            log::warn!("sensor update failed: {err}");
        }
        self.events
            .extend(self.sensors.drain_events().into_iter().map(ContactEvent::from));
        // 4. Remove dead bodies, now that no contact refers to them
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.player);
    }
}
