//! Uniform grid over body positions, rebuilt once per tick.
//!
//! Proximity queries return every body in the cells overlapping the
//! query cube, so they include bodies slightly outside the radius.
//! Sensors filter what they get back.

use std::collections::HashMap;

use glam::{DVec3, IVec3};
use hecs::{Entity, World};

use farsight_core::components::Position;
use farsight_core::constants::GRID_CELL_SIZE;
use farsight_core::enums::BodyKind;
use farsight_sensors::space::{self, Space};

#[derive(Debug)]
pub struct SectorGrid {
    cell_size: f64,
    cells: HashMap<IVec3, Vec<Entity>>,
}

impl SectorGrid {
    /// A grid with cells of edge `cell_size`. Sizes that are not positive
    /// and finite fall back to [`GRID_CELL_SIZE`].
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            log::warn!("invalid grid cell size {cell_size}, using {GRID_CELL_SIZE}");
            GRID_CELL_SIZE
        };
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, point: DVec3) -> IVec3 {
        (point / self.cell_size).floor().as_ivec3()
    }

    /// Re-bucket every positioned body.
    pub fn rebuild(&mut self, world: &World) {
        self.cells.clear();
        for (entity, (_kind, pos)) in world.query::<(&BodyKind, &Position)>().iter() {
            let cell = self.cell_of(pos.0);
            self.cells.entry(cell).or_default().push(entity);
        }
    }

    /// Bodies in every cell touching the cube of half-size `radius`
    /// around `centre`. Order is deterministic for a given world.
    pub fn query(&self, centre: DVec3, radius: f64) -> Vec<Entity> {
        let min = self.cell_of(centre - DVec3::splat(radius));
        let max = self.cell_of(centre + DVec3::splat(radius));
        let mut found = Vec::new();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    if let Some(bucket) = self.cells.get(&IVec3::new(x, y, z)) {
                        found.extend_from_slice(bucket);
                    }
                }
            }
        }
        found
    }
}

/// The world paired with this tick's grid.
pub struct GridSpace<'a> {
    pub world: &'a World,
    pub grid: &'a SectorGrid,
}

impl Space for GridSpace<'_> {
    fn world(&self) -> &World {
        self.world
    }

    fn bodies_maybe_near(&self, centre: Entity, radius: f64) -> Vec<Entity> {
        match space::position(self.world, centre) {
            Some(pos) => self.grid.query(pos.0, radius),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_superset_of_range() {
        let mut world = World::new();
        let centre = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let inside = world.spawn((BodyKind::Ship, Position::new(900.0, 0.0, 0.0)));
        // Outside the radius but sharing a cell with the query cube.
        let corner = world.spawn((BodyKind::Ship, Position::new(1500.0, 1500.0, 0.0)));
        let far = world.spawn((BodyKind::Ship, Position::new(5000.0, 0.0, 0.0)));

        let mut grid = SectorGrid::new(2000.0);
        grid.rebuild(&world);
        let space = GridSpace {
            world: &world,
            grid: &grid,
        };

        let near = space.bodies_maybe_near(centre, 1000.0);
        assert!(near.contains(&centre));
        assert!(near.contains(&inside));
        assert!(near.contains(&corner));
        assert!(!near.contains(&far));
    }

    #[test]
    fn test_rebuild_follows_movement() {
        let mut world = World::new();
        let body = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let mut grid = SectorGrid::new(100.0);
        grid.rebuild(&world);
        assert_eq!(grid.query(DVec3::ZERO, 10.0), vec![body]);

        world.get::<&mut Position>(body).unwrap().0.x = 1000.0;
        grid.rebuild(&world);
        assert!(grid.query(DVec3::ZERO, 10.0).is_empty());
        assert_eq!(grid.query(DVec3::new(1000.0, 0.0, 0.0), 10.0), vec![body]);
    }

    #[test]
    fn test_invalid_cell_size_falls_back() {
        let mut world = World::new();
        let centre = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let ship = world.spawn((BodyKind::Ship, Position::new(1000.0, 0.0, 0.0)));

        for size in [0.0, -50_000.0, f64::NAN, f64::INFINITY] {
            let mut grid = SectorGrid::new(size);
            assert_eq!(grid.cell_size, GRID_CELL_SIZE);
            grid.rebuild(&world);
            let space = GridSpace {
                world: &world,
                grid: &grid,
            };
            let near = space.bodies_maybe_near(centre, 100_000.0);
            assert!(near.contains(&ship));
        }
    }

    #[test]
    fn test_rebuild_drops_vacated_cells() {
        let mut world = World::new();
        let body = world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let mut grid = SectorGrid::new(100.0);
        for step in 0..10 {
            world.get::<&mut Position>(body).unwrap().0.x = step as f64 * 250.0;
            grid.rebuild(&world);
            assert_eq!(grid.cells.len(), 1);
        }
    }

    #[test]
    fn test_unpositioned_centre_sees_nothing() {
        let mut world = World::new();
        let centre = world.spawn((BodyKind::Ship,));
        world.spawn((BodyKind::Ship, Position::new(0.0, 0.0, 0.0)));
        let mut grid = SectorGrid::new(100.0);
        grid.rebuild(&world);
        let space = GridSpace {
            world: &world,
            grid: &grid,
        };
        assert!(space.bodies_maybe_near(centre, 1000.0).is_empty());
    }
}
