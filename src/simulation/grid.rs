//! City street grid
//!
//! Static description of which grid lines carry roads and where the building
//! blocks between them sit. Everything here is computed once at scene setup;
//! nothing mutates during simulation.

use rand::Rng;

use super::types::Position;

/// Maximum number of buildings generated for a scene.
pub const MAX_BUILDINGS: usize = 70;

/// Half-width of a building footprint in world units.
pub const BUILDING_HALF_WIDTH: f32 = 1.5;

/// Axis a road strip runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadAxis {
    /// Constant x, spanning the grid in z.
    NorthSouth,
    /// Constant z, spanning the grid in x.
    EastWest,
}

/// One renderable road strip: a full-extent rectangle centered on a road
/// grid line.
#[derive(Debug, Clone, Copy)]
pub struct RoadStrip {
    pub axis: RoadAxis,
    /// World offset of the strip's centerline along the fixed axis.
    pub offset: f32,
}

/// A building in a block interior.
///
/// Render data only: the collision rule excludes block interiors by line
/// parity, so these are never consulted when resolving a move.
#[derive(Debug, Clone, Copy)]
pub struct BuildingSite {
    pub position: Position,
    pub half_width: f32,
    pub height: f32,
    pub color: [f32; 3],
}

/// Immutable description of the city street grid.
///
/// Grid lines sit at every integer multiple of `block_size / 2`; a line whose
/// index is even carries a road. A position whose nearest line indices are
/// odd on both axes is inside a building block.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Half-extent of the grid in grid-line units.
    pub grid_size: i32,
    /// World-unit size of one city block; lines are spaced half a block apart.
    pub block_size: f32,
    /// World-unit half-width of a road strip.
    pub road_width: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            grid_size: 10,
            block_size: 10.0,
            road_width: 2.0,
        }
    }
}

impl GridSpec {
    /// World-space spacing between adjacent grid lines.
    pub fn line_spacing(&self) -> f32 {
        self.block_size / 2.0
    }

    /// World half-size of the drivable bounding square.
    pub fn half_extent(&self) -> f32 {
        self.grid_size as f32 * self.block_size / 2.0
    }

    /// Index of the grid line nearest to a world coordinate.
    pub fn nearest_line(&self, coord: f32) -> i32 {
        (coord / self.line_spacing()).round() as i32
    }

    /// World offset of a grid line by index.
    pub fn line_offset(&self, index: i32) -> f32 {
        index as f32 * self.line_spacing()
    }

    /// Whether a position lies inside the grid's bounding square.
    pub fn in_bounds(&self, position: &Position) -> bool {
        let half = self.half_extent();
        position.x.abs() <= half && position.z.abs() <= half
    }

    /// Whether a position aligns with a road line on at least one axis.
    ///
    /// Alignment with a single even line is enough, even off that road's
    /// centerline; only odd/odd pairs fall inside a block.
    pub fn on_road(&self, position: &Position) -> bool {
        self.nearest_line(position.x) % 2 == 0 || self.nearest_line(position.z) % 2 == 0
    }

    /// Road strips for the renderer, one per even grid line per axis.
    pub fn road_strips(&self) -> Vec<RoadStrip> {
        let mut strips = Vec::new();

        for index in -self.grid_size..=self.grid_size {
            if index % 2 != 0 {
                continue;
            }
            strips.push(RoadStrip {
                axis: RoadAxis::NorthSouth,
                offset: self.line_offset(index),
            });
            strips.push(RoadStrip {
                axis: RoadAxis::EastWest,
                offset: self.line_offset(index),
            });
        }

        strips
    }

    /// Generate one building per odd/odd cell, capped at [`MAX_BUILDINGS`].
    ///
    /// Heights and colors come from the supplied RNG so scenes are
    /// reproducible when it is seeded.
    pub fn building_sites<R: Rng>(&self, rng: &mut R) -> Vec<BuildingSite> {
        let mut sites = Vec::new();

        for col in -self.grid_size..=self.grid_size {
            for row in -self.grid_size..=self.grid_size {
                if col % 2 == 0 || row % 2 == 0 {
                    continue;
                }

                sites.push(BuildingSite {
                    position: Position::new(self.line_offset(col), 0.0, self.line_offset(row)),
                    half_width: BUILDING_HALF_WIDTH,
                    height: rng.random_range(2.0..5.0),
                    color: [rng.random(), rng.random(), rng.random()],
                });

                if sites.len() >= MAX_BUILDINGS {
                    return sites;
                }
            }
        }

        sites
    }
}
