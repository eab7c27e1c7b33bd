//! Largest axis-aligned rectangle inside a rectilinear polygon
//!
//! The polygon outline is traced onto a sparse grid after scaling every
//! vertex down by a divisor. Rays cast inward from all four sides of the
//! bounding box mark the exterior cells that touch the outline as
//! [`Tile::Border`]. A rectangle whose perimeter touches no border cell is
//! taken to lie inside the polygon.
//!
//! The perimeter test only holds for rectangles whose corners are polygon
//! vertices; it is not a general point-in-polygon test.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use itertools::Itertools;
use thiserror::Error;

use super::grid::{Direction, Point};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorderFillError {
    #[error("cannot connect {},{} to {},{} with a straight line", .from.x, .from.y, .to.x, .to.y)]
    Diagonal { from: Point, to: Point },
    #[error("scale divisor must be positive, got {0}")]
    InvalidDivisor(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Vertex,
    Edge,
    Border,
}

impl Tile {
    fn is_outline(self) -> bool {
        matches!(self, Tile::Vertex | Tile::Edge)
    }
}

/// Area of the rectangle with opposite corners `a` and `b`, counting both
/// corner cells.
pub fn rectangle_area(a: Point, b: Point) -> u64 {
    (a.x.abs_diff(b.x) + 1) * (a.y.abs_diff(b.y) + 1)
}

/// Polygon outline on a sparse grid
#[derive(Debug, Clone)]
pub struct TracedGrid {
    tiles: HashMap<Point, Tile>,
    xs: RangeInclusive<i64>,
    ys: RangeInclusive<i64>,
}

impl TracedGrid {
    /// Traces the closed outline through `vertices`, joining the last vertex
    /// back to the first.
    pub fn trace(vertices: &[Point]) -> Result<Self, BorderFillError> {
        let mut tiles = HashMap::new();

        for (&from, &to) in vertices.iter().circular_tuple_windows() {
            let direction = segment_direction(from, to)?;
            tiles.insert(from, Tile::Vertex);
            tiles.insert(to, Tile::Vertex);

            if let Some(direction) = direction {
                let mut cell = from.step(direction);
                while cell != to {
                    tiles.insert(cell, Tile::Edge);
                    cell = cell.step(direction);
                }
            }
        }

        let (min_x, max_x) = bounds(vertices.iter().map(|p| p.x));
        let (min_y, max_y) = bounds(vertices.iter().map(|p| p.y));

        Ok(Self {
            tiles,
            // One cell of margin so every ray starts outside the outline
            xs: min_x - 1..=max_x + 1,
            ys: min_y - 1..=max_y + 1,
        })
    }

    pub fn tile(&self, point: Point) -> Option<Tile> {
        self.tiles.get(&point).copied()
    }

    fn is_outline(&self, point: Point) -> bool {
        self.tile(point).is_some_and(Tile::is_outline)
    }

    fn in_bounds(&self, point: Point) -> bool {
        self.xs.contains(&point.x) && self.ys.contains(&point.y)
    }

    /// Casts one ray per column from the top and the bottom, and one per row
    /// from the left and the right.
    pub fn mark_border(&mut self) {
        let (top, bottom) = (*self.ys.start(), *self.ys.end());
        let (left, right) = (*self.xs.start(), *self.xs.end());

        for x in self.xs.clone() {
            self.cast_ray(Point::new(x, top), Direction::Down);
            self.cast_ray(Point::new(x, bottom), Direction::Up);
        }
        for y in self.ys.clone() {
            self.cast_ray(Point::new(left, y), Direction::Right);
            self.cast_ray(Point::new(right, y), Direction::Left);
        }
    }

    fn cast_ray(&mut self, from: Point, direction: Direction) {
        let mut cell = from;
        while self.in_bounds(cell) && !self.is_outline(cell) {
            let beside = direction
                .lateral()
                .iter()
                .any(|&side| self.is_outline(cell.step(side)));
            let ahead = self.is_outline(cell.step(direction));

            if beside || ahead {
                self.tiles.insert(cell, Tile::Border);
            }
            if ahead {
                break;
            }
            cell = cell.step(direction);
        }
    }

    /// Whether the perimeter of the rectangle spanned by `a` and `b` avoids
    /// every border cell. Interior cells are not inspected.
    pub fn is_clear(&self, a: Point, b: Point) -> bool {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        let columns = (min_y..=max_y).flat_map(|y| [Point::new(min_x, y), Point::new(max_x, y)]);
        let rows = (min_x..=max_x).flat_map(|x| [Point::new(x, min_y), Point::new(x, max_y)]);

        columns
            .chain(rows)
            .all(|p| self.tile(p) != Some(Tile::Border))
    }
}

/// `None` when both ends coincide.
fn segment_direction(from: Point, to: Point) -> Result<Option<Direction>, BorderFillError> {
    use std::cmp::Ordering::*;

    match (from.x.cmp(&to.x), from.y.cmp(&to.y)) {
        (Equal, Equal) => Ok(None),
        (Equal, Less) => Ok(Some(Direction::Down)),
        (Equal, Greater) => Ok(Some(Direction::Up)),
        (Less, Equal) => Ok(Some(Direction::Right)),
        (Greater, Equal) => Ok(Some(Direction::Left)),
        _ => Err(BorderFillError::Diagonal { from, to }),
    }
}

fn bounds(values: impl Iterator<Item = i64>) -> (i64, i64) {
    values
        .minmax()
        .into_option()
        .unwrap_or((0, 0))
}

/// A polygon together with its scaled-down, bordered outline
#[derive(Debug, Clone)]
pub struct ScaledPolygon {
    vertices: Vec<Point>,
    divisor: i64,
    originals: HashMap<Point, Point>,
    grid: TracedGrid,
}

impl ScaledPolygon {
    /// Scales `vertices` down by `divisor`, traces and borders the outline.
    pub fn new(vertices: &[Point], divisor: i64) -> Result<Self, BorderFillError> {
        if divisor <= 0 {
            return Err(BorderFillError::InvalidDivisor(divisor));
        }
        // Validate in original space; scaling can hide a diagonal
        for (&from, &to) in vertices.iter().circular_tuple_windows() {
            segment_direction(from, to)?;
        }

        let scale = |p: Point| Point::new(p.x.div_euclid(divisor), p.y.div_euclid(divisor));
        let scaled: Vec<Point> = vertices.iter().copied().map(scale).collect();
        let originals = scaled.iter().copied().zip(vertices.iter().copied()).collect();

        let mut grid = TracedGrid::trace(&scaled)?;
        grid.mark_border();

        Ok(Self {
            vertices: vertices.to_vec(),
            divisor,
            originals,
            grid,
        })
    }

    pub fn scale(&self, point: Point) -> Point {
        Point::new(
            point.x.div_euclid(self.divisor),
            point.y.div_euclid(self.divisor),
        )
    }

    /// One original vertex that scales to `scaled`, if any does.
    pub fn original(&self, scaled: Point) -> Option<Point> {
        self.originals.get(&scaled).copied()
    }

    pub fn grid(&self) -> &TracedGrid {
        &self.grid
    }

    /// Largest area, in original coordinates, over vertex pairs whose scaled
    /// rectangle is clear. 0 if no pair qualifies.
    pub fn max_clear_rectangle(&self) -> u64 {
        self.vertices
            .iter()
            .tuple_combinations()
            .filter(|&(&a, &b)| self.grid.is_clear(self.scale(a), self.scale(b)))
            .map(|(&a, &b)| rectangle_area(a, b))
            .max()
            .unwrap_or(0)
    }
}

/// Largest rectangle with polygon vertices as opposite corners that stays
/// inside the polygon, tested on a grid scaled down by `divisor`.
pub fn max_clear_rectangle(vertices: &[Point], divisor: i64) -> Result<u64, BorderFillError> {
    Ok(ScaledPolygon::new(vertices, divisor)?.max_clear_rectangle())
}
