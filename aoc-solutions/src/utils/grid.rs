//! Integer grid coordinates and a byte grid for puzzle maps

use std::ops::Add;

use aoc_solver::ParseError;

/// Integer `(x, y)` coordinate; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        self + direction.delta()
    }

    /// The eight surrounding points, orthogonal and diagonal.
    pub fn neighbors8(self) -> impl Iterator<Item = Point> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&delta| delta != (0, 0))
            .map(move |(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The two directions perpendicular to this one.
    pub const fn lateral(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}

/// Rectangular grid of ASCII cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl CharGrid {
    /// Parses non-empty lines into a grid; every line must have the same width.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in input
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
        {
            let line = line.trim_end();
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected {} cells, found {}",
                        line_idx + 1,
                        w,
                        line.len()
                    )));
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, point: Point) -> Option<u8> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i64)
            .flat_map(move |y| (0..self.width as i64).map(move |x| Point::new(x, y)))
    }

    /// Points holding `cell`, in row-major order.
    pub fn positions(&self, cell: u8) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self.get(p) == Some(cell))
    }
}
