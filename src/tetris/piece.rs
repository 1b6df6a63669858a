use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::grid::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tetromino {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::O,
        Tetromino::T,
        Tetromino::L,
        Tetromino::J,
        Tetromino::Z,
        Tetromino::S,
    ];

    pub fn color(self) -> Color {
        match self {
            Tetromino::I => Color::Cyan,
            Tetromino::O => Color::Yellow,
            Tetromino::T => Color::Purple,
            Tetromino::L => Color::Blue,
            Tetromino::J => Color::Orange,
            Tetromino::Z => Color::Green,
            Tetromino::S => Color::Red,
        }
    }

    /// Spawn orientation.
    pub fn shape(self) -> Shape {
        let rows: &[&[u8]] = match self {
            Tetromino::I => &[&[1, 1, 1, 1]],
            Tetromino::O => &[&[1, 1], &[1, 1]],
            Tetromino::T => &[&[1, 1, 1], &[0, 1, 0]],
            Tetromino::L => &[&[1, 1, 1], &[1, 0, 0]],
            Tetromino::J => &[&[1, 1, 1], &[0, 0, 1]],
            Tetromino::Z => &[&[1, 1, 0], &[0, 1, 1]],
            Tetromino::S => &[&[0, 1, 1], &[1, 1, 0]],
        };
        Shape::from_rows(rows)
    }
}

/// Row-major boolean matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y * width + x] = v != 0;
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Offsets of the filled cells.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.filled(x, y))
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// Quarter turn clockwise: reverse the rows, then transpose.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.height, self.width);
        let mut cells = vec![false; w * h];
        for y in 0..h {
            for x in 0..w {
                cells[y * w + x] = self.filled(y, self.height - 1 - x);
            }
        }
        Self { width: w, height: h, cells }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: Tetromino,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Centered horizontally with its top row on row 0.
    pub fn spawn(kind: Tetromino, grid_width: usize) -> Self {
        let shape = kind.shape();
        let x = (grid_width / 2) as i32 - (shape.width() / 2) as i32;
        Self {
            kind,
            color: kind.color(),
            shape,
            x,
            y: 0,
        }
    }

    /// Absolute positions of the filled cells.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        self.shape
            .offsets()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// `None` when the offset runs past the coordinate range.
    pub fn shifted(&self, dx: i32, dy: i32) -> Option<Self> {
        let mut next = self.clone();
        next.x = self.x.checked_add(dx)?;
        next.y = self.y.checked_add(dy)?;
        Some(next)
    }
}

/// Supplies the next piece kind. Injected so games can be replayed.
pub trait ShapeSource {
    fn next_kind(&mut self) -> Tetromino;
}

/// Uniform draw from the seven tetrominoes.
pub struct RandomShapes {
    rng: StdRng,
}

impl RandomShapes {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSource for RandomShapes {
    fn next_kind(&mut self) -> Tetromino {
        *Tetromino::ALL.choose(&mut self.rng).unwrap_or(&Tetromino::I)
    }
}
