/// The fixed palette; every filled cell holds one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.idx(x, y);
        self.cells[idx] = value;
        true
    }

    pub fn row_full(&self, y: usize) -> bool {
        (0..self.width).all(|x| self.get(x, y).is_some_and(Cell::is_filled))
    }

    /// Remove every full row, shifting the rest down and inserting empty rows
    /// on top. Returns how many rows went.
    pub fn clear_full_rows(&mut self) -> usize {
        let kept: Vec<usize> = (0..self.height).filter(|&y| !self.row_full(y)).collect();
        let cleared = self.height - kept.len();
        if cleared == 0 {
            return 0;
        }
        let mut cells = vec![Cell::Empty; cleared * self.width];
        for y in kept {
            let start = self.idx(0, y);
            cells.extend_from_slice(&self.cells[start..start + self.width]);
        }
        self.cells = cells;
        cleared
    }
}
