use crate::config::CHECKERS_SIZE;

pub type Square = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on the bottom rows and moves toward row 0.
    Dark,
    /// Starts on the top rows and moves toward the last row.
    Light,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// The row on which this side is crowned.
    pub fn crowning_row(self) -> usize {
        match self {
            Side::Dark => 0,
            Side::Light => CHECKERS_SIZE - 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub row: usize,
    pub col: usize,
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub fn square(&self) -> Square {
        (self.row, self.col)
    }

    /// Row deltas this piece may travel along.
    pub fn directions(&self) -> &'static [i32] {
        match (self.king, self.side) {
            (true, _) => &[-1, 1],
            (false, Side::Dark) => &[-1],
            (false, Side::Light) => &[1],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(PieceId),
}

/// 8x8 board plus the table of pieces the grid points into.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Cell; CHECKERS_SIZE]; CHECKERS_SIZE],
    pieces: Vec<Option<Piece>>,
    dark_left: usize,
    light_left: usize,
    dark_kings: usize,
    light_kings: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; CHECKERS_SIZE]; CHECKERS_SIZE],
            pieces: Vec::new(),
            dark_left: 0,
            light_left: 0,
            dark_kings: 0,
            light_kings: 0,
        }
    }

    /// Opening layout: three rows of pieces per side on the dark squares.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..CHECKERS_SIZE {
            for col in 0..CHECKERS_SIZE {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                if row < 3 {
                    board.place(row, col, Side::Light, false);
                } else if row > CHECKERS_SIZE - 4 {
                    board.place(row, col, Side::Dark, false);
                }
            }
        }
        board
    }

    /// Put a new piece on an empty square. Returns `None` when the square is
    /// off the board or taken.
    pub fn place(&mut self, row: usize, col: usize, side: Side, king: bool) -> Option<PieceId> {
        if !matches!(self.cell(row, col), Some(Cell::Empty)) {
            return None;
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(Piece { row, col, side, king }));
        self.cells[row][col] = Cell::Occupied(id);
        *self.left_mut(side) += 1;
        if king {
            *self.kings_mut(side) += 1;
        }
        Some(id)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0).and_then(Option::as_ref)
    }

    pub fn piece_id_at(&self, row: usize, col: usize) -> Option<PieceId> {
        match self.cell(row, col)? {
            Cell::Occupied(id) => Some(id),
            Cell::Empty => None,
        }
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Option<&Piece> {
        self.piece_id_at(row, col).and_then(|id| self.piece(id))
    }

    /// Every piece still on the board.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (PieceId(i), p)))
    }

    pub fn remaining(&self, side: Side) -> usize {
        match side {
            Side::Dark => self.dark_left,
            Side::Light => self.light_left,
        }
    }

    pub fn kings(&self, side: Side) -> usize {
        match side {
            Side::Dark => self.dark_kings,
            Side::Light => self.light_kings,
        }
    }

    /// Relocate a piece to an empty square, crowning it on its far row.
    /// Returns true when this move promoted it.
    pub(crate) fn relocate(&mut self, id: PieceId, row: usize, col: usize) -> bool {
        let Some(piece) = self.piece(id).copied() else {
            return false;
        };
        self.cells[piece.row][piece.col] = Cell::Empty;
        self.cells[row][col] = Cell::Occupied(id);

        let crowned = !piece.king && row == piece.side.crowning_row();
        if let Some(Some(p)) = self.pieces.get_mut(id.0) {
            p.row = row;
            p.col = col;
            p.king |= crowned;
        }
        if crowned {
            *self.kings_mut(piece.side) += 1;
        }
        crowned
    }

    pub(crate) fn remove(&mut self, id: PieceId) {
        let Some(piece) = self.pieces.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.cells[piece.row][piece.col] = Cell::Empty;
        *self.left_mut(piece.side) -= 1;
        if piece.king {
            *self.kings_mut(piece.side) -= 1;
        }
    }

    fn left_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::Dark => &mut self.dark_left,
            Side::Light => &mut self.light_left,
        }
    }

    fn kings_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::Dark => &mut self.dark_kings,
            Side::Light => &mut self.light_kings,
        }
    }
}

/// Step from `square` by the given deltas, staying on the board.
pub(crate) fn offset(square: Square, dr: i32, dc: i32) -> Option<Square> {
    let row = square.0 as i32 + dr;
    let col = square.1 as i32 + dc;
    let size = CHECKERS_SIZE as i32;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}
