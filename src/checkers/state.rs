use tracing::{debug, info};

use super::board::{Board, PieceId, Side, Square};
use super::moves::{self, MoveSet};

#[derive(Clone, Copy, Debug, Default)]
pub struct Rules {
    /// When any capture exists for the side to move, plain steps are illegal.
    pub forced_capture: bool,
}

pub struct Game {
    board: Board,
    turn: Side,
    selected: Option<PieceId>,
    valid_moves: MoveSet,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        Self::with_board(Board::new(), Side::Dark, rules)
    }

    /// Start from an arbitrary position.
    pub fn with_board(board: Board, turn: Side, rules: Rules) -> Self {
        Self {
            board,
            turn,
            selected: None,
            valid_moves: MoveSet::new(),
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn current_move_set(&self) -> &MoveSet {
        &self.valid_moves
    }

    /// Handle a click on a square.
    ///
    /// With a piece selected, a legal destination moves it. Otherwise (or if
    /// the move fails) the selection is dropped and the square is tried as a
    /// new selection. Returns true if a move was made or a piece selected.
    pub fn select_or_move(&mut self, row: usize, col: usize) -> bool {
        if self.winner().is_some() {
            return false;
        }
        if self.selected.is_some() {
            if self.try_move((row, col)) {
                return true;
            }
            self.clear_selection();
        }

        let Some(id) = self.board.piece_id_at(row, col) else {
            return false;
        };
        if self.board.piece(id).map(|p| p.side) != Some(self.turn) {
            return false;
        }

        self.selected = Some(id);
        self.valid_moves = self.moves_for(id);
        debug!(row, col, destinations = self.valid_moves.len(), "piece selected");
        true
    }

    /// The side whose opponent has no pieces left.
    pub fn winner(&self) -> Option<Side> {
        if self.board.remaining(Side::Dark) == 0 {
            Some(Side::Light)
        } else if self.board.remaining(Side::Light) == 0 {
            Some(Side::Dark)
        } else {
            None
        }
    }

    fn moves_for(&self, id: PieceId) -> MoveSet {
        let mut set = moves::valid_moves(&self.board, id);
        if self.rules.forced_capture && self.side_can_capture(self.turn) {
            moves::captures_only(&mut set);
        }
        set
    }

    fn side_can_capture(&self, side: Side) -> bool {
        self.board
            .pieces()
            .filter(|(_, p)| p.side == side)
            .any(|(id, _)| moves::has_capture(&self.board, id))
    }

    fn try_move(&mut self, to: Square) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        if self.board.piece_id_at(to.0, to.1).is_some() {
            return false;
        }
        let Some(captured) = self.valid_moves.get(&to).cloned() else {
            return false;
        };

        let crowned = self.board.relocate(id, to.0, to.1);
        for &victim in &captured {
            self.board.remove(victim);
        }
        info!(
            side = ?self.turn,
            row = to.0,
            col = to.1,
            captured = captured.len(),
            crowned,
            "move applied"
        );

        if let Some(side) = self.winner() {
            info!(winner = ?side, "game won");
        }
        self.change_turn();
        true
    }

    /// Drop the current selection without moving.
    pub fn deselect(&mut self) {
        self.clear_selection();
    }

    fn change_turn(&mut self) {
        self.clear_selection();
        self.turn = self.turn.opponent();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }
}
