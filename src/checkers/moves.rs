use std::collections::BTreeMap;

use super::board::{offset, Board, Cell, PieceId, Side, Square};

/// Landing square -> pieces jumped to get there, in the order they were jumped.
pub type MoveSet = BTreeMap<Square, Vec<PieceId>>;

/// A capture chain still being explored.
struct Jump {
    from: Square,
    dr: i32,
    captured: Vec<PieceId>,
}

/// Every destination reachable by the given piece, captures included.
///
/// Plain steps go one square along a diagonal in each allowed row direction.
/// A jump over an adjacent enemy onto an empty square records the landing
/// square, then further jumps are searched from there in the same row
/// direction. Chains are explored with an explicit worklist; each entry
/// carries its own list of pieces captured so far.
pub fn valid_moves(board: &Board, id: PieceId) -> MoveSet {
    let mut moves = MoveSet::new();
    let Some(piece) = board.piece(id) else {
        return moves;
    };
    let side = piece.side;
    let mut worklist = Vec::new();

    for &dr in piece.directions() {
        for dc in [-1, 1] {
            let Some(next) = offset(piece.square(), dr, dc) else {
                continue;
            };
            match board.cell(next.0, next.1) {
                Some(Cell::Empty) => record(&mut moves, next, Vec::new()),
                Some(Cell::Occupied(other)) => {
                    if let Some(landing) = jump_over(board, side, other, next, dr, dc) {
                        let captured = vec![other];
                        record(&mut moves, landing, captured.clone());
                        worklist.push(Jump { from: landing, dr, captured });
                    }
                }
                None => {}
            }
        }
    }

    while let Some(jump) = worklist.pop() {
        for dc in [-1, 1] {
            let Some(next) = offset(jump.from, jump.dr, dc) else {
                continue;
            };
            let Some(other) = board.piece_id_at(next.0, next.1) else {
                continue;
            };
            if jump.captured.contains(&other) {
                continue;
            }
            if let Some(landing) = jump_over(board, side, other, next, jump.dr, dc) {
                let mut captured = jump.captured.clone();
                captured.push(other);
                record(&mut moves, landing, captured.clone());
                worklist.push(Jump { from: landing, dr: jump.dr, captured });
            }
        }
    }

    moves
}

/// True when the piece has at least one capturing destination.
pub fn has_capture(board: &Board, id: PieceId) -> bool {
    valid_moves(board, id).values().any(|captured| !captured.is_empty())
}

/// Drop every non-capturing destination.
pub fn captures_only(moves: &mut MoveSet) {
    moves.retain(|_, captured| !captured.is_empty());
}

/// Landing square of a jump by `side` over the piece `other` standing on `over`.
fn jump_over(
    board: &Board,
    side: Side,
    other: PieceId,
    over: Square,
    dr: i32,
    dc: i32,
) -> Option<Square> {
    let enemy = board.piece(other).is_some_and(|p| p.side != side);
    if !enemy {
        return None;
    }
    let landing = offset(over, dr, dc)?;
    matches!(board.cell(landing.0, landing.1), Some(Cell::Empty)).then_some(landing)
}

/// Keep the longer chain when two paths reach the same square.
fn record(moves: &mut MoveSet, landing: Square, captured: Vec<PieceId>) {
    match moves.get(&landing) {
        Some(existing) if existing.len() >= captured.len() => {}
        _ => {
            moves.insert(landing, captured);
        }
    }
}
