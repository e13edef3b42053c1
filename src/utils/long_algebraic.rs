use chess::{ChessMove, Piece};

use crate::chess_errors::ChessErrors;
use crate::game_state::board_position::BoardPosition;
use crate::game_state::position::Position;

pub fn move_to_long_algebraic(mv: ChessMove) -> String {
    mv.to_string()
}

/// Resolve `e2e4` / `e7e8q` style text against the legal moves of
/// `position`. A pawn reaching the last rank without a promotion suffix
/// promotes to a queen.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    position: &BoardPosition,
) -> Result<ChessMove, ChessErrors> {
    let text = long_algebraic.trim().to_ascii_lowercase();
    if !is_well_formed(&text) {
        return Err(ChessErrors::InvalidMoveText(long_algebraic.to_owned()));
    }

    let legal_moves = position.legal_moves();
    if let Some(mv) = legal_moves.iter().find(|m| m.to_string() == text) {
        return Ok(*mv);
    }

    if text.len() == 4 {
        let queening = legal_moves.iter().find(|m| {
            m.get_promotion() == Some(Piece::Queen) && m.to_string().starts_with(&text)
        });
        if let Some(mv) = queening {
            return Ok(*mv);
        }
    }

    Err(ChessErrors::IllegalMove(long_algebraic.to_owned()))
}

fn is_well_formed(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return false;
    }
    let square_ok = |file: u8, rank: u8| (b'a'..=b'h').contains(&file) && (b'1'..=b'8').contains(&rank);
    square_ok(bytes[0], bytes[1])
        && square_ok(bytes[2], bytes[3])
        && bytes.get(4).map_or(true, |p| b"nbrq".contains(p))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board_position::BoardPosition;
    use chess::{ChessMove, Piece, Square};

    #[test]
    fn parses_simple_move() {
        let position = BoardPosition::start();
        let mv = long_algebraic_to_move("e2e4", &position).expect("move should parse");
        assert_eq!(mv, ChessMove::new(Square::E2, Square::E4, None));
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn bare_promotion_defaults_to_queen() {
        let position =
            BoardPosition::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8", &position).expect("move should parse");
        assert_eq!(mv.get_promotion(), Some(Piece::Queen));

        let under = long_algebraic_to_move("a7a8N", &position).expect("move should parse");
        assert_eq!(under.get_promotion(), Some(Piece::Knight));
        assert_eq!(move_to_long_algebraic(under), "a7a8n");
    }

    #[test]
    fn rejects_malformed_and_illegal_text() {
        let position = BoardPosition::start();
        assert_eq!(
            long_algebraic_to_move("e2", &position),
            Err(ChessErrors::InvalidMoveText("e2".to_owned()))
        );
        assert!(matches!(
            long_algebraic_to_move("e9e4", &position),
            Err(ChessErrors::InvalidMoveText(_))
        ));
        assert_eq!(
            long_algebraic_to_move("e2e5", &position),
            Err(ChessErrors::IllegalMove("e2e5".to_owned()))
        );
    }
}
