//! Concrete position backed by the `chess` crate.
//!
//! `BoardPosition` wraps an immutable `chess::Board` with the state the rules
//! library leaves to the caller: an undo stack for make/unmake style search,
//! the halfmove clock and fullmove number, and a repetition history of
//! position hashes. Together these answer the application's notion of
//! "game over", which goes beyond checkmate and stalemate to include the
//! automatic draw rules.

use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, MoveGen, Piece, ALL_SQUARES};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    DARK_SQUARES, FIVEFOLD_REPETITION, SEVENTY_FIVE_MOVE_HALFMOVES,
};
use crate::game_state::chess_types::{Color, ColoredPiece, PieceKind, Square, BOARD_SQUARES};
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPosition {
    board: Board,
    halfmove_clock: u16,
    fullmove_number: u16,
    // Hashes of every position before the current one.
    repetition_history: Vec<u64>,
    undo_stack: Vec<UndoState>,
}

impl Default for BoardPosition {
    fn default() -> Self {
        Self::start()
    }
}

impl BoardPosition {
    pub fn start() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// Parse a FEN string. Missing clock fields default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(ChessErrors::InvalidFen(
                fen.to_owned(),
                "expected at least four fields".to_owned(),
            ));
        }

        check_placement(fen, fields[0])?;
        let board = Board::from_str(&fields[..4].join(" "))
            .map_err(|e| ChessErrors::InvalidFen(fen.to_owned(), e.to_string()))?;

        let parse_clock = |idx: usize, default: u16| -> Result<u16, ChessErrors> {
            match fields.get(idx) {
                None => Ok(default),
                Some(raw) => raw.parse::<u16>().map_err(|_| {
                    ChessErrors::InvalidFen(fen.to_owned(), format!("bad move counter '{raw}'"))
                }),
            }
        };

        let mut position = Self::from_board(board);
        position.halfmove_clock = parse_clock(4, 0)?;
        position.fullmove_number = parse_clock(5, 1)?.max(1);
        Ok(position)
    }

    pub fn fen(&self) -> String {
        // The library always prints `0 1` for the counters; replace them.
        let printed = self.board.to_string();
        let placement: Vec<&str> = printed.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of moves pushed since this position was created.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    pub fn is_capture(&self, mv: ChessMove) -> bool {
        if self.board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        // En passant: a pawn changing file onto an empty square.
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    pub fn repetition_count(&self) -> usize {
        let current = self.board.get_hash();
        1 + self
            .repetition_history
            .iter()
            .filter(|h| **h == current)
            .count()
    }

    /// Neither side can possibly deliver mate: no pawns, rooks or queens, and
    /// either a lone knight or only bishops all on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if heavy.popcnt() > 0 {
            return false;
        }

        let knights = self.board.pieces(Piece::Knight).popcnt();
        let bishops = self.board.pieces(Piece::Bishop).0;
        match knights {
            0 => bishops & DARK_SQUARES == 0 || bishops & !DARK_SQUARES == 0,
            1 => bishops == 0,
            _ => false,
        }
    }

    pub fn termination(&self) -> Option<Termination> {
        match self.board.status() {
            BoardStatus::Checkmate => return Some(Termination::Checkmate),
            BoardStatus::Stalemate => return Some(Termination::Stalemate),
            BoardStatus::Ongoing => {}
        }
        if self.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_HALFMOVES {
            return Some(Termination::SeventyFiveMoves);
        }
        if self.repetition_count() >= FIVEFOLD_REPETITION {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }
}

impl Position for BoardPosition {
    type Move = ChessMove;

    #[inline]
    fn side_to_move(&self) -> Color {
        from_library_color(self.board.side_to_move())
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn push(&mut self, mv: ChessMove) {
        let resets_clock = self.is_capture(mv)
            || self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);

        self.undo_stack.push(UndoState {
            mv,
            prev_board: self.board,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        });
        self.repetition_history.push(self.board.get_hash());

        if self.board.side_to_move() == chess::Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.board = self.board.make_move_new(mv);
    }

    fn pop(&mut self) -> Option<ChessMove> {
        let undo = self.undo_stack.pop()?;
        self.repetition_history.pop();
        self.board = undo.prev_board;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        Some(undo.mv)
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    #[inline]
    fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        if square >= BOARD_SQUARES {
            return None;
        }
        let sq = ALL_SQUARES[square as usize];
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(ColoredPiece::new(
            from_library_piece(piece),
            from_library_color(color),
        ))
    }
}

/// The rules library indexes its attack tables by king square without bounds
/// checks, so a placement must be vetted before it gets there: eight ranks of
/// eight files and exactly one king per side.
fn check_placement(fen: &str, placement: &str) -> Result<(), ChessErrors> {
    let invalid = |reason: String| Err(ChessErrors::InvalidFen(fen.to_owned(), reason));

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return invalid(format!("expected 8 ranks, found {}", ranks.len()));
    }
    for rank in &ranks {
        let files: u32 = rank
            .chars()
            .map(|c| c.to_digit(10).unwrap_or(1))
            .sum();
        if files != 8 {
            return invalid(format!("rank '{rank}' does not span 8 files"));
        }
    }

    let white_kings = placement.matches('K').count();
    let black_kings = placement.matches('k').count();
    if white_kings != 1 || black_kings != 1 {
        return invalid(format!(
            "expected one king per side, found {white_kings} white and {black_kings} black"
        ));
    }
    Ok(())
}

#[inline]
pub fn from_library_color(color: chess::Color) -> Color {
    match color {
        chess::Color::White => Color::Light,
        chess::Color::Black => Color::Dark,
    }
}

#[inline]
pub fn from_library_piece(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardPosition, Termination};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::position::Position;
    use chess::{ChessMove, Square};

    type Snapshot = (Color, Vec<Option<(PieceKind, Color)>>, Vec<ChessMove>);

    fn snapshot(position: &BoardPosition) -> Snapshot {
        let occupancy = (0..64u8)
            .map(|sq| position.piece_at(sq).map(|p| (p.kind, p.color)))
            .collect();
        (position.side_to_move(), occupancy, position.legal_moves())
    }

    #[test]
    fn start_position_round_trips_through_fen() {
        let position = BoardPosition::start();
        assert_eq!(position.fen(), STARTING_POSITION_FEN);
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.side_to_move(), Color::Light);
    }

    #[test]
    fn from_fen_reads_move_counters() {
        let position =
            BoardPosition::from_fen("8/8/8/8/8/4k3/4P3/4K3 b - - 7 42").expect("FEN should parse");
        assert_eq!(position.halfmove_clock(), 7);
        assert_eq!(position.fullmove_number(), 42);
        assert_eq!(position.side_to_move(), Color::Dark);
    }

    #[test]
    fn from_fen_rejects_garbage() {
        assert!(BoardPosition::from_fen("not a fen").is_err());
        assert!(BoardPosition::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1").is_err());
    }

    #[test]
    fn from_fen_rejects_boards_without_one_king_each() {
        for fen in [
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/8 b - - 0 1",
            "4k3/8/8/8/8/8/8/3KK3 w - - 0 1",
        ] {
            assert!(
                matches!(
                    BoardPosition::from_fen(fen),
                    Err(ChessErrors::InvalidFen(_, _))
                ),
                "{fen}"
            );
        }
    }

    #[test]
    fn from_fen_rejects_malformed_ranks() {
        for fen in [
            "4k3/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/9/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/ppppppppp/8/8/8/8/8/4K3 w - - 0 1",
        ] {
            assert!(
                matches!(
                    BoardPosition::from_fen(fen),
                    Err(ChessErrors::InvalidFen(_, _))
                ),
                "{fen}"
            );
        }
    }

    #[test]
    fn piece_at_uses_a1_as_square_zero() {
        let position = BoardPosition::start();
        let a1 = position.piece_at(0).expect("rook on a1");
        assert_eq!((a1.kind, a1.color), (PieceKind::Rook, Color::Light));
        let e8 = position.piece_at(60).expect("king on e8");
        assert_eq!((e8.kind, e8.color), (PieceKind::King, Color::Dark));
        assert!(position.piece_at(27).is_none());
        assert!(position.piece_at(64).is_none());
    }

    #[test]
    fn push_then_pop_restores_every_observable_field() {
        let fens = [
            STARTING_POSITION_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/P7/8/8/8/8/8/k6K w - - 0 1",
        ];

        for fen in fens {
            let mut position = BoardPosition::from_fen(fen).expect("FEN should parse");
            let before = position.clone();
            let before_snapshot = snapshot(&position);

            for mv in position.legal_moves() {
                position.push(mv);
                assert_eq!(position.pop(), Some(mv));
                assert_eq!(position, before, "{fen}: {mv} did not restore");
                assert_eq!(snapshot(&position), before_snapshot);
            }
        }
    }

    #[test]
    fn clocks_advance_and_reset() {
        let mut position = BoardPosition::start();
        position.push(ChessMove::new(Square::G1, Square::F3, None));
        assert_eq!(position.halfmove_clock(), 1);
        assert_eq!(position.fullmove_number(), 1);

        position.push(ChessMove::new(Square::E7, Square::E5, None));
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 2);
        assert_eq!(position.ply(), 2);
    }

    #[test]
    fn detects_capture_including_en_passant() {
        let position =
            BoardPosition::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .expect("FEN should parse");
        assert!(position.is_capture(ChessMove::new(Square::E5, Square::F6, None)));
        assert!(!position.is_capture(ChessMove::new(Square::E5, Square::E6, None)));
    }

    #[test]
    fn reports_checkmate_and_stalemate() {
        let mate = BoardPosition::from_fen("R5k1/5ppp/8/8/8/7r/5PPP/6K1 b - - 1 1")
            .expect("FEN should parse");
        assert!(mate.is_checkmate());
        assert!(mate.is_terminal());
        assert_eq!(mate.termination(), Some(Termination::Checkmate));

        let stalemate =
            BoardPosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!stalemate.is_checkmate());
        assert_eq!(stalemate.termination(), Some(Termination::Stalemate));
        assert!(stalemate.legal_moves().is_empty());
    }

    #[test]
    fn insufficient_material_ends_the_game() {
        let bare_kings = BoardPosition::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(
            bare_kings.termination(),
            Some(Termination::InsufficientMaterial)
        );

        let lone_knight = BoardPosition::from_fen("8/8/4k3/8/8/3K1N2/8/8 w - - 0 1")
            .expect("FEN should parse");
        assert!(lone_knight.is_insufficient_material());

        let rook = BoardPosition::from_fen("8/8/4k3/8/8/3K1R2/8/8 w - - 0 1")
            .expect("FEN should parse");
        assert!(!rook.is_insufficient_material());
        assert!(!rook.is_terminal());
    }

    #[test]
    fn bishops_only_draw_when_all_on_one_colour() {
        // c1 and f8 are both dark squares.
        let same_colour = BoardPosition::from_fen("5b2/8/4k3/8/8/3K4/8/2B5 w - - 0 1")
            .expect("FEN should parse");
        assert!(same_colour.is_insufficient_material());
        assert_eq!(
            same_colour.termination(),
            Some(Termination::InsufficientMaterial)
        );

        // c1 is dark, c8 is light.
        let opposite_colours = BoardPosition::from_fen("2b5/8/4k3/8/8/3K4/8/2B5 w - - 0 1")
            .expect("FEN should parse");
        assert!(!opposite_colours.is_insufficient_material());
        assert!(!opposite_colours.is_terminal());
    }

    #[test]
    fn seventy_five_move_rule_ends_the_game() {
        let position = BoardPosition::from_fen("8/8/4k3/8/8/3K1R2/8/8 w - - 150 120")
            .expect("FEN should parse");
        assert_eq!(position.termination(), Some(Termination::SeventyFiveMoves));
    }

    #[test]
    fn fivefold_repetition_ends_the_game() {
        let mut position = BoardPosition::start();
        let shuffle = [
            ChessMove::new(Square::G1, Square::F3, None),
            ChessMove::new(Square::G8, Square::F6, None),
            ChessMove::new(Square::F3, Square::G1, None),
            ChessMove::new(Square::F6, Square::G8, None),
        ];

        for _ in 0..4 {
            assert!(!position.is_terminal());
            for mv in shuffle {
                position.push(mv);
            }
        }

        assert_eq!(position.repetition_count(), 5);
        assert_eq!(
            position.termination(),
            Some(Termination::FivefoldRepetition)
        );
    }
}
