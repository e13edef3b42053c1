//! Uniform random move choice, the weakest difficulty.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::position::Position;

/// Pick any legal move with equal probability, or `None` if there are none.
pub fn pick_random<P: Position>(position: &P) -> Option<P::Move> {
    pick_random_with_rng(position, &mut rand::rng())
}

/// Same as [`pick_random`] with a caller-supplied generator, for seeded play.
pub fn pick_random_with_rng<P, R>(position: &P, rng: &mut R) -> Option<P::Move>
where
    P: Position,
    R: Rng + ?Sized,
{
    let legal_moves = position.legal_moves();
    legal_moves.as_slice().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::{pick_random, pick_random_with_rng};
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::search::test_positions::{leaf, node, ScriptedPosition};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn only_returns_legal_moves() {
        let position = BoardPosition::start();
        let legal = position.legal_moves();
        for _ in 0..50 {
            let mv = pick_random(&position).expect("start position has moves");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn returns_none_without_legal_moves() {
        let stalemate =
            BoardPosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(pick_random(&stalemate), None);

        let bare = ScriptedPosition::new(Color::Light, leaf(3));
        assert_eq!(pick_random(&bare), None);
    }

    #[test]
    fn seeded_choice_is_reproducible_and_covers_all_moves() {
        let position = ScriptedPosition::new(
            Color::Light,
            node(0, vec![leaf(1), leaf(2), leaf(3)]),
        );

        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let first: Vec<_> = (0..20)
            .map(|_| pick_random_with_rng(&position, &mut a))
            .collect();
        let second: Vec<_> = (0..20)
            .map(|_| pick_random_with_rng(&position, &mut b))
            .collect();
        assert_eq!(first, second);

        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let mv = pick_random_with_rng(&position, &mut rng).expect("moves exist");
            seen[mv - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
