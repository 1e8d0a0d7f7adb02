use rand::Rng;
use rand::rngs::ThreadRng;
use rpsx_rules::Move;
use rpsx_rules::Moves;

/// Picks the computer's move before the user sees anything but the
/// commitment.
pub trait Opponent {
    fn pick(&mut self, moves: &Moves) -> Move;
}

/// Uniform pick over the whole set.
#[derive(Debug, Clone)]
pub struct Random<R>(R);

impl<R: Rng> From<R> for Random<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl Default for Random<ThreadRng> {
    fn default() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> Opponent for Random<R> {
    fn pick(&mut self, moves: &Moves) -> Move {
        Move::from(self.0.random_range(0..moves.len()))
    }
}

/// Always plays the same move. Replays and tests use it to pin the
/// computer's side.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Move);

impl Opponent for Fixed {
    fn pick(&mut self, moves: &Moves) -> Move {
        debug_assert!(usize::from(self.0) < moves.len());
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn moves(n: usize) -> Moves {
        Moves::try_from((0..n).map(|i| format!("m{}", i)).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn random_stays_in_range() {
        let set = moves(7);
        let mut opponent = Random::from(SmallRng::seed_from_u64(7));
        for _ in 0..1000 {
            assert!(usize::from(opponent.pick(&set)) < set.len());
        }
    }

    #[test]
    fn random_covers_every_move() {
        let set = moves(5);
        let mut opponent = Random::from(SmallRng::seed_from_u64(42));
        let mut seen = [0usize; 5];
        for _ in 0..1000 {
            seen[usize::from(opponent.pick(&set))] += 1;
        }
        assert!(seen.iter().all(|&n| n > 100), "{:?}", seen);
    }

    #[test]
    fn seeded_is_reproducible() {
        let set = moves(9);
        let mut a = Random::from(SmallRng::seed_from_u64(1));
        let mut b = Random::from(SmallRng::seed_from_u64(1));
        for _ in 0..32 {
            assert_eq!(a.pick(&set), b.pick(&set));
        }
    }

    #[test]
    fn thread_rng_in_range() {
        let set = moves(3);
        let mut opponent = Random::<ThreadRng>::default();
        assert!(usize::from(opponent.pick(&set)) < 3);
    }

    #[test]
    fn fixed_is_fixed() {
        let set = moves(3);
        let mut opponent = Fixed(Move::from(2));
        assert_eq!(opponent.pick(&set), Move::from(2));
        assert_eq!(opponent.pick(&set), Move::from(2));
    }
}
