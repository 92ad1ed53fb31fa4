use crate::{config::AgentConfig, env::Environment};

/// Number of moves available at every state
pub const NUM_ACTIONS: usize = 6;

/// Action index `i` plays `ACTION_MAP[i]`
pub const ACTION_MAP: [i32; NUM_ACTIONS] = [3, 2, 1, -1, -2, -3];

/// Agent configuration for [`Catch5`]
pub type Catch5Config = AgentConfig<i32, NUM_ACTIONS>;

const TARGET: i32 = 5;
const FLOOR: i32 = -5;
const MAX_MOVES: u32 = 10;

/// A deterministic counting game
///
/// The running total starts at 0 and every move adds its value to it. Hitting exactly 5 wins.
/// Overshooting 5, dropping below -5, or running out of moves loses.
#[derive(Debug, Clone, Default)]
pub struct Catch5 {
    current_number: i32,
    moves: u32,
}

impl Catch5 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_number(&self) -> i32 {
        self.current_number
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }
}

impl Environment for Catch5 {
    type State = i32;
    type Move = i32;

    fn reset(&mut self) {
        self.current_number = 0;
        self.moves = 0;
    }

    fn current_state(&self) -> Self::State {
        self.current_number
    }

    fn apply(&mut self, mv: Self::Move) {
        if !self.is_active() {
            return;
        }
        self.current_number = self.current_number.saturating_add(mv);
        self.moves += 1;
    }

    fn is_active(&self) -> bool {
        !self.has_won() && !self.has_lost()
    }

    fn has_won(&self) -> bool {
        self.current_number == TARGET
    }

    fn has_lost(&self) -> bool {
        !self.has_won()
            && (self.current_number > TARGET
                || self.current_number < FLOOR
                || self.moves >= MAX_MOVES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Outcome;

    #[test]
    fn exact_hit_wins() {
        let mut game = Catch5::new();
        game.apply(3);
        assert!(game.is_active());
        game.apply(2);
        assert!(game.has_won());
        assert!(!game.has_lost());
        assert_eq!(game.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn overshoot_loses() {
        let mut game = Catch5::new();
        game.apply(3);
        game.apply(3);
        assert_eq!(game.current_state(), 6);
        assert_eq!(game.outcome(), Some(Outcome::Loss));
    }

    #[test]
    fn floor_and_move_limit_lose() {
        let mut game = Catch5::new();
        game.apply(-3);
        game.apply(-3);
        assert!(game.has_lost());

        game.reset();
        assert!(game.is_active());
        for _ in 0..5 {
            game.apply(1);
            game.apply(-1);
        }
        assert_eq!(game.moves(), MAX_MOVES);
        assert!(game.has_lost());
    }

    #[test]
    fn terminal_game_ignores_moves() {
        let mut game = Catch5::new();
        game.apply(3);
        game.apply(2);
        game.apply(-1);
        assert_eq!(game.current_number(), 5);
        assert!(game.has_won());
    }
}
