//! Match loop: two boards, two combatants, strict turn alternation.

use log::info;

use crate::board::Board;
use crate::player::{Combatant, Reporter};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    TurnOf(Side),
    Finished(Side),
}

/// A match between two combatants. Each side owns one board; the combatant
/// on side `s` fires at the board owned by `s.opponent()`. Strictly
/// sequential: one resolved shot per call to [`Game::play_turn`].
pub struct Game {
    boards: [Board; 2],
    combatants: [Combatant; 2],
    state: MatchState,
    turns: usize,
}

impl Game {
    /// Start a match with side A to move.
    pub fn new(
        board_a: Board,
        combatant_a: Combatant,
        board_b: Board,
        combatant_b: Combatant,
    ) -> Self {
        Self {
            boards: [board_a, board_b],
            combatants: [combatant_a, combatant_b],
            state: MatchState::TurnOf(Side::A),
            turns: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    /// Side to move, or `None` once the match is finished.
    pub fn active(&self) -> Option<Side> {
        match self.state {
            MatchState::TurnOf(side) => Some(side),
            MatchState::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            MatchState::TurnOf(_) => None,
        }
    }

    /// Turns played so far. Each resolved shot is one turn; rejected
    /// candidates do not count.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Run one turn of the active combatant. The active side is reassigned
    /// only on a miss; a hit or sink keeps the shooter. Both fleets are
    /// checked after every turn and the match finishes as soon as one is
    /// destroyed. A no-op once finished.
    pub fn play_turn(&mut self, reporter: &mut dyn Reporter) -> MatchState {
        let shooter = match self.state {
            MatchState::TurnOf(side) => side,
            MatchState::Finished(_) => return self.state,
        };
        let target = shooter.opponent();
        let repeat =
            self.combatants[shooter.index()].take_turn(&mut self.boards[target.index()], reporter);
        self.turns += 1;
        if self.boards[target.index()].defeated() {
            info!(
                "{} wins after {} turns",
                self.combatants[shooter.index()].name(),
                self.turns
            );
            self.state = MatchState::Finished(shooter);
        } else if self.boards[shooter.index()].defeated() {
            self.state = MatchState::Finished(target);
        } else if !repeat {
            self.state = MatchState::TurnOf(target);
        }
        self.state
    }

    /// Drive the match to completion and return the winner.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Side {
        loop {
            if let MatchState::Finished(winner) = self.play_turn(reporter) {
                return winner;
            }
        }
    }
}
