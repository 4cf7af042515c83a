//! The combatant turn protocol and its collaborator seams.

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;

/// Coordinate-choosing capability, supplied per combatant variant. May
/// block (stdin, for the interactive variant); the match simply waits.
pub trait Strategy {
    /// Produce the next candidate target.
    fn choose_target(&mut self) -> Coord;
}

/// Sink for turn notifications. Purely informational; nothing is read back
/// by the core.
pub trait Reporter {
    /// A shot resolved against `coord`.
    fn shot_resolved(&mut self, shooter: &str, coord: Coord, outcome: ShotOutcome);

    /// A candidate shot was rejected and will be re-chosen.
    fn shot_rejected(&mut self, shooter: &str, coord: Coord, error: BoardError);
}

/// Reporter that discards everything. Used by simulations and tests.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn shot_resolved(&mut self, _: &str, _: Coord, _: ShotOutcome) {}
    fn shot_rejected(&mut self, _: &str, _: Coord, _: BoardError) {}
}

/// One side's turn-taking agent: a display name plus the injected
/// coordinate chooser. Fires at whichever enemy board the match hands it.
pub struct Combatant {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fire one resolved shot at `enemy`. Rejected candidates (out of
    /// bounds, already targeted) are reported and re-chosen without
    /// consuming the turn. Returns `true` when the same combatant shoots
    /// again (hit or sunk).
    pub fn take_turn(&mut self, enemy: &mut Board, reporter: &mut dyn Reporter) -> bool {
        loop {
            let coord = self.strategy.choose_target();
            match enemy.fire(coord) {
                Ok(outcome) => {
                    reporter.shot_resolved(&self.name, coord, outcome);
                    return outcome.grants_extra_shot();
                }
                Err(err) => reporter.shot_rejected(&self.name, coord, err),
            }
        }
    }
}
