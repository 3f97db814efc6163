//! The game engine: dice, roll budget, turn order and game end.
//!
//! Callers own a `GameEngine` and thread it explicitly; there is no global
//! session. The engine does no locking of its own: a front end serving
//! several sessions must guard each instance itself.
//!
//! ## Turn state machine
//!
//! ```text
//! AwaitingFirstRoll --roll--> MidTurn --roll--> MidTurn --roll--> LastRoll
//!                               |                 |                 |
//!                               +------score------+------score------+
//!                               v
//!              next player's AwaitingFirstRoll, or Finished
//! ```
//!
//! Hold toggles loop on `MidTurn` and `LastRoll` without spending a roll.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    Action, ActionRecord, DieRoller, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap,
};
use crate::dice::{Dice, MAX_ROLLS, NUM_DICE};
use crate::scoring::{compute_score, Category, ScoreCard};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds the highest total.
    Winner(PlayerId),
    /// Two or more players share the highest total, in seat order.
    Tie(SmallVec<[PlayerId; 4]>),
}

impl GameResult {
    /// Check if a player won (alone or as part of a tie).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// All players holding the highest total.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps.as_slice(),
        }
    }
}

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No roll yet this turn. Holding and scoring are not allowed.
    AwaitingFirstRoll,
    /// One or two rolls taken, more remain.
    MidTurn,
    /// All rolls spent; the player must score.
    LastRoll,
    /// Every card is full.
    Finished,
}

/// A single game from first roll to final score.
///
/// Generic over the die source so tests can script exact rolls; production
/// code uses the seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct GameEngine<R: DieRoller = GameRng> {
    pub(crate) dice: Dice,
    pub(crate) rolls_remaining: u8,
    pub(crate) active: PlayerId,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) finished: bool,
    /// Turn number, starting at 1. Advances on every recorded score.
    pub(crate) turn: u32,
    /// Successful actions taken this turn.
    pub(crate) sequence: u32,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) roller: R,
}

impl GameEngine<GameRng> {
    /// Start a game from a configuration.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_roller(config, rng)
    }

    /// Start a fresh, entropy-seeded game for the named players.
    ///
    /// ```
    /// use five_dice::GameEngine;
    ///
    /// let engine = GameEngine::new_game(["A", "B"]).unwrap();
    /// assert_eq!(engine.rolls_remaining(), 3);
    /// assert_eq!(engine.active_player_name(), "A");
    /// ```
    pub fn new_game<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, GameError> {
        Self::new(GameConfig::new(names))
    }
}

impl<R: DieRoller> GameEngine<R> {
    /// Start a game drawing faces from `roller`.
    pub fn with_roller(config: GameConfig, roller: R) -> Result<Self, GameError> {
        config.validate()?;

        let names = config.player_names;
        let players = PlayerMap::new(names.len(), |p| Player::new(names[p.index()].clone()));

        info!(players = names.len(), "new game");

        Ok(Self {
            dice: Dice::new(),
            rolls_remaining: MAX_ROLLS,
            active: PlayerId::new(0),
            players,
            finished: false,
            turn: 1,
            sequence: 0,
            history: Vector::new(),
            roller,
        })
    }

    // === Mutators ===

    /// Re-roll every unheld die.
    ///
    /// Fails with `NoRollsRemaining` once three rolls are spent this turn.
    pub fn roll_dice(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.rolls_remaining == 0 {
            debug!(player = %self.active, "roll rejected: no rolls remaining");
            return Err(GameError::NoRollsRemaining);
        }

        self.dice.roll_unheld(&mut self.roller);
        self.rolls_remaining -= 1;

        debug!(
            player = %self.active,
            dice = ?self.dice.values(),
            rolls_remaining = self.rolls_remaining,
            "rolled"
        );
        self.record(Action::Roll);
        Ok(())
    }

    /// Flip the hold flag on die `index`, returning the new flag.
    ///
    /// Holding needs a roll to hold against, so this fails with
    /// `NotRolledYet` at the start of a turn.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        self.ensure_in_progress()?;
        if index >= NUM_DICE {
            return Err(GameError::InvalidDieIndex(index));
        }
        self.ensure_rolled()?;

        let held = self.dice.toggle_hold(index)?;
        debug!(player = %self.active, index, held, "toggled hold");
        self.record(Action::ToggleHold(index));
        Ok(held)
    }

    /// Record the current dice in `category` for the active player.
    ///
    /// On success the holds clear, the roll budget resets, the turn passes
    /// to the next seat, and the game ends if every card is now full.
    /// Returns the recorded score. On failure nothing changes.
    pub fn score_category(&mut self, category: Category) -> Result<u16, GameError> {
        self.ensure_in_progress()?;
        self.ensure_rolled()?;

        let score = self.preview(category);
        let player = self.active;
        if let Err(err) = self.players[player].card.set_category(category, score) {
            debug!(player = %player, %category, "score rejected: {}", err);
            return Err(err);
        }

        debug!(player = %player, %category, score, dice = ?self.dice.values(), "scored");
        self.record(Action::Score(category));

        self.dice.release_all();
        self.rolls_remaining = MAX_ROLLS;
        self.active = player.next(self.players.player_count());
        self.turn += 1;
        self.sequence = 0;

        if self.players.values().all(|p| p.card.is_complete()) {
            self.finished = true;
            if let Ok(result) = self.winner() {
                info!(winners = ?result.winners(), "game finished");
            }
        }

        Ok(score)
    }

    /// Apply an action by dispatching to the matching mutator.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Roll => self.roll_dice(),
            Action::ToggleHold(index) => self.toggle_hold(index).map(|_| ()),
            Action::Score(category) => self.score_category(category).map(|_| ()),
        }
    }

    // === Queries ===

    /// Current face values.
    #[must_use]
    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.dice.values()
    }

    /// Face values before the most recent roll.
    #[must_use]
    pub fn previous_dice(&self) -> [u8; NUM_DICE] {
        self.dice.previous()
    }

    /// Positions that changed on the most recent roll.
    #[must_use]
    pub fn changed_dice(&self) -> [bool; NUM_DICE] {
        self.dice.changed()
    }

    #[must_use]
    pub fn held(&self) -> [bool; NUM_DICE] {
        self.dice.held()
    }

    /// Dice, hold flags and previous roll together.
    #[must_use]
    pub fn dice_state(&self) -> &Dice {
        &self.dice
    }

    /// Rolls left this turn; 3 means no roll taken yet.
    #[must_use]
    pub fn rolls_remaining(&self) -> u8 {
        self.rolls_remaining
    }

    /// Whose turn it is. Meaningless once the game is finished.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_player_name(&self) -> &str {
        &self.players[self.active].name
    }

    /// A seated player. Panics if `player` is not seated at this table.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// A player's score card. Panics if `player` is not seated at this table.
    #[must_use]
    pub fn card(&self, player: PlayerId) -> &ScoreCard {
        &self.players[player].card
    }

    /// All players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        if self.finished {
            TurnPhase::Finished
        } else if self.rolls_remaining == MAX_ROLLS {
            TurnPhase::AwaitingFirstRoll
        } else if self.rolls_remaining == 0 {
            TurnPhase::LastRoll
        } else {
            TurnPhase::MidTurn
        }
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// What the current dice would score in `category`.
    ///
    /// Same computation the commit path uses; never mutates.
    #[must_use]
    pub fn preview(&self, category: Category) -> u16 {
        compute_score(category, &self.dice.values())
    }

    /// Previews for the active player's open categories, in card order.
    ///
    /// Empty before the first roll of a turn and after the game ends.
    #[must_use]
    pub fn open_previews(&self) -> Vec<(Category, u16)> {
        if self.turn_phase() == TurnPhase::AwaitingFirstRoll || self.finished {
            return Vec::new();
        }
        self.players[self.active]
            .card
            .open_categories()
            .map(|c| (c, self.preview(c)))
            .collect()
    }

    /// Every action the active player may take right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.finished {
            return actions;
        }
        if self.rolls_remaining > 0 {
            actions.push(Action::Roll);
        }
        if self.rolls_remaining < MAX_ROLLS {
            actions.extend((0..NUM_DICE).map(Action::ToggleHold));
            actions.extend(
                self.players[self.active]
                    .card
                    .open_categories()
                    .map(Action::Score),
            );
        }
        actions
    }

    /// The player or players with the highest total.
    ///
    /// Fails with `GameNotFinished` until every card is full. Ties are
    /// reported as `GameResult::Tie`, never broken.
    pub fn winner(&self) -> Result<GameResult, GameError> {
        if !self.finished {
            return Err(GameError::GameNotFinished);
        }

        let best = self.players.values().map(Player::total).max().unwrap_or(0);
        let leaders: SmallVec<[PlayerId; 4]> = self
            .players
            .iter()
            .filter(|(_, p)| p.total() == best)
            .map(|(id, _)| id)
            .collect();

        Ok(if leaders.len() == 1 {
            GameResult::Winner(leaders[0])
        } else {
            GameResult::Tie(leaders)
        })
    }

    /// Players ordered by total, highest first; equal totals keep seat order.
    ///
    /// Callable at any time, including mid-game.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u16)> {
        let mut standings: Vec<_> = self.players.iter().map(|(id, p)| (id, p.total())).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        Ok(())
    }

    fn ensure_rolled(&self) -> Result<(), GameError> {
        if self.rolls_remaining == MAX_ROLLS {
            return Err(GameError::NotRolledYet);
        }
        Ok(())
    }

    fn record(&mut self, action: Action) {
        self.sequence += 1;
        self.history
            .push_back(ActionRecord::new(self.active, action, self.turn, self.sequence));
    }
}
