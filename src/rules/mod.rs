//! Rules of play.
//!
//! Pure functions over seats and piles: which pile a seat plays from,
//! whether a play is legal, how the pile resolves, how many cards are
//! drawn, and who acts next. `RulesEngine` ties them to a `GameState`.
//!
//! Nothing here mutates a `GameState` directly.

pub mod engine;
pub mod outcome;
pub mod escalation;
pub mod refill;
pub mod resolver;
pub mod turn;
pub mod validator;

pub use engine::{GameResult, RulesEngine};
pub use outcome::{OpeningOutcome, TurnEvent, TurnOutcome};
pub use escalation::{active_source, source_of, PileSource};
pub use resolver::{ClearKind, PileResolution};
pub use turn::{DealStep, Stage, TurnAdvance, TurnDirection};
pub use validator::{is_valid_play, is_winning_play, player_has_valid_move};
