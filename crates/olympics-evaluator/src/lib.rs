//! Decision engine for the four-event arcade competition.
//!
//! Every turn the same action is applied to four independent mini-games. This
//! crate decides which action that is, in two levels:
//!
//! 1. **Game Evaluation** ([`game_evaluator`]) - Each mini-game independently
//!    recommends the action it would play on its own, reports its score and
//!    rank, and may demand priority for this turn.
//!
//! 2. **Aggregation** ([`aggregator`]) - The first game demanding priority wins;
//!    otherwise the most frequent recommendation wins, ties going to the game
//!    listed first.
//!
//! [`turn_evaluator`] ties both together, starting from the raw game lines of a
//! turn.
//!
//! # Architecture
//!
//! ```text
//! Turn Evaluation (parse lines, run every game, aggregate)
//!     ↓ uses
//! Aggregation (forced priority, then majority, then default)
//!     ↓ consumes
//! Game Evaluation (hurdle / archery / skating / diving)
//! ```
//!
//! # Example
//!
//! ```
//! use olympics_engine::Action;
//! use olympics_evaluator::{config::EvaluatorConfig, turn_evaluator::TurnEvaluator};
//!
//! let evaluator = TurnEvaluator::new(&EvaluatorConfig::default());
//! let outcome = evaluator
//!     .evaluate_turn(&[
//!         "..#....... 0 0 0 0 0 0 0",
//!         "GAME_OVER 0 0 0 0 0 0 0",
//!         "GAME_OVER 0 0 0 0 0 0 0",
//!         "GAME_OVER 0 0 0 0 0 0 0",
//!     ])
//!     .unwrap();
//! assert_eq!(outcome.choice.action, Action::Left);
//! ```
//!
//! # Limitations
//!
//! - Each game looks only at the current turn; there is no lookahead.
//! - Rivals are only compared through their current scores.

pub mod aggregator;
pub mod config;
pub mod decision;
pub mod game_evaluator;
pub mod turn_evaluator;
