//! Combining per-game decisions into the single action of a turn.
//!
//! 1. **Forced priority** - the first decision (in game order) that demands
//!    priority and has an action wins outright.
//! 2. **Majority** - otherwise the most frequent recommended action wins; on a
//!    tie the action seen first in game order wins.
//! 3. **Default** - with no recommendation at all, [`Action::DEFAULT`] is played.

use arrayvec::ArrayVec;
use olympics_engine::{Action, GameKind};
use serde::{Deserialize, Serialize};

use crate::decision::Decision;

/// Which rule selected the action of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Verdict {
    /// A game demanded priority.
    Forced { game: GameKind },
    /// Most frequent recommendation, with its number of votes.
    Majority { votes: usize },
    /// No game had an opinion.
    Default,
}

/// The action chosen for a turn and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub action: Action,
    pub verdict: Verdict,
}

impl Choice {
    /// The default action, used when nothing better is known.
    pub const DEFAULT: Self = Self {
        action: Action::DEFAULT,
        verdict: Verdict::Default,
    };
}

/// Selects the action for a turn from decisions given in game order.
#[must_use]
pub fn aggregate(decisions: &[Decision]) -> Choice {
    if let Some((game, action)) = decisions
        .iter()
        .filter(|d| d.forced_priority)
        .find_map(|d| d.action.map(|action| (d.game, action)))
    {
        return Choice {
            action,
            verdict: Verdict::Forced { game },
        };
    }

    match mode(decisions.iter().filter_map(|d| d.action)) {
        Some((action, votes)) => Choice {
            action,
            verdict: Verdict::Majority { votes },
        },
        None => Choice::DEFAULT,
    }
}

/// Returns the most frequent action and its count.
///
/// Among equally frequent actions the one that appears first wins. Returns
/// `None` for an empty input.
#[must_use]
pub fn mode<I>(actions: I) -> Option<(Action, usize)>
where
    I: IntoIterator<Item = Action>,
{
    let mut counts = [0_usize; Action::LEN];
    let mut first_seen = ArrayVec::<Action, { Action::LEN }>::new();
    for action in actions {
        if counts[action.ordinal()] == 0 {
            first_seen.push(action);
        }
        counts[action.ordinal()] += 1;
    }

    let mut best: Option<(Action, usize)> = None;
    for action in first_seen {
        let count = counts[action.ordinal()];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((action, count));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(game: GameKind, action: Option<Action>, forced_priority: bool) -> Decision {
        Decision {
            action,
            forced_priority,
            ..Decision::abstain(game)
        }
    }

    fn unforced(actions: [Option<Action>; 4]) -> Vec<Decision> {
        GameKind::ALL
            .into_iter()
            .zip(actions)
            .map(|(game, action)| decision(game, action, false))
            .collect()
    }

    mod forced_priority {
        use super::*;

        #[test]
        fn test_forced_game_overrides_majority() {
            let mut decisions = unforced([
                Some(Action::Right),
                Some(Action::Left),
                Some(Action::Down),
                None,
            ]);
            decisions[3] = decision(GameKind::Diving, Some(Action::Up), true);

            let choice = aggregate(&decisions);
            assert_eq!(choice.action, Action::Up);
            assert_eq!(
                choice.verdict,
                Verdict::Forced {
                    game: GameKind::Diving
                }
            );
        }

        #[test]
        fn test_first_forced_game_wins() {
            let decisions = vec![
                decision(GameKind::Hurdle, Some(Action::Down), false),
                decision(GameKind::Archery, Some(Action::Left), true),
                decision(GameKind::Skating, Some(Action::Down), false),
                decision(GameKind::Diving, Some(Action::Up), true),
            ];
            assert_eq!(aggregate(&decisions).action, Action::Left);
        }

        #[test]
        fn test_forced_without_action_is_skipped() {
            let decisions = vec![
                decision(GameKind::Hurdle, None, true),
                decision(GameKind::Archery, Some(Action::Left), false),
                decision(GameKind::Skating, Some(Action::Down), true),
                decision(GameKind::Diving, Some(Action::Up), false),
            ];
            let choice = aggregate(&decisions);
            assert_eq!(choice.action, Action::Down);
            assert!(choice.verdict.is_forced());
        }
    }

    mod majority {
        use super::*;

        #[test]
        fn test_two_way_majority() {
            let decisions = unforced([
                Some(Action::Right),
                Some(Action::Right),
                Some(Action::Left),
                Some(Action::Down),
            ]);
            let choice = aggregate(&decisions);
            assert_eq!(choice.action, Action::Right);
            assert_eq!(choice.verdict, Verdict::Majority { votes: 2 });
        }

        #[test]
        fn test_tie_goes_to_first_seen() {
            let decisions = unforced([
                Some(Action::Down),
                Some(Action::Up),
                Some(Action::Up),
                Some(Action::Down),
            ]);
            assert_eq!(aggregate(&decisions).action, Action::Down);

            let decisions = unforced([
                Some(Action::Left),
                Some(Action::Up),
                Some(Action::Down),
                Some(Action::Right),
            ]);
            assert_eq!(aggregate(&decisions).action, Action::Left);
        }

        #[test]
        fn test_abstentions_do_not_vote() {
            let decisions = unforced([None, Some(Action::Up), None, Some(Action::Left)]);
            let choice = aggregate(&decisions);
            assert_eq!(choice.action, Action::Up);
            assert_eq!(choice.verdict, Verdict::Majority { votes: 1 });
        }
    }

    #[test]
    fn test_no_opinion_plays_default() {
        let decisions = unforced([None; 4]);
        assert_eq!(aggregate(&decisions), Choice::DEFAULT);
        assert_eq!(aggregate(&[]).action, Action::Right);
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode([]), None);
        assert_eq!(mode([Action::Left]), Some((Action::Left, 1)));
        assert_eq!(
            mode([Action::Up, Action::Left, Action::Left, Action::Up, Action::Left]),
            Some((Action::Left, 3))
        );
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&Verdict::Forced {
            game: GameKind::Diving,
        })
        .unwrap();
        assert_eq!(json, r#"{"rule":"forced","game":"DIVING"}"#);
        let json = serde_json::to_string(&Verdict::Default).unwrap();
        assert_eq!(json, r#"{"rule":"default"}"#);
    }
}
