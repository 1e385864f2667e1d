/*!
Picking one correction out of a bag of candidates.

Candidates are scanned by edit distance, nearest first. Within a distance the
highest training count wins, with a strong multiplicative boost for candidates
that start with the same character as the query: people rarely get the first
letter wrong. Equal boosted scores go to the lexically smallest term so the
outcome never depends on discovery order.
*/

use crate::model::Model;
use crate::suggest::{Potential, Potentials};

/// Largest edit distance the ranker will consider.
pub const MAX_RANKED_DISTANCE: usize = 3;

/// Boosted score of a candidate for `first`, the query's first character.
fn weighted_score(pot: &Potential, first: Option<char>, bonus: u64) -> u64 {
    if first.is_some() && pot.term.chars().next() == first {
        pot.score.saturating_mul(bonus.saturating_add(1))
    } else {
        pot.score
    }
}

/// Select the most likely correction of `input` from `potentials`.
///
/// A candidate at distance 0 is returned straight away. Returns `None` when
/// no candidate within [`MAX_RANKED_DISTANCE`] has a positive score.
pub fn best<'a>(input: &str, potentials: &'a Potentials, bonus: u64) -> Option<&'a Potential> {
    if let Some(exact) = potentials
        .values()
        .filter(|pot| pot.distance == 0)
        .min_by(|a, b| a.term.cmp(&b.term))
    {
        return Some(exact);
    }

    let first = input.to_lowercase().chars().next();
    for distance in 1..=MAX_RANKED_DISTANCE {
        let mut best: Option<(&Potential, u64)> = None;
        for pot in potentials.values().filter(|pot| pot.distance == distance) {
            let weighted = weighted_score(pot, first, bonus);
            if weighted == 0 {
                continue;
            }
            best = match best {
                Some((cur, cur_weighted))
                    if cur_weighted > weighted
                        || (cur_weighted == weighted && cur.term <= pot.term) =>
                {
                    Some((cur, cur_weighted))
                }
                _ => Some((pot, weighted)),
            };
        }
        if let Some((pot, _)) = best {
            return Some(pot);
        }
    }
    None
}

impl Model {
    /// Most likely spelling of `input`, or `None` when there is no confident
    /// correction.
    ///
    /// Runs the cascade non-exhaustively, so a well-known word comes back
    /// unchanged without any index lookups.
    pub fn spell_check(&self, input: &str) -> Option<String> {
        let potentials = self.potentials(input, false);
        best(input, &potentials, self.config().first_char_bonus).map(|pot| pot.term.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::Method;

    fn bag(items: &[(&str, u64, usize)]) -> Potentials {
        items
            .iter()
            .map(|&(term, score, distance)| {
                (
                    term.to_string(),
                    Potential {
                        term: term.to_string(),
                        score,
                        distance,
                        method: Method::Verified,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_bag() {
        assert!(best("helo", &Potentials::new(), 100).is_none());
    }

    #[test]
    fn test_distance_zero_wins_outright() {
        let potentials = bag(&[("help", 1000, 1), ("helo", 1, 0)]);
        assert_eq!(best("helo", &potentials, 100).unwrap().term, "helo");
    }

    #[test]
    fn test_nearer_tier_beats_frequency() {
        let potentials = bag(&[("hello", 5, 1), ("halo", 5000, 2)]);
        assert_eq!(best("helo", &potentials, 100).unwrap().term, "hello");
    }

    #[test]
    fn test_higher_score_wins_within_tier() {
        let potentials = bag(&[("hell", 5, 1), ("hello", 50, 1)]);
        assert_eq!(best("helo", &potentials, 100).unwrap().term, "hello");
    }

    #[test]
    fn test_first_char_bonus_in_either_order() {
        let potentials = bag(&[("cat", 10, 1), ("bat", 10, 1)]);
        assert_eq!(best("bxt", &potentials, 100).unwrap().term, "bat");

        let potentials = bag(&[("bat", 10, 1), ("cat", 10, 1)]);
        assert_eq!(best("bxt", &potentials, 100).unwrap().term, "bat");

        // a large enough frequency gap still overrides the bonus
        let potentials = bag(&[("cat", 5000, 1), ("bat", 10, 1)]);
        assert_eq!(best("bxt", &potentials, 100).unwrap().term, "cat");
    }

    #[test]
    fn test_ties_break_lexically() {
        let potentials = bag(&[("lost", 10, 1), ("last", 10, 1)]);
        assert_eq!(best("lxst", &potentials, 100).unwrap().term, "last");
    }

    #[test]
    fn test_beyond_max_distance_ignored() {
        let potentials = bag(&[("faraway", 100, 4)]);
        assert!(best("far", &potentials, 100).is_none());
    }

    #[test]
    fn test_spell_check() {
        let mut model = Model::new();
        model.add_count("hello", 20);
        model.add_count("world", 8);
        assert_eq!(model.spell_check("helo").as_deref(), Some("hello"));
        assert_eq!(model.spell_check("HELLO").as_deref(), Some("hello"));
        assert_eq!(model.spell_check("wrld").as_deref(), Some("world"));
        assert_eq!(model.spell_check("zzzzzz"), None);
    }

    #[test]
    fn test_zero_scores_skipped() {
        let potentials = bag(&[("ghost", 0, 1), ("gust", 3, 2)]);
        assert_eq!(best("gost", &potentials, 100).unwrap().term, "gust");
    }
}
