/*!
Candidate generation.

A query runs through up to four cascading checks, cheapest first:

0. the query is itself a well-attested dictionary term
1. the query is a key of the deletion index (the user dropped characters)
2. a deletion variant of the query is a dictionary term (the user added characters)
3. a deletion variant of the query is a key of the deletion index
   (substitutions and transpositions), verified with a real edit distance

Without `exhaustive`, the cascade stops at the first check that finds
something. A term found by an earlier check is never replaced by a later one.
*/

use indexmap::IndexMap;
use log::trace;

use crate::deletes::edits_multi;
use crate::distance::levenshtein;
use crate::model::Model;

/// A query equal to a term trained more often than this is accepted as is.
const EXACT_MATCH_MIN_SCORE: u64 = 5;

/// Dictionary terms reached by deleting from the query must be longer than this.
const MIN_DELETION_MATCH_LEN: usize = 2;

/// Which check of the cascade produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// The query itself is a dictionary term.
    Exact = 0,
    /// The query is a deletion variant of the candidate.
    Index = 1,
    /// The candidate is a deletion variant of the query.
    Deletion = 2,
    /// The query and the candidate share a deletion variant.
    Verified = 3,
}

/// A scored correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Potential {
    pub term: String,
    /// Training count of the candidate.
    pub score: u64,
    /// Levenshtein distance from the normalized query.
    pub distance: usize,
    pub method: Method,
}

/// Candidates of one query, keyed by term, in discovery order.
pub type Potentials = IndexMap<String, Potential>;

fn insert_new(
    potentials: &mut Potentials,
    term: &str,
    score: u64,
    distance: usize,
    method: Method,
) {
    if !potentials.contains_key(term) {
        potentials.insert(
            term.to_string(),
            Potential {
                term: term.to_string(),
                score,
                distance,
                method,
            },
        );
    }
}

impl Model {
    /// Collect correction candidates for `input`.
    ///
    /// The input is lower-cased before any lookup. With `exhaustive` all four
    /// checks run; otherwise the first productive check ends the search.
    pub fn potentials(&self, input: &str, exhaustive: bool) -> Potentials {
        let input = input.to_lowercase();
        let depth = self.config().depth;
        let mut potentials = Potentials::with_capacity(20);

        let score = self.score(&input);
        if score > EXACT_MATCH_MIN_SCORE {
            insert_new(&mut potentials, &input, score, 0, Method::Exact);
            if !exhaustive {
                trace!("'{}' is a known term", input);
                return potentials;
            }
        }

        if let Some(terms) = self.index_entry(&input) {
            for term in terms {
                if !potentials.contains_key(term.as_str()) {
                    let distance = levenshtein(&input, term);
                    insert_new(
                        &mut potentials,
                        term,
                        self.score(term),
                        distance,
                        Method::Index,
                    );
                }
            }
            if !exhaustive && !terms.is_empty() {
                trace!("'{}' matched {} indexed terms", input, terms.len());
                return potentials;
            }
        }

        let edits = edits_multi(&input, depth);
        let mut found_deletion = false;
        for edit in &edits {
            let score = self.score(edit);
            if score > 0 && edit.chars().count() > MIN_DELETION_MATCH_LEN {
                if !potentials.contains_key(edit.as_str()) {
                    let distance = levenshtein(&input, edit);
                    insert_new(
                        &mut potentials,
                        edit,
                        score,
                        distance,
                        Method::Deletion,
                    );
                }
                found_deletion = true;
            }
        }
        if found_deletion && !exhaustive {
            trace!("'{}' contains dictionary terms", input);
            return potentials;
        }

        for edit in &edits {
            let Some(terms) = self.index_entry(edit) else {
                continue;
            };
            for term in terms {
                if potentials.contains_key(term.as_str()) {
                    continue;
                }
                // The index over-approximates; keep only real near misses.
                let distance = levenshtein(&input, term);
                if distance <= depth + 1 {
                    insert_new(
                        &mut potentials,
                        term,
                        self.score(term),
                        distance,
                        Method::Verified,
                    );
                }
            }
        }
        potentials
    }

    /// Candidate terms for `input`, in discovery order.
    pub fn suggestions(&self, input: &str, exhaustive: bool) -> Vec<String> {
        self.potentials(input, exhaustive).into_keys().collect()
    }
}
