//! Diagnosing corrections against a known answer.

use std::fmt;

use log::{debug, info};

use crate::model::Model;
use crate::rank::best;
use crate::suggest::Potential;

/// Outcome of [`Model::check_known`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnownCheck {
    /// The ranker picked the expected term.
    Correct,
    /// The expected term was never trained.
    NotInDictionary { expected: String },
    /// The expected term is known but the cascade did not propose it.
    Missed {
        input: String,
        expected: String,
        expected_score: u64,
        best: Option<String>,
        candidates: Vec<Potential>,
    },
    /// The expected term was proposed but ranked below another candidate.
    Outranked {
        input: String,
        best: Option<Potential>,
        expected: Potential,
    },
}

impl KnownCheck {
    /// Returns true if the ranker picked the expected term.
    pub fn is_correct(&self) -> bool {
        matches!(self, KnownCheck::Correct)
    }
}

/// Plain-text rendering of a candidate: term, score and distance.
struct PotentialText<'a>(&'a Potential);

impl fmt::Display for PotentialText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} score {} distance {}",
            self.0.term, self.0.score, self.0.distance
        )
    }
}

impl fmt::Display for KnownCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownCheck::Correct => write!(f, "input correctly maps to the expected term"),
            KnownCheck::NotInDictionary { expected } => {
                write!(f, "\"{}\" - not in dictionary", expected)
            }
            KnownCheck::Missed {
                input,
                expected,
                expected_score,
                best,
                candidates,
            } => {
                write!(
                    f,
                    "\"{}\" - {} ({}) not in the suggestions. ({}) best option.",
                    input,
                    expected,
                    expected_score,
                    best.as_deref().unwrap_or("")
                )?;
                for pot in candidates {
                    write!(f, "\n\t{}", PotentialText(pot))?;
                }
                Ok(())
            }
            KnownCheck::Outranked {
                input,
                best,
                expected,
            } => {
                write!(f, "\"{}\" - (", input)?;
                match best {
                    Some(pot) => write!(f, "{}", PotentialText(pot))?,
                    None => write!(f, "nothing")?,
                }
                write!(
                    f,
                    ") suggested, should however be ({}).",
                    PotentialText(expected)
                )
            }
        }
    }
}

impl Model {
    /// Compare the ranker's choice for `input` with the `expected` answer.
    ///
    /// Runs the full cascade, logs a human-readable diagnosis and returns it.
    /// The model is left untouched.
    pub fn check_known(&self, input: &str, expected: &str) -> KnownCheck {
        let potentials = self.potentials(input, true);
        let chosen = best(input, &potentials, self.config().first_char_bonus);

        let report = if chosen.is_some_and(|pot| pot.term == expected) {
            KnownCheck::Correct
        } else if let Some(pot) = potentials.get(expected) {
            KnownCheck::Outranked {
                input: input.to_string(),
                best: chosen.cloned(),
                expected: pot.clone(),
            }
        } else if self.score(expected) > 0 {
            KnownCheck::Missed {
                input: input.to_string(),
                expected: expected.to_string(),
                expected_score: self.score(expected),
                best: chosen.map(|pot| pot.term.clone()),
                candidates: potentials.values().cloned().collect(),
            }
        } else {
            KnownCheck::NotInDictionary {
                expected: expected.to_string(),
            }
        };

        if report.is_correct() {
            debug!("\"{}\" - {}", input, report);
        } else {
            info!("{}", report);
        }
        report
    }
}
