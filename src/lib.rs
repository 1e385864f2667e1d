//! fuzzyspell - frequency-trained spelling correction
//!
//! A [`Model`] counts the terms it is trained on. Once a term has been seen
//! often enough, every string reachable from it by deleting up to `depth`
//! characters is indexed back to it. Queries delete characters too, and the
//! two sides meet in the index, so corrections are found without scanning the
//! vocabulary.
//!
//! Examples
//!
//! - Runtime training:
//!
//! ```
//! use fuzzyspell::{corpus, Model};
//!
//! let mut model = Model::new();
//! model.train_many(corpus::tokenize("Hello hello HELLO, hello! Hello world."));
//! assert_eq!(model.spell_check("helo").as_deref(), Some("hello"));
//! ```
//!
//! - Compile-time embedding of a corpus file (path relative to the crate root):
//!
//! ```ignore
//! use fuzzyspell::{include_corpus, ModelConfig};
//!
//! let corpus = include_corpus!("data/corpus.txt", max_terms = 50000);
//! let model = corpus.to_model(ModelConfig::default())?;
//! let best = model.spell_check("speling");
//! ```

pub mod check;
pub mod config;
pub mod corpus;
pub mod deletes;
pub mod distance;
pub mod embedded;
pub mod error;
pub mod model;
pub mod rank;
pub mod suggest;

/// Re-export commonly used types.
pub use check::KnownCheck;
pub use config::ModelConfig;
pub use deletes::{edits1, edits_multi};
pub use distance::levenshtein;
pub use embedded::EmbeddedCorpus;
pub use error::{FuzzyError, Result};
pub use model::Model;
pub use suggest::{Method, Potential, Potentials};

/// Re-export the compile-time corpus macro from the proc-macro crate.
///
/// The proc-macro crate is the workspace member `fuzzyspell-macros`; the
/// expansion refers to `::phf`, so callers need `phf` as a dependency.
pub use fuzzyspell_macros::include_corpus;
