/*!
Corpus counts embedded at compile time.

The `include_corpus!` proc-macro (in the `fuzzyspell_macros` crate) tokenizes a
corpus file while the crate compiles and emits:
- a `::phf::Map<&'static str, u64>` mapping each term to its count
- a `&'static [&'static str]` listing the terms in first-occurrence order

and wraps them in an [`EmbeddedCorpus`]. Turning that into a [`Model`] replays
the counts, so the deletion index is still built at runtime.
*/

use crate::config::ModelConfig;
use crate::error::Result;
use crate::model::Model;

/// Term counts of a corpus embedded in the binary.
pub struct EmbeddedCorpus {
    counts: &'static ::phf::Map<&'static str, u64>,
    order: &'static [&'static str],
}

impl EmbeddedCorpus {
    /// Construct from generated statics. Every term in `order` must be a key
    /// of `counts`.
    pub fn from_phf(
        counts: &'static ::phf::Map<&'static str, u64>,
        order: &'static [&'static str],
    ) -> Self {
        Self { counts, order }
    }

    /// Occurrences of `term` in the corpus, 0 if absent.
    pub fn score(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Terms with their counts, in the order they first appear in the corpus.
    pub fn terms(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.order.iter().map(move |&term| (term, self.score(term)))
    }

    /// Train a fresh model with these counts.
    ///
    /// Terms are added in first-occurrence order, so entries of the deletion
    /// index list terms in that order.
    pub fn to_model(&self, config: ModelConfig) -> Result<Model> {
        let mut model = Model::with_config(config)?;
        for (term, count) in self.terms() {
            model.add_count(term, count);
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COUNTS: ::phf::Map<&'static str, u64> = ::phf::phf_map! {
        "the" => 7,
        "cat" => 5,
        "sat" => 1,
    };

    static ORDER: &[&str] = &["the", "cat", "sat"];

    #[test]
    fn test_accessors() {
        let corpus = EmbeddedCorpus::from_phf(&COUNTS, ORDER);
        assert_eq!(corpus.len(), 3);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.score("cat"), 5);
        assert_eq!(corpus.score("dog"), 0);
        assert!(corpus.contains("sat"));

        let terms: Vec<_> = corpus.terms().collect();
        assert_eq!(terms, vec![("the", 7), ("cat", 5), ("sat", 1)]);
    }

    #[test]
    fn test_to_model() {
        let corpus = EmbeddedCorpus::from_phf(&COUNTS, ORDER);
        let model = corpus.to_model(ModelConfig::default()).unwrap();
        assert_eq!(model.score("the"), 7);
        assert_eq!(model.max_count(), 7);
        // "sat" is below the default threshold
        assert!(model.index_entry("ca").is_some());
        assert!(model.index_entry("st").is_none());

        let invalid = ModelConfig {
            depth: 0,
            ..Default::default()
        };
        assert!(corpus.to_model(invalid).is_err());
    }
}
