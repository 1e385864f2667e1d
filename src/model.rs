/*!
Frequency model and deletion index.

The model keeps:
- `counts`: term -> number of times it was trained
- `index`: deletion variant -> terms whose deletion closure contains it

A term only enters the index once, at the moment its count crosses the
configured threshold. Rarely seen words therefore never produce suggestions,
which keeps the index small and filters out corpus noise. Nothing is ever
removed from the index.
*/

use std::collections::HashMap;
use std::io::BufRead;

use log::debug;

use crate::config::{validate_depth, validate_threshold, ModelConfig};
use crate::corpus;
use crate::deletes::edits_multi;
use crate::error::Result;

/// Shorter variants are never indexed; they would map to a large part of
/// the vocabulary.
const MIN_INDEXED_VARIANT_LEN: usize = 2;

/// A trainable spelling model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    config: ModelConfig,
    counts: HashMap<String, u64>,
    max_count: u64,
    index: HashMap<String, Vec<String>>,
}

impl Model {
    /// Create an empty model with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty model with a validated configuration.
    pub fn with_config(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Change the number of deletion rounds.
    ///
    /// Terms indexed before the change keep the variants of the old depth.
    pub fn set_depth(&mut self, depth: usize) -> Result<()> {
        validate_depth(depth)?;
        self.config.depth = depth;
        Ok(())
    }

    /// Change the count at which terms get indexed.
    pub fn set_threshold(&mut self, threshold: u64) -> Result<()> {
        validate_threshold(threshold)?;
        self.config.threshold = threshold;
        Ok(())
    }

    /// Change the ranking boost for candidates sharing the query's first character.
    pub fn set_first_char_bonus(&mut self, bonus: u64) {
        self.config.first_char_bonus = bonus;
    }

    /// Record one occurrence of `term`.
    ///
    /// The term is stored as given; tokenizing and case folding are the
    /// caller's job (see [`corpus::tokenize`]).
    pub fn train(&mut self, term: &str) {
        self.add_count(term, 1);
    }

    /// Train every term in order.
    pub fn train_many<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.train(term.as_ref());
        }
    }

    /// Tokenize text from `reader` and train every token. Returns the number
    /// of tokens trained.
    pub fn train_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let tokens = corpus::read_tokens(reader)?;
        let trained = tokens.len();
        self.train_many(tokens);
        Ok(trained)
    }

    /// Record `n` occurrences of `term` at once.
    ///
    /// The threshold crossing is detected from the counts before and after
    /// the update, so a bulk add that jumps over the threshold still indexes
    /// the term, and it is indexed exactly once.
    pub fn add_count(&mut self, term: &str, n: u64) {
        if n == 0 {
            return;
        }
        let count = self.counts.entry(term.to_string()).or_insert(0);
        let before = *count;
        *count = before.saturating_add(n);
        let after = *count;

        if after > self.max_count {
            self.max_count = after;
        }

        let threshold = self.config.threshold;
        if before < threshold && after >= threshold {
            self.index_term(term);
        }
    }

    fn index_term(&mut self, term: &str) {
        let mut added = 0usize;
        for variant in edits_multi(term, self.config.depth) {
            if variant.chars().count() < MIN_INDEXED_VARIANT_LEN {
                continue;
            }
            let terms = self.index.entry(variant).or_default();
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
                added += 1;
            }
        }
        debug!("indexed '{}' under {} deletion variants", term, added);
    }

    /// Number of times `term` was trained, 0 if never.
    pub fn score(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Largest count any term has reached.
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Number of distinct trained terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been trained.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Terms indexed under a deletion variant, in the order they were indexed.
    pub fn index_entry(&self, variant: &str) -> Option<&[String]> {
        self.index.get(variant).map(Vec::as_slice)
    }

    /// Number of distinct deletion variants in the index.
    pub fn index_len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_training() {
        let mut model = Model::new();
        assert_eq!(model.score("hello"), 0);
        model.train_many(["hello", "world", "hello"]);
        assert_eq!(model.score("hello"), 2);
        assert_eq!(model.score("world"), 1);
        assert_eq!(model.len(), 2);
        assert_eq!(model.max_count(), 2);
    }

    #[test]
    fn test_index_built_at_threshold() {
        let mut model = Model::new();
        for _ in 0..3 {
            model.train("hello");
        }
        assert_eq!(model.index_len(), 0);

        model.train("hello");
        assert_eq!(model.index_entry("helo").unwrap(), ["hello".to_string()]);
        assert_eq!(model.index_entry("hllo").unwrap(), ["hello".to_string()]);
        assert_eq!(model.index_entry("hlo").unwrap(), ["hello".to_string()]);
        assert!(model.index_entry("hello").is_some());

        let indexed = model.index_len();
        model.train("hello");
        assert_eq!(model.index_len(), indexed);
        assert_eq!(model.index_entry("helo").unwrap().len(), 1);
    }

    #[test]
    fn test_short_variants_not_indexed() {
        let mut model = Model::with_config(ModelConfig::new(2, 1).unwrap()).unwrap();
        model.train("abc");
        assert!(model.index_entry("ab").is_some());
        assert!(model.index_entry("a").is_none());
        assert!(model.index_entry("").is_none());
    }

    #[test]
    fn test_shared_variant_lists_terms_in_order() {
        let mut model = Model::with_config(ModelConfig::new(1, 1).unwrap()).unwrap();
        model.train("cart");
        model.train("card");
        assert_eq!(
            model.index_entry("car").unwrap(),
            ["cart".to_string(), "card".to_string()]
        );
    }

    #[test]
    fn test_add_count_jumps_threshold_once() {
        let mut model = Model::new();
        model.add_count("hello", 10);
        assert_eq!(model.score("hello"), 10);
        assert_eq!(model.max_count(), 10);
        assert_eq!(model.index_entry("helo").unwrap(), ["hello".to_string()]);

        let indexed = model.index_len();
        model.add_count("hello", 10);
        model.add_count("hello", 0);
        assert_eq!(model.index_len(), indexed);
    }

    #[test]
    fn test_set_depth_and_threshold_validate() {
        let mut model = Model::new();
        assert!(model.set_depth(0).is_err());
        assert!(model.set_threshold(0).is_err());
        model.set_depth(1).unwrap();
        model.set_threshold(2).unwrap();
        assert_eq!(model.config().depth, 1);
        assert_eq!(model.config().threshold, 2);
    }

    #[test]
    fn test_train_reader() {
        let text = "The cat, the hat.\n\"The\" end!";
        let mut model = Model::new();
        let trained = model.train_reader(text.as_bytes()).unwrap();
        assert_eq!(trained, 6);
        assert_eq!(model.score("the"), 3);
        assert_eq!(model.score("hat"), 1);
    }
}
