use fuzzyspell::corpus::tokenize;
use fuzzyspell::{include_corpus, ModelConfig};

#[test]
fn test_include_macro_counts() {
    // Tokenize tests/data/corpus.txt at compile time
    let corpus = include_corpus!("tests/data/corpus.txt", max_terms = 1000);

    assert_eq!(corpus.len(), 45);
    assert_eq!(corpus.score("hello"), 6);
    assert_eq!(corpus.score("the"), 10);
    assert_eq!(corpus.score("spelling"), 4);
    assert_eq!(corpus.score("absent"), 0);

    // Punctuation is trimmed and case is folded
    assert!(!corpus.contains("hello,"));
    assert!(!corpus.contains("Hello"));

    let first: Vec<&str> = corpus.terms().take(3).map(|(term, _)| term).collect();
    assert_eq!(first, vec!["hello", "world", "the"]);
}

#[test]
fn test_include_macro_case_sensitive() {
    let corpus = include_corpus!("tests/data/corpus.txt", lowercase = false);

    assert_eq!(corpus.score("Hello"), 4);
    assert_eq!(corpus.score("hello"), 1);
    assert_eq!(corpus.score("HELLO"), 1);
}

#[test]
fn test_include_macro_to_model() {
    let corpus = include_corpus!("tests/data/corpus.txt");
    let model = corpus.to_model(ModelConfig::default()).unwrap();

    assert_eq!(model.score("correction"), 5);
    assert_eq!(model.max_count(), 10);

    assert_eq!(model.spell_check("helo").as_deref(), Some("hello"));
    assert_eq!(model.spell_check("speling").as_deref(), Some("spelling"));
    assert_eq!(model.spell_check("corection").as_deref(), Some("correction"));
    assert_eq!(model.spell_check("The").as_deref(), Some("the"));
}

#[test]
fn test_include_macro_trim_matches_runtime_tokenizer() {
    // Every trimmed character appears at both ends of a word
    let corpus = include_corpus!("tests/data/trim.txt");

    let mut runtime: Vec<(String, u64)> = Vec::new();
    for token in tokenize(include_str!("data/trim.txt")) {
        match runtime.iter().position(|(term, _)| *term == token) {
            Some(pos) => runtime[pos].1 += 1,
            None => runtime.push((token, 1)),
        }
    }

    let embedded: Vec<(String, u64)> = corpus
        .terms()
        .map(|(term, count)| (term.to_string(), count))
        .collect();
    assert_eq!(embedded, runtime);
    assert_eq!(
        embedded,
        vec![
            ("edge".to_string(), 3),
            ("x".to_string(), 1),
            ("don't".to_string(), 1),
            ("x-ray".to_string(), 1),
        ]
    );
}
