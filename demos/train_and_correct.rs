/*!
train_and_correct.rs

Example demonstrating:
- compile-time corpus embedding using the `include_corpus!` proc-macro
- runtime training from a reader with `Model::train_reader`
- the correction APIs: `spell_check`, `suggestions` and `check_known`

Run with:
    RUST_LOG=debug cargo run --example train_and_correct

The macro path is evaluated relative to the crate root at compile time.
*/

use fuzzyspell::{include_corpus, Model, ModelConfig};

fn print_corrections(model: &Model, inputs: &[&str]) {
    for input in inputs {
        let best = model.spell_check(input);
        let candidates = model.suggestions(input, true);
        println!(
            "  {:<12} -> {:<12} candidates: {}",
            input,
            best.as_deref().unwrap_or("(none)"),
            candidates.join(", ")
        );
    }
}

fn example_embedded() -> fuzzyspell::Result<()> {
    println!("=== Model from embedded corpus ===");

    let corpus = include_corpus!("tests/data/corpus.txt", max_terms = 1000);
    println!("{} distinct terms embedded", corpus.len());

    let model = corpus.to_model(ModelConfig::default())?;
    print_corrections(&model, &["helo", "speling", "corection", "qick", "wrds"]);

    let report = model.check_known("aple", "apple");
    println!("check 'aple' against 'apple': {}", report);
    Ok(())
}

fn example_runtime() -> fuzzyspell::Result<()> {
    println!("\n=== Model trained at runtime ===");

    let text = "the rain in spain stays mainly in the plain \
                the rain the rain the rain spain spain spain";
    // Index every word that was seen at least twice
    let mut model = Model::with_config(ModelConfig::new(2, 2)?)?;
    let trained = model.train_reader(text.as_bytes())?;
    println!("trained {} tokens, {} distinct terms", trained, model.len());

    print_corrections(&model, &["rian", "spian", "tha", "plian"]);
    Ok(())
}

fn main() -> fuzzyspell::Result<()> {
    env_logger::init();

    println!("fuzzyspell example: embedded corpus and runtime training\n");

    example_embedded()?;
    example_runtime()?;

    println!("\nDone.");
    Ok(())
}
