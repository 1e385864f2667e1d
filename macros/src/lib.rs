use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

/// Characters trimmed from both ends of every word. Keep in sync with
/// `fuzzyspell::corpus::TRIM_CHARS`.
const TRIM_CHARS: &[char] = &['=', '+', '\'', '|', '_', ',', '-', '!', ';', ':', '"', '?', '.'];

/// Macro input representation:
/// include_corpus!("path/to/corpus.txt", lowercase = true, max_terms = 100000)
struct IncludeCorpusArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeCorpusArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        while input.parse::<Token![,]>().is_ok() {
            // trailing comma
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;

            assignments.push((ident, value));
        }

        Ok(IncludeCorpusArgs { path, assignments })
    }
}

fn bool_arg(name: &str, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{} must be a boolean literal", name),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{} must be a boolean literal expression", name),
        )),
    }
}

fn usize_arg(name: &str, expr: &Expr) -> syn::Result<usize> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Int(li) => li.base10_parse::<usize>(),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{} must be an integer literal", name),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{} must be an integer literal expression", name),
        )),
    }
}

/// Term counts in first-occurrence order.
fn count_terms<R: BufRead>(reader: R, lowercase: bool, path: &Path) -> Vec<(String, u64)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for (lineno, line_res) in reader.lines().enumerate() {
        let line = line_res.unwrap_or_else(|e| {
            panic!(
                "include_corpus!: error reading line {} of {}: {}",
                lineno + 1,
                path.display(),
                e
            )
        });
        for word in line.split_whitespace() {
            let trimmed = word.trim_matches(TRIM_CHARS);
            if trimmed.is_empty() {
                continue;
            }
            let term = if lowercase {
                trimmed.to_lowercase()
            } else {
                trimmed.to_string()
            };
            match positions.get(&term) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(term.clone(), counts.len());
                    counts.push((term, 1));
                }
            }
        }
    }
    counts
}

/// include_corpus!("path/to/corpus.txt", lowercase = true, max_terms = 100000)
///
/// Reads a free-text corpus at compile time, splits it into words with the
/// same rules as `fuzzyspell::corpus::tokenize`, counts them, and evaluates to
/// a `fuzzyspell::EmbeddedCorpus` backed by two statics:
///  - COUNTS_PHF: ::phf::Map<&'static str, u64> (term -> count)
///  - ORDER: &'static [&'static str] (terms in first-occurrence order)
///
/// The path is resolved against `CARGO_MANIFEST_DIR`. `lowercase` defaults to
/// true. `max_terms` guards against embedding an unexpectedly large vocabulary:
/// the macro aborts if the corpus has more distinct terms than that.
#[proc_macro]
pub fn include_corpus(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeCorpusArgs);

    let mut lowercase: bool = true;
    let mut max_terms: usize = 100_000;

    for (ident, expr) in args.assignments.iter() {
        let name = ident.to_string();
        let parsed = match name.as_str() {
            "lowercase" => bool_arg(&name, expr).map(|v| lowercase = v),
            "max_terms" => usize_arg(&name, expr).map(|v| max_terms = v),
            _ => Err(syn::Error::new_spanned(
                ident,
                format!("unknown argument to include_corpus: {}", name),
            )),
        };
        if let Err(err) = parsed {
            return err.to_compile_error().into();
        }
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR environment variable not set");
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            let msg = format!(
                "include_corpus!: failed to open corpus file '{}': {}",
                file_path.display(),
                e
            );
            return syn::Error::new_spanned(&args.path, msg)
                .to_compile_error()
                .into();
        }
    };

    let counts = count_terms(io::BufReader::new(file), lowercase, &file_path);

    if counts.len() > max_terms {
        let msg = format!(
            "include_corpus!: corpus has {} distinct terms which exceeds max_terms = {}. Consider increasing `max_terms`.",
            counts.len(),
            max_terms
        );
        return syn::Error::new_spanned(&args.path, msg)
            .to_compile_error()
            .into();
    }

    let count_entries = counts.iter().map(|(term, count)| {
        let key = LitStr::new(term, Span::call_site());
        let val = syn::LitInt::new(&count.to_string(), Span::call_site());
        quote! {
            #key => #val
        }
    });

    let order_entries = counts
        .iter()
        .map(|(term, _)| LitStr::new(term, Span::call_site()));

    let expanded = quote! {
        {
            static COUNTS_PHF: ::phf::Map<&'static str, u64> = ::phf::phf_map! {
                #(#count_entries, )*
            };

            static ORDER: &[&str] = &[#( #order_entries ),*];

            ::fuzzyspell::EmbeddedCorpus::from_phf(&COUNTS_PHF, ORDER)
        }
    };

    TokenStream::from(expanded)
}
