// porter-freq: Convert text to a stem frequency list.
//
// Reads running text from stdin, tokenizes it, stems each word token and
// prints every stem with the number of words that reduced to it, most
// frequent first. Ties are ordered alphabetically.
//
// Usage:
//   porter-freq [OPTIONS]
//
// Options:
//   --top N                 Print only the N most frequent stems
//   --keep-case             Keep the case pattern of each word in its stem
//   --non-ascii POLICY      reject | skip | stem (default: reject)
//   --min-length N          Minimum word length for stemming (default: 3)
//   -h, --help              Print help

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use porter_core::token::TokenType;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if porter_cli::wants_help(&args) {
        println!("porter-freq: Convert text to a stem frequency list.");
        println!();
        println!("Usage: porter-freq [OPTIONS]");
        println!();
        println!("Reads text from stdin, tokenizes words, and prints each");
        println!("stem with its count, most frequent first. Words that cannot");
        println!("be stemmed are counted separately and reported at the end.");
        println!();
        println!("Options:");
        println!("  --top N                 Print only the N most frequent stems");
        println!("{}", porter_cli::STEM_OPTIONS_HELP);
        println!("  -h, --help              Print this help");
        return;
    }

    porter_cli::init_tracing();

    let (options, args) =
        porter_cli::parse_stem_options(&args).unwrap_or_else(|e| porter_cli::fatal(&e));

    let mut top: Option<usize> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--top" => {
                let val = iter
                    .next()
                    .unwrap_or_else(|| porter_cli::fatal("--top requires a value"));
                top = Some(
                    porter_cli::parse_number("--top", val)
                        .unwrap_or_else(|e| porter_cli::fatal(&e)),
                );
            }
            other => porter_cli::fatal(&format!("unexpected argument: {other}")),
        }
    }

    let handle = porter_cli::build_handle(options);

    let stdin = io::stdin();
    let mut stem_freqs: HashMap<String, u64> = HashMap::new();
    let mut unstemmed: HashMap<String, u64> = HashMap::new();
    let mut words = 0u64;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for token in handle.tokens(&line) {
            if token.token_type != TokenType::Word {
                continue;
            }
            words += 1;
            match handle.stem(&token.text) {
                Ok(stem) => *stem_freqs.entry(stem).or_insert(0) += 1,
                Err(e) => {
                    tracing::debug!(word = %token.text, error = %e, "not stemmed");
                    *unstemmed.entry(token.text).or_insert(0) += 1;
                }
            }
        }
    }
    tracing::debug!(words, stems = stem_freqs.len(), "text read");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (stem, freq) in sorted_by_frequency(stem_freqs, top) {
        let _ = writeln!(out, "{stem}\t{freq}");
    }
    let _ = out.flush();

    if !unstemmed.is_empty() {
        eprintln!("=== Words not stemmed ===");
        for (word, freq) in sorted_by_frequency(unstemmed, None) {
            eprintln!("{word}\t{freq}");
        }
    }
}

/// Sort by frequency (descending), then alphabetically, keeping at most
/// `limit` entries.
fn sorted_by_frequency(freqs: HashMap<String, u64>, limit: Option<usize>) -> Vec<(String, u64)> {
    let mut list: Vec<(String, u64)> = freqs.into_iter().collect();
    list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(n) = limit {
        list.truncate(n);
    }
    list
}
