// porter-stem: Stem English words.
//
// Stems each WORD argument, or each line of stdin when no words are given,
// and prints one stem per line.
//
// Usage:
//   porter-stem [OPTIONS] [WORD...]
//
// Options:
//   --pairs                 Print "word<TAB>stem" instead of just the stem
//   --keep-case             Keep the case pattern of each word in its stem
//   --non-ascii POLICY      reject | skip | stem (default: reject)
//   --min-length N          Minimum word length for stemming (default: 3)
//   -h, --help              Print help

use std::io::{self, BufRead, Write};
use std::process;

use porter_stem::handle::StemHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if porter_cli::wants_help(&args) {
        println!("porter-stem: Stem English words with the Porter algorithm.");
        println!();
        println!("Usage: porter-stem [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, stems each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --pairs                 Print \"word<TAB>stem\" instead of just the stem");
        println!("{}", porter_cli::STEM_OPTIONS_HELP);
        println!("  -h, --help              Print this help");
        println!();
        println!("Set {}=debug to enable logging.", porter_cli::LOG_ENV);
        return;
    }

    porter_cli::init_tracing();

    let (options, args) =
        porter_cli::parse_stem_options(&args).unwrap_or_else(|e| porter_cli::fatal(&e));

    let mut pairs = false;
    let mut words: Vec<String> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--pairs" => pairs = true,
            s if s.starts_with('-') && s.len() > 1 => {
                porter_cli::fatal(&format!("unknown option: {s}"))
            }
            _ => words.push(arg.clone()),
        }
    }

    let handle = porter_cli::build_handle(options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failures = 0usize;

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !stem_word(word, &handle, pairs, &mut out) {
                failures += 1;
            }
        }
    } else {
        for word in &words {
            if !stem_word(word, &handle, pairs, &mut out) {
                failures += 1;
            }
        }
    }

    let _ = out.flush();
    tracing::debug!(failures, cached = handle.cached_stems(), "done");
    if failures > 0 {
        process::exit(1);
    }
}

/// Stem one word and print the result. Returns false if the word failed.
fn stem_word(word: &str, handle: &StemHandle, pairs: bool, out: &mut impl Write) -> bool {
    match handle.stem(word) {
        Ok(stem) => {
            let _ = if pairs {
                writeln!(out, "{word}\t{stem}")
            } else {
                writeln!(out, "{stem}")
            };
            true
        }
        Err(e) => {
            eprintln!("error: {word}: {e}");
            false
        }
    }
}
