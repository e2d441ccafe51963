//! Minimal illustration of loading a dictionary from a `pattern\tvalue` file and scanning an
//! input file for occurrences. Exercises the public API end to end; not a supported CLI surface.

use std::fs;

use clap::Parser;
use triedict::{symbols, Dict};

/// Build a dictionary from a `pattern\tvalue`-per-line file and scan an input file for matches.
#[derive(Parser, Debug)]
struct Args {
    /// Path to a file with one `pattern\tvalue` pair per line.
    #[arg(long)]
    dictionary: String,

    /// Path to the text file to scan for pattern occurrences.
    #[arg(long)]
    input: String,

    /// Only report matches bounded by whitespace or punctuation on both sides.
    #[arg(long)]
    word_boundary: bool,
}

fn load_dict(path: &str) -> Dict {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read dictionary file `{path}`: {err}"));

    let mut dict = Dict::new();
    for (line_number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (pattern, value) = line.split_once('\t').unwrap_or_else(|| {
            panic!("{path}:{}: expected `pattern\\tvalue`, got `{line}`", line_number + 1)
        });
        let value: u32 = value.trim().parse().unwrap_or_else(|_| {
            panic!("{path}:{}: `{value}` is not a valid value", line_number + 1)
        });
        dict.assign(symbols::encode_str(pattern), value).unwrap();
    }
    dict
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut dict = load_dict(&args.dictionary);
    let input = fs::read_to_string(&args.input)
        .unwrap_or_else(|err| panic!("failed to read input file `{}`: {err}", args.input));
    let text: Vec<u32> = symbols::encode_str(&input).collect();
    let boundary: Vec<u32> = symbols::encode_str(" \t\n.,;:!?'\"()[]{}").collect();

    let hits: Box<dyn Iterator<Item = _>> = if args.word_boundary {
        Box::new(dict.match_text_with_boundary(&text, &boundary))
    } else {
        Box::new(dict.match_text(&text))
    };

    for hit in hits {
        let pattern = symbols::decode_to_string(&hit.pattern).unwrap_or_default();
        let start = hit.end_index - hit.pattern.len();
        println!("[{start}, {}) {pattern:?} -> {}", hit.end_index, hit.value);
    }
}
