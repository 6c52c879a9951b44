use pairwise_bpe::{Tokenizer, TokenizerConfig};
use std::env;
use std::fs;

/// Trains a tokenizer on a text file and prints the learned rules.
///
/// Usage: cargo run --example train <filename> [merges]
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <filename> [merges]", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let text = fs::read_to_string(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found or not UTF-8.", filename);
        std::process::exit(1);
    });

    let mut config = TokenizerConfig::default().with_vocab_size(0x11_0000);
    if let Some(merges) = args.get(2) {
        let merges = merges.parse().unwrap_or_else(|_| {
            eprintln!("Invalid merge count: {}", merges);
            std::process::exit(1);
        });
        config = config.with_merge_count(merges);
    }

    let mut tokenizer = Tokenizer::from_config(config).expect("valid config");
    let merged = tokenizer.train(&text).unwrap_or_else(|e| {
        eprintln!("Training failed: {}", e);
        std::process::exit(1);
    });

    for rule in tokenizer.rules() {
        let literal = tokenizer.symbol_table().expand(rule.symbol).expect("learned symbol");
        println!(
            "{}  ({})  {:?}",
            tokenizer.symbol_table().describe(&rule),
            rule,
            literal
        );
    }

    let table = tokenizer.symbol_table();
    if merged.len() <= 80 {
        println!("\nMerged: {}", table.render_labels(&merged));
    }

    // Verify by decoding
    let decoded = tokenizer.decode(&merged).expect("decode trained output");
    assert_eq!(decoded, text, "Roundtrip mismatch");

    if let Some(stats) = tokenizer.training_stats() {
        println!("\n=== Statistics ===");
        println!("Input symbols: {}", stats.input_length);
        println!("Merged symbols: {}", stats.output_length);
        println!("Merges learned: {}", stats.merges_performed);
        println!("Stopped early: {}", stats.stopped_early);
        println!("Compression ratio: {:.2}%", stats.compression_ratio());
    }
}
