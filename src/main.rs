//! Command-line front end for password generation and analysis.

use chrono::Utc;
use clap::{CommandFactory, Parser, ValueEnum};
use rand::Rng;
use secrecy::SecretString;
use std::path::PathBuf;

use pwd_forge::{
    GenerationMode, GenerationRequest, HistorySink, HistoryStore, PasswordAnalysis,
    PasswordEngine, generate, generate_batch, generate_memorable,
};

/// Security tool for password generation and analysis
#[derive(Parser, Debug)]
#[command(name = "pwd-forge", version, about)]
struct Args {
    /// File with common passwords
    #[arg(long, value_name = "PATH", env = "PWD_CORPUS_PATH")]
    common_file: Option<PathBuf>,

    /// Show passwords in analysis output (NOT recommended in public)
    #[arg(long)]
    show: bool,

    /// Password length
    #[arg(long, default_value_t = 16)]
    length: usize,

    /// Include uppercase letters
    #[arg(long)]
    upper: bool,

    /// Include digits
    #[arg(long)]
    numbers: bool,

    /// Include symbols
    #[arg(long)]
    special: bool,

    /// Analyze a specific password
    #[arg(long, value_name = "PASSWORD")]
    check: Option<String>,

    /// Generate multiple passwords
    #[arg(long, value_name = "COUNT")]
    batch: Option<usize>,

    /// Manage the password history
    #[arg(long, value_enum, value_name = "ACTION")]
    history: Option<HistoryAction>,

    /// Generate a memorable password
    #[arg(long)]
    memorable: bool,

    /// Number of words for memorable passwords
    #[arg(long, default_value_t = 3)]
    words: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HistoryAction {
    View,
    Clear,
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    if std::env::args().len() <= 1 {
        Args::command().print_help().ok();
        return;
    }

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let engine = match &args.common_file {
        Some(path) => PasswordEngine::with_corpus_path(path),
        None => PasswordEngine::new(),
    };
    let history = HistoryStore::new();
    let mut rng = rand::thread_rng();

    if let Some(password) = &args.check {
        let secret = SecretString::new(password.clone().into());
        let analysis = engine.analyze(&secret, &mut rng);
        display_analysis(&analysis, password, args.show);
    } else if let Some(count) = args.batch {
        run_batch(&engine, &args, count, &mut rng)?;
    } else if let Some(action) = args.history {
        run_history(&history, action)?;
    } else if args.memorable {
        let password = generate_memorable(args.words, &mut rng)?;
        report_generated(&engine, &password, &mut rng);

        let mut metadata = serde_json::Map::new();
        metadata.insert("type".to_string(), "memorable".into());
        metadata.insert("words".to_string(), args.words.into());
        save_history(&history, &password, metadata);
    } else {
        let password = generate(args.length, args.upper, args.numbers, args.special, &mut rng)?;
        report_generated(&engine, &password, &mut rng);

        let mut metadata = serde_json::Map::new();
        metadata.insert("type".to_string(), "standard".into());
        metadata.insert("length".to_string(), args.length.into());
        metadata.insert("has_upper".to_string(), args.upper.into());
        metadata.insert("has_numbers".to_string(), args.numbers.into());
        metadata.insert("has_special".to_string(), args.special.into());
        save_history(&history, &password, metadata);
    }

    Ok(())
}

fn run_batch<R: Rng>(
    engine: &PasswordEngine,
    args: &Args,
    count: usize,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerationRequest {
        mode: if args.memorable {
            GenerationMode::Memorable
        } else {
            GenerationMode::Random
        },
        length: args.length,
        upper: args.upper,
        numbers: args.numbers,
        special: args.special,
        word_count: args.words,
    };

    println!("\nGenerating {} passwords...", count);
    println!("{}", "-".repeat(50));

    let passwords = generate_batch(count, &request, rng)?;
    for (i, password) in passwords.iter().enumerate() {
        let secret = SecretString::new(password.clone().into());
        let analysis = engine.analyze(&secret, rng);
        println!("{:2}. {}", i + 1, password);
        println!(
            "    Strength: {} ({}/100)",
            analysis.strength_category, analysis.score
        );
    }

    println!("{}", "-".repeat(50));
    println!("Total generated: {} passwords", passwords.len());
    Ok(())
}

fn run_history(
    history: &HistoryStore,
    action: HistoryAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HistoryAction::View => {
            let entries = history.load();
            if entries.is_empty() {
                println!("History is empty.");
                return Ok(());
            }

            println!("\n=== PASSWORD HISTORY ===");
            println!("Total entries: {}", entries.len());
            println!("{}", "-".repeat(50));

            for (i, entry) in entries.iter().rev().take(10).enumerate() {
                println!(
                    "{}. {} - {}",
                    i + 1,
                    mask_middle(&entry.password),
                    entry.timestamp.to_rfc3339()
                );
            }

            println!("{}", "-".repeat(50));
            println!("NOTE: History entries are base64-encoded, not encrypted.");
        }
        HistoryAction::Clear => {
            history.clear()?;
            println!("History cleared.");
        }
    }
    Ok(())
}

fn report_generated<R: Rng>(engine: &PasswordEngine, password: &str, rng: &mut R) {
    let secret = SecretString::new(password.to_string().into());
    let analysis = engine.analyze(&secret, rng);

    println!("\nGenerated password: {}", password);
    println!(
        "Strength: {} ({}/100)",
        analysis.strength_category, analysis.score
    );
    println!("Entropy: {:.1} bits", analysis.entropy);
    println!("Contains: {}", contained_classes(&analysis).join(", "));
}

fn save_history(
    history: &HistoryStore,
    password: &str,
    metadata: serde_json::Map<String, serde_json::Value>,
) {
    match history.record(password, metadata, Utc::now()) {
        Ok(()) => println!("Saved to history (base64-encoded, not encrypted)."),
        Err(err) => eprintln!("Warning: failed to save history: {}", err),
    }
}

fn display_analysis(analysis: &PasswordAnalysis, password: &str, show_password: bool) {
    println!("\n=== PASSWORD ANALYSIS ===");
    if show_password {
        println!("Password analyzed: {}", password);
    } else {
        println!("Password analyzed: {}", "*".repeat(analysis.password_length));
    }
    println!(
        "Strength: {} ({}/100)",
        analysis.strength_category, analysis.score
    );
    println!("Entropy: {:.1} bits", analysis.entropy);
    println!("Length: {} characters", analysis.password_length);

    println!("\nContains:");
    for class in contained_classes(analysis) {
        println!("  + {}", class);
    }

    if analysis.is_common {
        println!("\nWARNING: This password appears in common password lists!");
    }

    if !analysis.problems.is_empty() {
        println!("\nProblems identified:");
        for problem in &analysis.problems {
            println!("  * {}", problem);
        }
    }

    if !analysis.suggestions.is_empty() {
        println!("\nImprovement suggestions:");
        for suggestion in &analysis.suggestions {
            println!("  -> {}", suggestion);
        }
    }

    println!("\n{}", "=".repeat(50));
}

fn contained_classes(analysis: &PasswordAnalysis) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if analysis.has_lower {
        classes.push("lowercase letters");
    }
    if analysis.has_upper {
        classes.push("uppercase letters");
    }
    if analysis.has_digits {
        classes.push("digits");
    }
    if analysis.has_special {
        classes.push("symbols");
    }
    classes
}

/// Masks a stored password for display: first and last characters kept
/// when longer than 4, fully starred otherwise.
fn mask_middle(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() > 4 {
        let mut masked = String::new();
        masked.push(chars[0]);
        masked.push_str(&"*".repeat(chars.len() - 2));
        masked.push(chars[chars.len() - 1]);
        masked
    } else {
        "*".repeat(chars.len())
    }
}
