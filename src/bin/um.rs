//! Unimath CLI - bidirectional mnemonic name ↔ Unicode symbol converter

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use unimath::{
    check_config, detect_format, format_diagnostics, list_insertable, names_to_symbols,
    symbols_to_names, SymbolTable, TableConfig,
};

#[derive(Parser)]
#[command(name = "um")]
#[command(version)]
#[command(about = "Unimath - bidirectional mnemonic name ↔ Unicode symbol converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
    direction: Direction,

    /// JSON settings file with symbol/synonym tables
    #[arg(short, long)]
    config: Option<String>,

    /// Detect and print the input direction without converting
    #[arg(long)]
    detect: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every symbol with its names, one entry per line
    List {
        /// JSON settings file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Look up the symbol for a mnemonic name
    Lookup {
        /// Canonical name or synonym, without the backslash
        name: String,

        /// JSON settings file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the display name for a single symbol
    Name {
        /// The symbol to name
        symbol: String,

        /// JSON settings file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Check a settings file for table problems
    Check {
        /// Settings file to check
        config: String,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum Direction {
    /// Auto-detect based on content
    Auto,
    /// Mnemonic names to symbols
    Encode,
    /// Symbols to mnemonic names
    Decode,
}

fn load_table(config: Option<&str>) -> SymbolTable {
    let cfg = match config {
        Some(path) => TableConfig::load_or_builtin(path),
        None => TableConfig::builtin(),
    };
    SymbolTable::from_config(&cfg)
}

fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::List { config } => {
            let table = load_table(config.as_deref());
            let mut stdout = io::stdout().lock();
            for (display, _) in list_insertable(&table) {
                writeln!(stdout, "{}", display)?;
            }
            Ok(())
        }
        Commands::Lookup { name, config } => {
            let table = load_table(config.as_deref());
            match table.resolve(&name) {
                Some(symbol) => {
                    println!("{}", symbol);
                    Ok(())
                }
                None => {
                    eprintln!("um: no symbol named {:?}", name);
                    std::process::exit(1);
                }
            }
        }
        Commands::Name { symbol, config } => {
            let table = load_table(config.as_deref());
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    println!("{}", table.name_for(ch));
                    Ok(())
                }
                _ => {
                    eprintln!("um: expected exactly one character, got {:?}", symbol);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { config, no_color } => {
            let cfg = match TableConfig::from_json_file(&config) {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("um: failed to load {}: {}", config, err);
                    std::process::exit(1);
                }
            };
            let report = check_config(&cfg);
            println!("{}", format_diagnostics(&report, !no_color));
            if report.has_errors() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let table = load_table(cli.config.as_deref());

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if cli.detect {
        println!("{}", detect_format(&input, &table));
        return Ok(());
    }

    let direction = match cli.direction {
        Direction::Auto => {
            if detect_format(&input, &table) == "symbols" {
                Direction::Decode
            } else {
                Direction::Encode
            }
        }
        d => d,
    };

    let result = match direction {
        Direction::Encode | Direction::Auto => names_to_symbols(&input, &table),
        Direction::Decode => symbols_to_names(&input, &table),
    };

    match cli.output {
        Some(path) => fs::write(path, result)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
        }
    }

    Ok(())
}
