//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would require a live
//! target process).

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "procgrep")]
struct Args {
    #[arg(long, env = "PROCGREP_CONFIG", value_name = "FILE")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Search {
        process: String,
        pattern: String,
        #[arg(long)]
        hex: bool,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_name = "BYTES")]
        window_size: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    Read {
        process: String,
        position: String,
        count: String,
        #[arg(long)]
        raw: bool,
    },
    Regions {
        process: String,
        #[arg(long)]
        json: bool,
    },
}

#[test]
fn test_parse_search() {
    let args = Args::try_parse_from(["procgrep", "search", "firefox", "needle"]).unwrap();
    match args.command {
        Command::Search {
            process,
            pattern,
            hex,
            limit,
            window_size,
            json,
        } => {
            assert_eq!(process, "firefox");
            assert_eq!(pattern, "needle");
            assert!(!hex);
            assert!(limit.is_none());
            assert!(window_size.is_none());
            assert!(!json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_parse_search_with_flags() {
    let args = Args::try_parse_from([
        "procgrep",
        "search",
        "1234",
        "de ad be ef",
        "--hex",
        "--limit",
        "5",
        "--window-size",
        "8192",
        "--json",
    ])
    .unwrap();
    match args.command {
        Command::Search {
            process,
            pattern,
            hex,
            limit,
            window_size,
            json,
        } => {
            assert_eq!(process, "1234");
            assert_eq!(pattern, "de ad be ef");
            assert!(hex);
            assert_eq!(limit, Some(5));
            assert_eq!(window_size, Some(8192));
            assert!(json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_parse_read() {
    let args = Args::try_parse_from(["procgrep", "read", "1234", "0x7f0000001000", "64"]).unwrap();
    match args.command {
        Command::Read {
            process,
            position,
            count,
            raw,
        } => {
            assert_eq!(process, "1234");
            assert_eq!(position, "0x7f0000001000");
            assert_eq!(count, "64");
            assert!(!raw);
        }
        _ => panic!("Expected Read command"),
    }
}

#[test]
fn test_parse_read_raw() {
    let args = Args::try_parse_from(["procgrep", "read", "cat", "4096", "16", "--raw"]).unwrap();
    match args.command {
        Command::Read { raw, .. } => assert!(raw),
        _ => panic!("Expected Read command"),
    }
}

#[test]
fn test_parse_regions() {
    let args = Args::try_parse_from(["procgrep", "regions", "firefox"]).unwrap();
    match args.command {
        Command::Regions { process, json } => {
            assert_eq!(process, "firefox");
            assert!(!json);
        }
        _ => panic!("Expected Regions command"),
    }
}

#[test]
fn test_parse_config_before_subcommand() {
    let args = Args::try_parse_from([
        "procgrep",
        "--config",
        "custom.toml",
        "regions",
        "firefox",
    ])
    .unwrap();
    assert_eq!(args.config, Some("custom.toml".to_string()));
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(Args::try_parse_from(["procgrep"]).is_err());
}

#[test]
fn test_missing_pattern_fails() {
    assert!(Args::try_parse_from(["procgrep", "search", "firefox"]).is_err());
}

#[test]
fn test_missing_count_fails() {
    assert!(Args::try_parse_from(["procgrep", "read", "1234", "0x1000"]).is_err());
}

#[test]
fn test_invalid_command_fails() {
    assert!(Args::try_parse_from(["procgrep", "poke"]).is_err());
}

#[test]
fn test_non_numeric_limit_fails() {
    assert!(
        Args::try_parse_from(["procgrep", "search", "firefox", "x", "--limit", "many"]).is_err()
    );
}
