//! Class file manipulator CLI.

use cmc::commands::{parse_file, run_format};

fn main() {
    cmc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => {
            std::process::exit(run_format(&args[2..]));
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: cmc parse <file.php>");
                std::process::exit(1);
            }
            std::process::exit(parse_file(&args[2]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cmc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Class file manipulator");
    println!();
    println!("Usage: cmc <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt [paths...]       Regenerate class files in canonical layout");
    println!("  parse <file.php>     Parse a class file and print its outline");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Format options:");
    println!("  --check             Check if files are formatted (exit 1 if not)");
    println!("  --diff              Show diff output instead of modifying files");
    println!("  --stdin             Read from stdin, write to stdout");
    println!();
    println!("Set RUST_LOG (for example RUST_LOG=cm_parse=trace) for debug output.");
    println!();
    println!("Examples:");
    println!("  cmc fmt                          # Format all files under .");
    println!("  cmc fmt --check src/             # Check formatting (for CI)");
    println!("  cmc fmt --diff src/User.php      # Preview changes");
    println!("  cat User.php | cmc fmt --stdin   # Format stdin to stdout");
    println!("  cmc parse src/User.php");
}
