//! CLI tool for powercells - dumps a sheet database as JSON
//!
//! Usage:
//!   powercells_cli <sheet.db>              # Output JSON to stdout
//!   powercells_cli <sheet.db> -o out.json  # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use powercells::SqliteStore;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: powercells_cli <sheet.db> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    if !Path::new(input_path).exists() {
        eprintln!("No such file: {}", input_path);
        std::process::exit(1);
    }

    let store = match SqliteStore::open_path(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error opening {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let dump = match store.dump() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&dump) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let _ = writeln!(handle, "{}", json);
        }
    }
}
