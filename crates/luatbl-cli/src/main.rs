//! `luatbl` CLI — convert between Lua table literals and JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Lua table literal → pretty-printed JSON (stdin → stdout)
//! echo "{ name = 'Alice', scores = {95, 87, 92} }" | luatbl decode
//!
//! # JSON → canonical Lua table literal
//! echo '{"name":"Alice","scores":[95,87,92]}' | luatbl encode
//!
//! # Re-encode a literal in canonical form
//! luatbl fmt -i save.lua -o save-canonical.lua
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use luatbl_core::LuaTable;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "luatbl", version, about = "Lua table-literal codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a Lua table literal to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Encode JSON as a canonical Lua table literal
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-encode a Lua table literal in canonical form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let mut table = LuaTable::new();
            table
                .load(&text)
                .context("Failed to parse Lua table literal")?;
            let value = table.dump_value();
            let json = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse JSON input")?;
            let mut table = LuaTable::new();
            table.load_value(&value);
            write_output(output.as_deref(), &table.dump())?;
        }
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let mut table = LuaTable::new();
            table
                .load(&text)
                .context("Failed to parse Lua table literal")?;
            write_output(output.as_deref(), &table.dump())?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
