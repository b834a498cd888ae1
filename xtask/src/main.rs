//! Development tasks for termwrap.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks")]
enum Task {
    /// Generate the man page into target/man/.
    Man,
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man => generate_man(),
    }
}

fn generate_man() -> Result<()> {
    let out_dir = PathBuf::from("target/man");
    fs::create_dir_all(&out_dir).context("Failed to create target/man")?;

    let cmd = termwrap::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf).context("Failed to render man page")?;

    let path = out_dir.join("termwrap.1");
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
