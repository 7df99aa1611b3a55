// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Verify a shnarf response against its request", long_about = None)]
struct Args {
    /// Path to the request JSON
    #[arg(long)]
    request: PathBuf,

    /// Path to the response JSON
    #[arg(long)]
    response: PathBuf,

    /// Also check the commitment and both KZG proofs
    #[arg(long)]
    kzg: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("Shnarf Verifier v{}", env!("CARGO_PKG_VERSION"));

    let report = shnarf_verify::run(&args.request, &args.response, args.kzg)?;

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);

    if !report.is_valid() {
        for check in report.failures() {
            eprintln!("FAILED: {}", check.name);
        }
        std::process::exit(1);
    }

    Ok(())
}
