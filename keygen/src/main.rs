//! CLI password generator
//!
//! Prints one random password built from ASCII letters and digits.

use anyhow::{bail, Result};
use clap::Parser;
use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789";

#[derive(Debug, Parser)]
#[command(name = "keygen", about = "Generate a random password of a specified length")]
struct Args {
    /// The desired length of the password (e.g. 12, 16)
    length: usize,
}

fn generate_password(length: usize) -> Result<String> {
    if length == 0 {
        bail!("Password length must be a positive integer.");
    }

    let mut rng = rand::thread_rng();
    let password = (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    Ok(password)
}

fn main() {
    let args = Args::parse();

    match generate_password(args.length) {
        Ok(password) => {
            println!("Generated Password ({} chars): {}", args.length, password);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
