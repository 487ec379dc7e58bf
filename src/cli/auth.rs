//! `carenav auth` / `carenav deauth`: manage the key stored in the system keyring.

use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::core::constants::API_KEY_URL;
use crate::core::keyring::{delete_api_key, store_api_key};

/// Reads one line and returns the trimmed key, rejecting blank input.
pub fn read_api_key<R: BufRead>(reader: &mut R) -> Result<String, Box<dyn Error>> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    let key = input.trim();
    if key.is_empty() {
        return Err("API key cannot be empty".into());
    }
    if key.chars().any(char::is_whitespace) {
        return Err("API key cannot contain whitespace".into());
    }
    Ok(key.to_string())
}

pub fn interactive_auth() -> Result<(), Box<dyn Error>> {
    println!("🔐 Gemini API key setup");
    println!("Get a key at {API_KEY_URL}");
    println!();
    print!("Enter your API key: ");
    io::stdout().flush()?;

    let key = read_api_key(&mut io::stdin().lock())?;
    store_api_key(&key)?;
    println!("✅ API key stored in the system keyring");
    Ok(())
}

pub fn interactive_deauth() -> Result<(), Box<dyn Error>> {
    if delete_api_key()? {
        println!("✅ Stored API key removed");
    } else {
        println!("No stored API key found.");
    }
    Ok(())
}
