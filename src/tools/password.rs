//! Random password generation
//!
//! Builds a character pool from the enabled classes (lowercase is always
//! included) and samples it uniformly.

use rand::Rng;

use crate::error::{ToolboxError, ToolboxResult};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Password generation options
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    /// Number of characters, at least 1
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// Generate a random password.
///
/// # Errors
///
/// Returns [`ToolboxError::InvalidInput`] for a zero length.
pub fn generate_password(options: &PasswordOptions) -> ToolboxResult<String> {
    if options.length == 0 {
        return Err(ToolboxError::InvalidInput(
            "password length must be at least 1".into(),
        ));
    }

    let mut pool = String::from(LOWERCASE);
    if options.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.include_digits {
        pool.push_str(DIGITS);
    }
    if options.include_symbols {
        pool.push_str(SYMBOLS);
    }

    let chars: Vec<char> = pool.chars().collect();
    let mut rng = rand::thread_rng();

    Ok((0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// Rough strength score from 0 to 5: one point each for length > 8,
/// length > 12, and every enabled character class.
pub fn strength_score(options: &PasswordOptions) -> u8 {
    let mut score = 0;
    if options.length > 8 {
        score += 1;
    }
    if options.length > 12 {
        score += 1;
    }
    if options.include_uppercase {
        score += 1;
    }
    if options.include_digits {
        score += 1;
    }
    if options.include_symbols {
        score += 1;
    }
    score
}
