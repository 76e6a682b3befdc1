//! Text and utility tools
//!
//! Stateless helpers behind the text-oriented panels: statistics, Base64
//! transcoding, password generation, and JSON formatting.

pub mod base64;
pub mod json;
pub mod password;
pub mod text;

pub use base64::{decode_text, encode_text};
pub use json::{format_json, JsonStyle};
pub use password::{generate_password, strength_score, PasswordOptions};
pub use text::TextStats;
