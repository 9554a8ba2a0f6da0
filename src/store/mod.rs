// Local storage module.
// Locates and persists the identity file, the topic registry, and post files.

pub mod json;
pub mod paths;

pub use json::{read_json, write_json, write_private_json};
