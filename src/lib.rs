//! Snarkbot Library
//!
//! A sarcastic canned-response chat engine: free-form text in, one insult
//! out. Core modules for sanitization, classification, and repeat tracking.

pub mod checks;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod responses;
pub mod sanitize;
pub mod wordlist;

pub use config::EngineConfig;
pub use engine::SnarkEngine;
pub use error::{SnarkError, SnarkResult};
pub use wordlist::WordList;
