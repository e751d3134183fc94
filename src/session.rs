//! Session-scoped identifier generation.
//!
//! Every placeholder a builder embeds into text is namespaced by a session
//! prefix derived from the wall clock plus a random suffix, so placeholders
//! can never collide with ordinary user text or with a second builder running
//! in the same process. The prefix is computed once per `Session` and is
//! immutable afterwards; builders own their session instead of sharing a
//! process-wide global, which keeps parallel builders and tests isolated.

use rand::Rng;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Uppercase base36 digits used by prefix and variable identifiers.
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Per-builder identifier source: session prefix, variable ids, block ids.
#[derive(Debug, Clone)]
pub struct Session {
    prefix: Arc<str>,
}

impl Session {
    /// Creates a session with a fresh time-derived prefix.
    pub fn new() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let prefix = format!("{}-{}", to_base36(millis * 5), random_base36(4));
        Self {
            prefix: prefix.into(),
        }
    }

    /// Creates a session with a caller-chosen prefix.
    ///
    /// Intended for tests that need deterministic placeholder text. The
    /// prefix should stay within `[0-9A-Z-]` so it remains self-delimiting
    /// inside encoded text.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The namespace prepended to every placeholder this session emits.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn prefix_arc(&self) -> Arc<str> {
        Arc::clone(&self.prefix)
    }

    /// A fresh auto-generated variable identifier, e.g. `V-K3R9ZA`.
    pub fn variable_id(&self) -> String {
        format!("V-{}", random_base36(6))
    }

    /// A fresh block identifier pairing a begin-marker with its end-marker.
    pub fn block_id(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            random_hex(8),
            random_hex(4),
            random_hex(4),
            random_hex(4),
            random_hex(12)
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..36)] as char)
        .collect()
}

fn random_hex(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let d = rng.random_range(0..16u32);
            char::from_digit(d, 16).unwrap_or('0').to_ascii_uppercase()
        })
        .collect()
}
