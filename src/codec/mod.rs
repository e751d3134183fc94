//! Encoding of variable references embedded in text parameters.
//!
//! A reference is rendered into text as `<session prefix>-<variable id>`,
//! e.g. `M3K...-V-K3R9ZA` or `M3K...-@input`. Because the prefix carries an
//! unpredictable random suffix, ordinary user text can never accidentally
//! match it. At encode time a single anchored regular expression locates all
//! embedded references; each matched span collapses to one `$` sentinel and a
//! token records the sentinel's character offset plus the referenced variable
//! id. Splices are applied right-to-left so earlier offsets stay valid, and
//! the emitted token list is ascending by location.

mod builtin;
mod param;
mod variable;

pub use builtin::Builtin;
pub use param::Param;
pub use variable::Variable;

pub(crate) use variable::VarKind;

use crate::error::CodecError;
use crate::flow::{FlowToken, FlowValue};
use crate::session::Session;
use ahash::AHashSet;
use itertools::Itertools;
use regex::Regex;
use std::sync::Arc;

/// Converts builder parameters into the wire `FlowValue` form.
///
/// The codec keeps a registry of every variable id its builder has minted;
/// a prefix-framed token of a minted shape (`V-XXXXXX` or `{name}`) that is
/// not in the registry is rejected rather than silently emitted with an
/// unmapped id.
#[derive(Debug)]
pub struct ValueCodec {
    prefix: Arc<str>,
    pattern: Regex,
    minted: AHashSet<String>,
}

impl ValueCodec {
    pub fn new(session: &Session) -> Self {
        let alternation = builtin::SIGNED_PATTERNS
            .iter()
            .map(|p| format!("({p})"))
            .join("|");
        let pattern = format!(
            r"{}-((V-[0-9A-Z]{{6}})|(\{{[A-Za-z0-9_-]+\}})|{})",
            regex::escape(session.prefix()),
            alternation
        );
        // The pattern is assembled from fixed fragments and an escaped
        // prefix, so compilation cannot fail on user input.
        let pattern = Regex::new(&pattern).expect("placeholder pattern is well-formed");
        Self {
            prefix: session.prefix_arc(),
            pattern,
            minted: AHashSet::new(),
        }
    }

    /// The session prefix this codec scans for.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Records a variable id as belonging to this codec's builder.
    pub fn register(&mut self, vid: impl Into<String>) {
        self.minted.insert(vid.into());
    }

    /// Normalizes a parameter to text and encodes it.
    pub fn encode(&self, param: &Param) -> Result<FlowValue, CodecError> {
        let text = param.render(&self.prefix);
        self.encode_text(&text)
    }

    /// Encodes already-normalized text into the `value` + `tokens` form.
    pub fn encode_text(&self, text: &str) -> Result<FlowValue, CodecError> {
        struct Found {
            start: usize,
            end: usize,
            vid: String,
        }

        let mut found: Vec<Found> = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let raw = inner.as_str();
            let vid = if let Some(stripped) = raw.strip_prefix('{') {
                stripped.trim_end_matches('}')
            } else {
                raw
            };
            if (raw.starts_with("V-") || raw.starts_with('{')) && !self.minted.contains(vid) {
                return Err(CodecError::UnknownReference {
                    vid: vid.to_string(),
                });
            }
            found.push(Found {
                start: whole.start(),
                end: whole.end(),
                vid: vid.to_string(),
            });
        }

        // Token locations are character offsets into the substituted string:
        // every earlier match shrinks to a single sentinel character.
        let mut tokens = Vec::with_capacity(found.len());
        let mut removed = 0usize;
        for m in &found {
            let char_start = text[..m.start].chars().count();
            let char_len = text[m.start..m.end].chars().count();
            tokens.push(FlowToken {
                location: char_start - removed,
                value: m.vid.clone(),
            });
            removed += char_len - 1;
        }

        // Splice right-to-left so byte offsets of earlier matches stay valid.
        let mut value = text.to_string();
        for m in found.iter().rev() {
            value.replace_range(m.start..m.end, "$");
        }

        // Any prefix framing left over matched no recognized reference form.
        if let Some(idx) = value.find(self.prefix.as_ref()) {
            let fragment: String = value[idx..].chars().take(self.prefix.len() + 12).collect();
            return Err(CodecError::UnresolvedReference { fragment });
        }

        Ok(FlowValue {
            value,
            tokens: if tokens.is_empty() { None } else { Some(tokens) },
        })
    }
}
