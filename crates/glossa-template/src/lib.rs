//! # glossa-template
//!
//! Placeholder interpolation for localized templates.
//!
//! A template carries `%1`..`%9` placeholder tokens; `\%N` is a literal
//! `%N`. Interpolation binds each digit `N` to the caller's value at index
//! `N - 1` and yields an ordered sequence of fragments (literal runs and
//! borrowed slot values) that any renderer can consume. Slot values are
//! opaque: plain text, numbers, or structured nodes all work.

mod arg;
mod fragment;
mod interpolate;
mod parser;

pub use arg::Arg;
pub use fragment::{Fragment, FragmentSequence, SEPARATOR};
pub use interpolate::{interpolate, interpolate_keyed, Options, Template, INLINE_KEY};
pub use parser::{arity, parse, Digit, Segment};
