//! Interpolation output.

use std::borrow::Cow;
use std::fmt;

use crate::parser::Digit;

/// Text rendered for a [`Fragment::Separator`].
pub const SEPARATOR: &str = " ";

/// One piece of interpolated output.
#[derive(Debug, PartialEq)]
pub enum Fragment<'t, 'v, V> {
    /// Literal text taken from the template.
    Literal(Cow<'t, str>),
    /// The caller's value bound to `digit`.
    Slot { digit: Digit, value: &'v V },
    /// Whitespace between two directly adjacent slots.
    Separator,
}

impl<V> Fragment<'_, '_, V> {
    pub fn is_slot(&self) -> bool {
        matches!(self, Self::Slot { .. })
    }
}

/// Fragments in template order. Consumed by iterating; build a new one per call.
#[derive(Debug, PartialEq)]
pub struct FragmentSequence<'t, 'v, V> {
    fragments: Vec<Fragment<'t, 'v, V>>,
}

impl<'t, 'v, V> FragmentSequence<'t, 'v, V> {
    pub(crate) fn new(fragments: Vec<Fragment<'t, 'v, V>>) -> Self {
        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn as_slice(&self) -> &[Fragment<'t, 'v, V>] {
        &self.fragments
    }
}

impl<V: fmt::Display> FragmentSequence<'_, '_, V> {
    /// Concatenate every fragment into plain text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<V: fmt::Display> fmt::Display for FragmentSequence<'_, '_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(text) => f.write_str(text)?,
                Fragment::Slot { value, .. } => write!(f, "{value}")?,
                Fragment::Separator => f.write_str(SEPARATOR)?,
            }
        }
        Ok(())
    }
}

impl<'t, 'v, V> IntoIterator for FragmentSequence<'t, 'v, V> {
    type Item = Fragment<'t, 'v, V>;
    type IntoIter = std::vec::IntoIter<Fragment<'t, 'v, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}
