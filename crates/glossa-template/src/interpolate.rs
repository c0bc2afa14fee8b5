//! Slot substitution and arity validation.

use std::borrow::Cow;
use tracing::debug;

use glossa_core::config::InterpolationConfig;
use glossa_core::GlossaError;

use crate::fragment::{Fragment, FragmentSequence};
use crate::parser::{distinct_digits, parse, Segment};

/// Key reported in errors for templates interpolated without one.
pub const INLINE_KEY: &str = "<inline>";

/// Interpolation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Emit a [`Fragment::Separator`] between two directly adjacent slots.
    pub separate_adjacent_slots: bool,
}

impl From<&InterpolationConfig> for Options {
    fn from(cfg: &InterpolationConfig) -> Self {
        Self {
            separate_adjacent_slots: cfg.separate_adjacent_slots,
        }
    }
}

/// A parsed template together with the key it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    key: String,
    segments: Vec<Segment<'t>>,
    arity: usize,
}

impl<'t> Template<'t> {
    pub fn parse(key: &str, text: &'t str) -> Self {
        let segments = parse(text);
        let arity = distinct_digits(&segments);
        Self {
            key: key.to_string(),
            segments,
            arity,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn segments(&self) -> &[Segment<'t>] {
        &self.segments
    }

    /// Bind `values` to the placeholders.
    ///
    /// Digit `N` takes `values[N - 1]`. Fails if a digit has no value, or if
    /// the template has placeholders and their distinct count differs from
    /// `values.len()`. Placeholder-free templates ignore `values`.
    pub fn interpolate<'v, V>(
        &self,
        values: &'v [V],
        options: Options,
    ) -> Result<FragmentSequence<'t, 'v, V>, GlossaError> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push(Fragment::Literal(text.clone())),
                Segment::Placeholder(digit) => {
                    let value = values
                        .get(digit.index())
                        .ok_or_else(|| GlossaError::MissingSlot {
                            key: self.key.clone(),
                            digit: digit.get(),
                            supplied: values.len(),
                        })?;
                    if options.separate_adjacent_slots
                        && out.last().is_some_and(Fragment::is_slot)
                    {
                        out.push(Fragment::Separator);
                    }
                    out.push(Fragment::Slot {
                        digit: *digit,
                        value,
                    });
                }
            }
        }

        if self.arity == 0 {
            if !values.is_empty() {
                debug!(
                    "i18n: `{}` has no placeholders, ignoring {} value(s)",
                    self.key,
                    values.len()
                );
            }
        } else if self.arity != values.len() {
            return Err(GlossaError::ArityMismatch {
                key: self.key.clone(),
                expected: self.arity,
                supplied: values.len(),
            });
        }

        if out.is_empty() {
            out.push(Fragment::Literal(Cow::Borrowed("")));
        }
        Ok(FragmentSequence::new(out))
    }
}

/// Interpolate an unkeyed template with default options.
pub fn interpolate<'t, 'v, V>(
    template: &'t str,
    values: &'v [V],
) -> Result<FragmentSequence<'t, 'v, V>, GlossaError> {
    interpolate_keyed(INLINE_KEY, template, values, Options::default())
}

/// Interpolate a template resolved from `key`; errors name the key.
pub fn interpolate_keyed<'t, 'v, V>(
    key: &str,
    template: &'t str,
    values: &'v [V],
    options: Options,
) -> Result<FragmentSequence<'t, 'v, V>, GlossaError> {
    Template::parse(key, template).interpolate(values, options)
}
