//! Single-pass placeholder scanner.

use std::borrow::Cow;
use std::fmt;

/// A placeholder digit in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub fn new(n: u8) -> Option<Self> {
        (1..=9).contains(&n).then_some(Self(n))
    }

    fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'1'..=b'9' => Some(Self(byte - b'0')),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into the supplied values.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Literal text. Borrowed unless an escape backslash was removed.
    Literal(Cow<'t, str>),
    /// A live `%N` token.
    Placeholder(Digit),
}

/// `%N` starting at `at`.
fn token_at(bytes: &[u8], at: usize) -> Option<Digit> {
    match bytes.get(at..at + 2) {
        Some([b'%', d]) => Digit::from_ascii(*d),
        _ => None,
    }
}

/// Accumulates the pending literal run between placeholders.
struct Run<'t> {
    template: &'t str,
    start: usize,
    owned: Option<String>,
}

impl<'t> Run<'t> {
    /// Drop the byte at `at` from the run while keeping what precedes it.
    fn skip_byte(&mut self, at: usize) {
        let buf = self.owned.get_or_insert_with(String::new);
        buf.push_str(&self.template[self.start..at]);
        self.start = at + 1;
    }

    /// Close the run at `end` and restart it at `next`.
    fn flush(&mut self, end: usize, next: usize, out: &mut Vec<Segment<'t>>) {
        let tail = &self.template[self.start..end];
        let text = match self.owned.take() {
            Some(mut buf) => {
                buf.push_str(tail);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(tail),
        };
        if !text.is_empty() {
            out.push(Segment::Literal(text));
        }
        self.start = next;
    }
}

/// Split a template into literal runs and live placeholders, left to right.
///
/// `%` followed by `1`..`9` is live unless directly preceded by `\`, in which
/// case the backslash is removed and `%N` stays as text. Anything else,
/// including `%0` and a trailing `%`, is literal. Only the backslash right
/// before `%` counts, so `\\%1` keeps one backslash and renders as `\%1`.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut run = Run {
        template,
        start: 0,
        owned: None,
    };

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && token_at(bytes, i + 1).is_some() {
            run.skip_byte(i);
            i += 3;
        } else if let Some(digit) = token_at(bytes, i) {
            run.flush(i, i + 2, &mut out);
            out.push(Segment::Placeholder(digit));
            i += 2;
        } else {
            i += 1;
        }
    }
    run.flush(bytes.len(), bytes.len(), &mut out);
    out
}

/// Number of distinct live placeholder digits.
pub fn arity(template: &str) -> usize {
    distinct_digits(&parse(template))
}

pub(crate) fn distinct_digits(segments: &[Segment<'_>]) -> usize {
    let mask = segments.iter().fold(0u16, |mask, seg| match seg {
        Segment::Placeholder(d) => mask | (1 << d.get()),
        Segment::Literal(_) => mask,
    });
    mask.count_ones() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment<'_> {
        Segment::Literal(Cow::Borrowed(s))
    }

    fn ph(n: u8) -> Segment<'static> {
        Segment::Placeholder(Digit::new(n).unwrap())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("Pending"), vec![lit("Pending")]);
    }

    #[test]
    fn test_empty_template() {
        assert!(parse("").is_empty());
        assert_eq!(arity(""), 0);
    }

    #[test]
    fn test_placeholders_and_text() {
        assert_eq!(
            parse("%1 unresolved alerts in %2"),
            vec![ph(1), lit(" unresolved alerts in "), ph(2)]
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(parse("%1%2"), vec![ph(1), ph(2)]);
    }

    #[test]
    fn test_escape_consumes_backslash() {
        let segs = parse("100\\%1");
        assert_eq!(segs, vec![lit("100%1")]);
        assert!(matches!(&segs[0], Segment::Literal(Cow::Owned(_))));
        assert_eq!(arity("100\\%1"), 0);
    }

    #[test]
    fn test_escape_between_live_tokens() {
        assert_eq!(
            parse("%1 is \\%2 not %2"),
            vec![ph(1), lit(" is %2 not "), ph(2)]
        );
    }

    #[test]
    fn test_double_backslash_still_escapes() {
        assert_eq!(parse("a\\\\%1"), vec![lit("a\\%1")]);
    }

    #[test]
    fn test_non_placeholder_percent_is_literal() {
        assert_eq!(parse("100% of %0 and %a"), vec![lit("100% of %0 and %a")]);
        assert_eq!(parse("trailing %"), vec![lit("trailing %")]);
        assert_eq!(parse("\\%0"), vec![lit("\\%0")]);
    }

    #[test]
    fn test_multi_digit_reads_single_digit() {
        assert_eq!(parse("%12"), vec![ph(1), lit("2")]);
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        assert_eq!(
            parse("Član ste organizacije %1 – čestitamo"),
            vec![lit("Član ste organizacije "), ph(1), lit(" – čestitamo")]
        );
    }

    #[test]
    fn test_arity_counts_distinct_digits() {
        assert_eq!(arity("%2 and %1"), 2);
        assert_eq!(arity("%1, %1 and %1"), 1);
        assert_eq!(arity("%1 and %3"), 2);
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(0).is_none());
        assert!(Digit::new(10).is_none());
        let d = Digit::new(9).unwrap();
        assert_eq!(d.index(), 8);
        assert_eq!(d.to_string(), "%9");
    }
}
