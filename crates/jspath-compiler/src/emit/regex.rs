//! `like_regex` pattern validation.
//!
//! Patterns are only checked at encode time; matching is the evaluator's job.
//! The matcher's dialect is richer than `regex-syntax`, so only mistakes that
//! are invalid in both are rejected: unbalanced groups and classes, a
//! quantifier with nothing to repeat, reversed ranges, a trailing backslash.
//! Anything else `regex-syntax` refuses (backreferences, look-around, its
//! own escape set) is passed through. A `q` flag makes the pattern a
//! literal, so nothing is checked.

use jspath_core::RegexFlags;
use regex_syntax::ast::{self, ErrorKind};

use super::EmitError;

pub(crate) fn check_pattern(pattern: &str, flags: RegexFlags) -> Result<(), EmitError> {
    if flags.contains(RegexFlags::QUOTE) {
        return Ok(());
    }

    // Octal off so \1-\9 parse as backreferences.
    let result = ast::parse::ParserBuilder::new()
        .octal(false)
        .ignore_whitespace(flags.contains(RegexFlags::WSPACE))
        .build()
        .parse(pattern);

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_shared_error(e.kind()) => Err(EmitError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        }),
        Err(e) => {
            tracing::trace!(pattern, reason = %e.kind(), "regex left to the matcher");
            Ok(())
        }
    }
}

fn is_shared_error(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::GroupUnclosed
            | ErrorKind::GroupUnopened
            | ErrorKind::ClassUnclosed
            | ErrorKind::ClassRangeInvalid
            | ErrorKind::RepetitionMissing
            | ErrorKind::RepetitionCountInvalid
            | ErrorKind::EscapeUnexpectedEof
    )
}
