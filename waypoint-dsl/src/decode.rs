//! Literal value decoders and their printing counterparts.
//!
//! String and regex literals follow different escaping rules, so each has its
//! own decoder. Both are total: any body the lexer hands over decodes to
//! exactly one value.

/// Decode the body of a `"..."` literal (without the delimiters).
///
/// `\a \b \f \n \r \t \v` become control characters; any other escaped
/// character stands for itself, so `\\`, `\"`, `\/` and `\z` decode to
/// `\`, `"`, `/` and `z`. A lone trailing backslash decodes to nothing.
pub fn decode_string(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        if let Some(escaped) = chars.next() {
            value.push(unescape_char(escaped));
        }
    }

    value
}

fn unescape_char(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        other => other,
    }
}

/// Decode the body of a `/.../` literal (without the delimiters).
///
/// Only `\/` and `\\` are unescaped. Every other backslash sequence is kept
/// as written because it means something to the regex engine.
pub fn decode_regex(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            pattern.push(c);
            continue;
        }

        match chars.next() {
            Some(escaped @ ('/' | '\\')) => pattern.push(escaped),
            Some(other) => {
                pattern.push('\\');
                pattern.push(other);
            }
            None => pattern.push('\\'),
        }
    }

    pattern
}

/// Validate a number literal and convert it.
///
/// Accepted: optional `-`, digits, then optionally `.` followed by at least
/// one digit. The integer part may be empty (`.3`), the fraction may not
/// (`3.` is rejected).
pub fn decode_number(literal: &str) -> Option<f64> {
    let unsigned = literal.strip_prefix('-').unwrap_or(literal);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) {
        return None;
    }

    match fraction {
        Some(fraction) if fraction.is_empty() || !all_digits(fraction) => return None,
        None if integer.is_empty() => return None,
        _ => {}
    }

    literal.parse::<f64>().ok()
}

/// Escape a string value so that [`decode_string`] restores it.
pub fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\x07' => escaped.push_str("\\a"),
            '\x08' => escaped.push_str("\\b"),
            '\x0c' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x0b' => escaped.push_str("\\v"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape a regex pattern so that [`decode_regex`] restores it and the lexer
/// finds the closing delimiter.
///
/// `/` is always written as `\/`. A backslash followed by any character other
/// than `/` or `\` is written as the same pair, except `\]` inside a bracket
/// expression, whose backslash is doubled so the bracket still closes the
/// expression when the literal is scanned again.
pub fn escape_regex(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() + 2);
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '/' => escaped.push_str("\\/"),
            '\\' => match chars.peek().copied() {
                None | Some('/') | Some('\\') => escaped.push_str("\\\\"),
                Some(']') if in_class => escaped.push_str("\\\\"),
                Some(next) => {
                    escaped.push('\\');
                    escaped.push(next);
                    chars.next();
                }
            },
            '[' => {
                in_class = true;
                escaped.push(c);
            }
            ']' => {
                in_class = false;
                escaped.push(c);
            }
            other => escaped.push(other),
        }
    }
    escaped
}

/// True when `/{escape_regex(pattern)}/` lexes back as one regex literal.
///
/// A `[` with no later `]` keeps the scanner inside a bracket expression, so
/// the closing `/` would be read as part of the pattern.
pub fn fits_regex_literal(pattern: &str) -> bool {
    let escaped = escape_regex(pattern);
    let mut chars = escaped.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '[' => in_class = true,
            ']' => in_class = false,
            '\\' => {
                chars.next();
            }
            _ => {}
        }
    }

    !in_class
}
