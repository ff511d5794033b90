//! Small lexical helpers shared by the fraction and length parsers.
//!
//! Only unsigned ASCII digits are recognized. Signs, exponents and
//! thousands separators are rejected.

/// Parses a non-empty run of ASCII digits.
pub(crate) fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `<digits>` or `<digits>.<digits>`, with digit runs of any length.
pub(crate) fn parse_strict_decimal(s: &str) -> Option<f64> {
    let well_formed = match s.split_once('.') {
        Some((int_part, frac_part)) => is_digit_run(int_part) && is_digit_run(frac_part),
        None => is_digit_run(s),
    };
    if !well_formed {
        return None;
    }
    s.parse().ok()
}

/// Parses a decimal where either side of the point may be empty (`".5"`, `"3."`).
pub(crate) fn parse_loose_decimal(s: &str) -> Option<f64> {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let digits_only = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(int_part) || !digits_only(frac_part) {
        return None;
    }
    let int_value = if int_part.is_empty() {
        0.0
    } else {
        int_part.parse::<f64>().ok()?
    };
    if frac_part.is_empty() {
        return Some(int_value);
    }
    let frac_value = format!("0.{}", frac_part).parse::<f64>().ok()?;
    Some(int_value + frac_value)
}

/// Splits `<digits><sep><rest>` where `sep` is a single whitespace or `-`.
pub(crate) fn split_leading_int(s: &str) -> Option<(u64, &str)> {
    let digit_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)?;
    let head = parse_digits(&s[..digit_end])?;
    let mut rest = s[digit_end..].chars();
    let sep = rest.next()?;
    if sep == '-' || sep.is_whitespace() {
        Some((head, rest.as_str()))
    } else {
        None
    }
}
