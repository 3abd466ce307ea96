use netb_core::NetBuilderError;

use crate::error::grammar_error;

/// Largest supported `m` for nets of `2^m` points.
pub const MAX_LOG_SIZE: usize = 31;

/// Parses a net size, `<n>` (a power of two) or `2^<m>`, and returns `m`.
pub fn parse_size(text: &str) -> Result<usize, NetBuilderError> {
    let trimmed = text.trim();
    let m = if let Some((base, exponent)) = trimmed.split_once('^') {
        if base.trim() != "2" {
            return Err(grammar_error("size_base", "only base 2 is supported", text));
        }
        exponent
            .trim()
            .parse::<usize>()
            .map_err(|_| grammar_error("size", "invalid exponent", text))?
    } else {
        let points = trimmed
            .parse::<u64>()
            .map_err(|_| grammar_error("size", "invalid number of points", text))?;
        if !points.is_power_of_two() {
            return Err(grammar_error("size", "the number of points must be a power of two", text));
        }
        points.trailing_zeros() as usize
    };
    if m == 0 || m > MAX_LOG_SIZE {
        return Err(grammar_error(
            "size_range",
            format!("the size must lie between 2^1 and 2^{MAX_LOG_SIZE}"),
            text,
        ));
    }
    Ok(m)
}

/// Parses a positive dimension.
pub fn parse_dimension(text: &str) -> Result<usize, NetBuilderError> {
    match text.trim().parse::<usize>() {
        Ok(dimension) if dimension > 0 => Ok(dimension),
        _ => Err(grammar_error("dimension", "the dimension must be a positive integer", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_size_notations() {
        assert_eq!(parse_size("2^10").expect("exponent"), 10);
        assert_eq!(parse_size("1024").expect("points"), 10);
    }

    #[test]
    fn rejects_bad_sizes() {
        for text in ["3^4", "1000", "1", "2^0", "2^32", "two"] {
            assert!(parse_size(text).is_err(), "{text}");
        }
    }

    #[test]
    fn dimension_must_be_positive() {
        assert_eq!(parse_dimension("5").expect("five"), 5);
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("-1").is_err());
    }
}
