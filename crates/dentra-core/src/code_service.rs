//! Sequential business codes such as `NV004`.

use std::cmp::Ordering;

use dentra_domain::CodeConfig;

pub struct CodeService;

impl CodeService {
    /// Returns `prefix` followed by the highest existing number plus one, zero-padded to `width`.
    ///
    /// Suffixes are compared and incremented as decimal digit strings, so
    /// arbitrarily long numbers never wrap or clamp onto an existing code.
    pub fn next_code(config: &CodeConfig) -> String {
        let highest = config
            .existing_codes
            .iter()
            .map(|code| Self::numeric_suffix(code, &config.prefix))
            .max_by(|left, right| compare_decimal(left, right))
            .unwrap_or_else(|| "0".to_string());
        format!(
            "{}{:0>width$}",
            config.prefix,
            increment_decimal(&highest),
            width = config.width
        )
    }

    /// Digits left after removing the first occurrence of `prefix`, without leading zeros.
    ///
    /// Only leading digits count; codes without any, or with a negative
    /// number, yield `"0"`.
    pub fn numeric_suffix(code: &str, prefix: &str) -> String {
        let remainder = if prefix.is_empty() {
            code.to_owned()
        } else {
            code.replacen(prefix, "", 1)
        };
        let trimmed = remainder.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_end = unsigned
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let significant = unsigned[..digits_end].trim_start_matches('0');
        if negative || significant.is_empty() {
            return "0".to_string();
        }
        significant.to_string()
    }
}

/// Orders canonical digit strings (no leading zeros) by numeric value.
fn compare_decimal(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}
