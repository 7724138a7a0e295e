//! Parsing helpers for numeric and hex-pattern arguments.

use anyhow::{Context, Result, bail};

/// Parse a signed position, decimal or `0x`-prefixed hex, with an optional
/// leading minus.
pub fn parse_position(input: &str) -> Result<i64> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let value = parse_u64(rest).with_context(|| format!("invalid position {input:?}"))?;
    let value = i64::try_from(value).with_context(|| format!("position {input:?} out of range"))?;
    Ok(if negative { -value } else { value })
}

/// Parse an unsigned byte count, decimal or `0x`-prefixed hex.
pub fn parse_count(input: &str) -> Result<u64> {
    parse_u64(input).with_context(|| format!("invalid byte count {input:?}"))
}

/// Parse a pattern given as whitespace-separated hex byte pairs, e.g.
/// `"de ad be ef"` or `"deadbeef"`.
pub fn parse_hex_pattern(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    if compact.is_empty() {
        bail!("empty hex pattern");
    }
    if !compact.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("hex pattern may only contain hex digits and whitespace");
    }
    if compact.len() % 2 != 0 {
        bail!("hex pattern has an odd number of digits");
    }
    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?}", &compact[i..i + 2]))
        })
        .collect()
}

fn parse_u64(input: &str) -> Result<u64> {
    let value = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => input.parse::<u64>()?,
    };
    Ok(value)
}
