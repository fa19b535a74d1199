//! Display formatting for addresses, amounts, and deadlines.

use alloy::primitives::{Address, U256};

use crate::units;

/// Shorten an address for display: `0x` plus the first four hex chars,
/// then the last four. `0xC05e...ceB1` style, checksum casing preserved.
pub fn short_address(address: &Address) -> String {
    let full = format!("{address}");
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

/// Human-readable time left until `deadline` (both unix seconds).
///
/// Past deadlines read "Expired". Otherwise the largest nonzero unit
/// leads: days with hours, hours with minutes, or bare minutes. Anything
/// under a minute floors to "0m".
pub fn format_time_remaining(deadline: u64, now: u64) -> String {
    if deadline <= now {
        return "Expired".to_string();
    }

    let remaining = deadline - now;
    let days = remaining / 86_400;
    let hours = (remaining % 86_400) / 3_600;
    let minutes = (remaining % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Token amount for the dashboard: base units to decimals, with
/// thousands separators in the whole part.
pub fn format_token_amount(value: U256, decimals: u32) -> String {
    let plain = units::format_units(value, decimals);
    match plain.split_once('.') {
        Some((whole, frac)) => format!("{}.{frac}", group_thousands(whole)),
        None => group_thousands(&plain),
    }
}

/// Insert commas into a bare digit string: "1234567" -> "1,234,567".
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
