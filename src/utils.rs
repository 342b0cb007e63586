//! Small display helpers shared by the UI and the assistant.

/// Formats a USD value with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Formats an asset quantity with thousands separators and two decimals.
pub fn format_qty(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let hundredths = (value.abs() * 100.0).round() as u64;
    format!(
        "{sign}{}.{:02}",
        group_thousands(hundredths / 100),
        hundredths % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Shortens an address to its ends, e.g. `0x742d35...95f3a8f`. Counts
/// characters rather than bytes: the recipient field accepts arbitrary
/// typed input, so this must not slice inside a multi-byte character.
pub fn shorten_address(address: &str) -> String {
    let char_count = address.chars().count();
    if char_count <= 16 {
        return address.to_string();
    }
    let head: String = address.chars().take(8).collect();
    let tail: String = address.chars().skip(char_count - 7).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(150_000.0), "$150,000.00");
        assert_eq!(format_usd(3750.0), "$3,750.00");
        assert_eq!(format_usd(0.3), "$0.30");
        assert_eq!(format_usd(-1500.0), "-$1,500.00");
    }

    #[test]
    fn qty_formatting() {
        assert_eq!(format_qty(10_250.50), "10,250.50");
        assert_eq!(format_qty(5.25), "5.25");
        assert_eq!(format_qty(0.15), "0.15");
    }

    #[test]
    fn address_shortening_survives_multibyte_input() {
        // 6 chars but 18 bytes; must pass through, not slice by byte.
        let short = "€€€€€€";
        assert_eq!(shorten_address(short), short);

        let long = "€".repeat(20);
        let shortened = shorten_address(&long);
        assert_eq!(
            shortened,
            format!("{}...{}", "€".repeat(8), "€".repeat(7))
        );
    }

    #[test]
    fn address_shortening() {
        let short = shorten_address("0xabc");
        assert_eq!(short, "0xabc");
        let long = shorten_address("0x742d35Cc6634C0532925a3b844Bc9e7595f3a8f");
        assert!(long.starts_with("0x742d35"));
        assert!(long.ends_with("95f3a8f"));
        assert!(long.contains("..."));
    }
}
