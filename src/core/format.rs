//! Display formatting for counters and prices

/// Group digits in threes with commas: `450000` becomes `"450,000"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Stat card text, e.g. `"100,000+"` or `"98%"`
pub fn format_stat(value: u64, suffix: &str) -> String {
    format!("{}{}", group_thousands(value), suffix)
}

/// Whole-dollar price, e.g. `"$12"`
pub fn format_price(dollars: u32) -> String {
    format!("${}", group_thousands(dollars as u64))
}

/// Canvas dimensions, e.g. `"1920 × 1080"`
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{} × {}", width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(98), "98");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(450_000), "450,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(100_000, "+"), "100,000+");
        assert_eq!(format_stat(98, "%"), "98%");
        assert_eq!(format_stat(5, ""), "5");
    }

    #[test]
    fn test_format_price_and_dimensions() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(12), "$12");
        assert_eq!(format_dimensions(1920, 1080), "1920 × 1080");
    }
}
