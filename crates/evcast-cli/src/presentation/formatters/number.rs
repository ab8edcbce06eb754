/// Round to a whole number and group digits, e.g. 1234567.4 -> "1,234,567".
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Compact axis-label form, e.g. 9871200 -> "9.9M".
pub fn format_compact(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(152_340.0), "152,340");
        assert_eq!(format_grouped(9_871_200.0), "9,871,200");
    }

    #[test]
    fn rounds_before_grouping() {
        assert_eq!(format_grouped(1_499.6), "1,500");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(format_grouped(-1_234.0), "-1,234");
    }

    #[test]
    fn compacts_large_counts() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(45_000), "45.0k");
        assert_eq!(format_compact(9_871_200), "9.9M");
    }
}
