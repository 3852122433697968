//! Indonesian-style number rendering: `.` groups thousands, `,` marks decimals.

const MAX_FRACTION_DIGITS: u32 = 3;

/// `Rp 796.250.000` with a non-breaking space after `Rp`, as id-ID
/// currency formatting does. Rounds to whole Rupiah.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u128);
    if rounded < 0.0 {
        format!("-Rp\u{a0}{digits}")
    } else {
        format!("Rp\u{a0}{digits}")
    }
}

/// Grouped number with up to three decimals, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round() as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if fraction != 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Short axis labels: `800 jt`, `1,2 M`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [
        (1e12, "T"),
        (1e9, "M"),
        (1e6, "jt"),
        (1e3, "rb"),
    ];
    let magnitude = value.abs();
    for (unit, suffix) in UNITS {
        if magnitude >= unit {
            let scaled = ((value / unit) * 10.0).round() / 10.0;
            return format!("{} {suffix}", format_number(scaled));
        }
    }
    format_number(value)
}

fn group_thousands(value: u128) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
