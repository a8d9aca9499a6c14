//! Utility functions and helpers

/// Insert a thousands separator into a run of ASCII digits
fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a number with thousands separators and a fixed number of decimals
///
/// `format_number(1234567.891, 2, ",")` yields `1,234,567.89`.
pub fn format_number(value: f64, decimals: usize, separator: &str) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // "-0.00" reads badly, only keep the sign for values that survive rounding
    if value.is_sign_negative() && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, separator));
    if let Some(dec) = dec_part {
        out.push('.');
        out.push_str(dec);
    }
    out
}

/// Format a currency amount, e.g. `$1,234.56`
pub fn format_money(value: f64, symbol: &str, decimals: usize, separator: &str) -> String {
    let formatted = format_number(value, decimals, separator);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Escape text for safe inclusion in HTML element content and quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn a free-form label into a CSS class fragment (`"On Hold"` -> `on-hold`)
pub fn css_token(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}
