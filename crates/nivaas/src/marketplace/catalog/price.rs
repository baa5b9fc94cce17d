pub(crate) const LAKH_RUPEES: u64 = 100_000;
pub(crate) const CRORE_RUPEES: u64 = 10_000_000;

/// Resolves a quoted price such as `"₹83.47 L – ₹2.45 Cr"` to the rupee
/// value of its first parseable amount. Strings without a usable amount
/// resolve to zero, which keeps unpriced listings comparable in sorts and
/// price-band filters instead of failing the whole pipeline.
pub fn representative_rupees(display_price: &str) -> u64 {
    first_amount(display_price).unwrap_or(0)
}

fn first_amount(text: &str) -> Option<u64> {
    let mut remainder = text;
    while let Some(mark) = remainder.find('₹') {
        let candidate = &remainder[mark + '₹'.len_utf8()..];
        if let Some(rupees) = amount_after_mark(candidate) {
            return Some(rupees);
        }
        // A currency mark without a usable amount does not stop the scan.
        remainder = candidate;
    }
    None
}

fn amount_after_mark(text: &str) -> Option<u64> {
    let end = text
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(text.len());
    let value = leading_float(&text[..end])?;
    let unit = text[end..].trim_start();
    let multiplier = if unit.starts_with("Cr") {
        CRORE_RUPEES
    } else if unit.starts_with('L') {
        LAKH_RUPEES
    } else {
        return None;
    };
    Some((value * multiplier as f64).round() as u64)
}

fn leading_float(token: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for c in token.bytes() {
        match c {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    let number = &token[..end];
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Formats a rupee amount the way listings quote it: `"₹83.47 L"`,
/// `"₹2.45 Cr"`, or a plain grouped figure below one lakh.
pub fn format_display_price(rupees: u64) -> String {
    if rupees >= CRORE_RUPEES {
        format!("₹{} Cr", format_scaled(rupees, CRORE_RUPEES))
    } else if rupees >= LAKH_RUPEES {
        format!("₹{} L", format_scaled(rupees, LAKH_RUPEES))
    } else {
        format!("₹{}", group_inr(rupees))
    }
}

fn format_scaled(rupees: u64, unit: u64) -> String {
    let rendered = format!("{:.2}", rupees as f64 / unit as f64);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Groups digits in the Indian style: the last three digits, then pairs,
/// so `1234567` renders as `12,34,567`.
pub fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        pairs.push(back);
        rest = front;
    }
    if !rest.is_empty() {
        pairs.push(rest);
    }
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}
