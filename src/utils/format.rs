//! Display formatting for prices, percentages and supplies (USD, en-US style).

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Inserts `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-point rendering with at least `min` and at most `max` decimals,
/// trailing zeros past `min` removed.
fn fixed_trimmed(value: f64, min: usize, max: usize) -> (String, String) {
    let fixed = format!("{:.*}", max, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min {
        frac.push('0');
    }
    (group_thousands(int_part), frac)
}

/// `$50,000.00` for prices ≥ 1, up to 8 decimals below that (`$0.00001234`).
pub fn format_price(price: f64) -> String {
    let max_decimals = if price.abs() >= 1.0 { 2 } else { 8 };
    let (int_part, frac) = fixed_trimmed(price, 2, max_decimals);
    let sign = if price < 0.0 && (int_part != "0" || frac.bytes().any(|b| b != b'0')) {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, int_part, frac)
}

/// Percentage points with an explicit sign, except for zero: `+2.51%`, `-0.40%`, `0.00%`.
pub fn format_percentage(percentage: f64) -> String {
    let (int_part, frac) = fixed_trimmed(percentage, 2, 2);
    let body = format!("{}.{}%", int_part, frac);
    if int_part == "0" && frac == "00" {
        body
    } else if percentage > 0.0 {
        format!("+{}", body)
    } else {
        format!("-{}", body)
    }
}

/// `$1.23B`, `$45.60M`, `$7.89K`.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= BILLION {
        format!("${:.2}B", market_cap / BILLION)
    } else if market_cap >= MILLION {
        format!("${:.2}M", market_cap / MILLION)
    } else {
        format!("${:.2}K", market_cap / THOUSAND)
    }
}

/// Like [`format_market_cap`] without the currency, and raw below a thousand.
pub fn format_supply(supply: f64) -> String {
    if supply >= BILLION {
        format!("{:.2}B", supply / BILLION)
    } else if supply >= MILLION {
        format!("{:.2}M", supply / MILLION)
    } else if supply >= THOUSAND {
        format!("{:.2}K", supply / THOUSAND)
    } else {
        supply.to_string()
    }
}

/// Plain-text content of an HTML fragment: tags dropped, entities decoded.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    decode_entities(&text)
}

/// Longest entity body (between `&` and `;`) worth looking at.
const MAX_ENTITY_LEN: usize = 10;

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    let ch = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        _ => return None,
    };
    Some(ch)
}

/// Decodes named and numeric (`&#8217;`, `&#x27;`) entities. Unknown ones stay verbatim.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&after[..end]).map(|ch| (ch, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Clips to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}
