// Small string helpers for attribute parsing and HTML output.

/// Escapes text for use inside element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parses a `data-design-*` value such as `"120"` or `"120px"`.
#[inline]
pub fn parse_design_value(raw: &str) -> Option<f32> {
    let raw = raw.trim();
    let number = raw.strip_suffix("px").unwrap_or(raw).trim_end();
    number.parse::<f32>().ok().filter(|v| v.is_finite())
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{:.2}px", value)
}

/// `YYYY-MM-DD` from calendar fields as `Date` reports them (zero-based month).
#[inline]
pub fn calendar_date(year: u32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}
