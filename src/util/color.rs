//! Hex color validation for avatar configuration.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `RGB`/`RRGGBB` values, with or without a leading `#`.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = bare_hex(raw)?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize to the lowercase, `#`-less form the avatar service expects.
///
/// Short forms stay short (`FFF` -> `fff`).
pub fn normalize_service_hex(raw: &str) -> Option<String> {
    parse_hex_rgb(raw)?;
    bare_hex(raw).map(str::to_ascii_lowercase)
}

/// CSS form of a validated service color (`fff` -> `#fff`).
pub fn css_hex(service_hex: &str) -> String {
    format!("#{}", service_hex.trim_start_matches('#'))
}

fn bare_hex(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    hex.bytes().all(|b| b.is_ascii_hexdigit()).then_some(hex)
}
