//! Placeholder images for a missing profile photo.
//!
//! Both images depend only on the display name and avatar config, so the same
//! person always gets the same placeholder.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use url::form_urlencoded;

use crate::config::AvatarConfig;
use crate::util::color::css_hex;

/// Remote generated avatar addressed by `display_name`.
pub fn placeholder_url(display_name: &str, config: &AvatarConfig) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", display_name.trim())
        .append_pair("size", &config.size.to_string())
        .append_pair("background", &config.background)
        .append_pair("color", &config.color)
        .append_pair("bold", if config.bold { "true" } else { "false" })
        .finish();
    format!("{}?{query}", config.base_url)
}

/// Up to two upper-cased initials: first letter of the first and last word.
pub fn initials(display_name: &str) -> String {
    let mut words = display_name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.next_back().and_then(|w| w.chars().next());
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

/// Inline SVG with the name's initials, used when the remote avatar fails too.
pub fn initials_data_uri(display_name: &str, config: &AvatarConfig) -> String {
    let text = escape_xml(&initials(display_name));
    let weight = if config.bold { "700" } else { "400" };
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 100 100\">\
         <rect width=\"100\" height=\"100\" fill=\"{bg}\"/>\
         <text x=\"50\" y=\"50\" dy=\".35em\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"40\" font-weight=\"{weight}\" fill=\"{fg}\">{text}</text></svg>",
        size = config.size,
        bg = css_hex(&config.background),
        fg = css_hex(&config.color),
    );
    let encoded: String = form_urlencoded::byte_serialize(svg.as_bytes()).collect();
    // `byte_serialize` form-encodes spaces as `+`, which a data URI reads literally.
    format!("data:image/svg+xml;charset=utf-8,{}", encoded.replace('+', "%20"))
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
