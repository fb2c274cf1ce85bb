//! Team color helpers for avatars and calendar events.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Alpha applied to team colors behind event text and avatar initials.
pub const TINT_ALPHA: f64 = 0.125;

const NEUTRAL: (u8, u8, u8) = (100, 116, 139);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
            Some((channel(&digits.next()?)?, channel(&digits.next()?)?, channel(&digits.next()?)?))
        }
        6 => Some((channel(hex.get(0..2)?)?, channel(hex.get(2..4)?)?, channel(hex.get(4..6)?)?)),
        _ => None,
    }
}

/// Translucent `rgba(...)` background for a team color. Unparseable colors
/// fall back to a neutral slate.
pub fn tint(color: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(color).unwrap_or(NEUTRAL);
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Inline style for an avatar fallback: tinted background, solid text.
pub fn avatar_style(color: &str) -> String {
    format!("background-color: {}; color: {color};", tint(color, TINT_ALPHA))
}
