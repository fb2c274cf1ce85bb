use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#é1234"), None);
}

#[test]
fn tint_renders_rgba() {
    assert_eq!(tint("#E11D48", 0.125), "rgba(225, 29, 72, 0.125)");
}

#[test]
fn tint_falls_back_to_neutral() {
    assert_eq!(tint("teal", 0.5), "rgba(100, 116, 139, 0.5)");
}

#[test]
fn avatar_style_keeps_solid_text_color() {
    assert_eq!(avatar_style("#000000"), "background-color: rgba(0, 0, 0, 0.125); color: #000000;");
}
