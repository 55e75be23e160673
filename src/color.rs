use eframe::egui::Color32;
use palette::{Srgb, WithAlpha};

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (or `rrggbb`, `#rgb`) into a [`Color32`].
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = hex.parse().ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Like [`parse_hex`], falling back to grey for malformed input.
pub fn hex_or_gray(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or_else(|| {
        log::warn!("Invalid colour '{hex}', using grey");
        Color32::GRAY
    })
}

/// Parse `hex` and apply `alpha` in `0.0..=1.0`.
pub fn hex_with_alpha(hex: &str, alpha: f32) -> Color32 {
    let rgb: Srgb<u8> = match hex.parse() {
        Ok(rgb) => rgb,
        Err(_) => {
            log::warn!("Invalid colour '{hex}', using grey");
            Srgb::new(160, 160, 160)
        }
    };
    let rgba = rgb.with_alpha((alpha.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(rgba.red, rgba.green, rgba.blue, rgba.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_palette() {
        assert_eq!(parse_hex("#86c5da"), Some(Color32::from_rgb(0x86, 0xc5, 0xda)));
        assert_eq!(parse_hex("#2B3467"), Some(Color32::from_rgb(0x2b, 0x34, 0x67)));
        assert_eq!(parse_hex("not a colour"), None);
    }

    #[test]
    fn invalid_hex_falls_back_to_gray() {
        assert_eq!(hex_or_gray("#zzzzzz"), Color32::GRAY);
    }

    #[test]
    fn alpha_matches_rgba_fill() {
        // rgba(186, 215, 233, 0.5)
        let fill = hex_with_alpha("#bad7e9", 0.5);
        assert_eq!(fill, Color32::from_rgba_unmultiplied(186, 215, 233, 128));
    }
}
