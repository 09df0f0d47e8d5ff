//! QR code rendering for the "open this form on your phone" panel.

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Render `url` as an SVG QR code at least `side` pixels square.
///
/// Error correction level L matches the low-stakes use (a short public
/// URL on a screen, not a printed label).
pub fn qr_svg(url: &str, side: u32) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(side, side)
        .quiet_zone(false)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn page_url_renders_as_svg() {
        let markup = qr_svg(config::FORM_URL, config::QR_SIZE).unwrap();
        assert!(markup.contains("<svg"));
        assert!(markup.contains("</svg>"));
    }

    #[test]
    fn oversized_payload_is_an_error_not_a_panic() {
        // QR capacity at level L tops out around 2953 bytes
        let huge = "x".repeat(10_000);
        assert!(qr_svg(&huge, 120).is_err());
    }
}
