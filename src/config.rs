//! Fixed page configuration.
//!
//! The webhook endpoint is the only piece of external wiring this page has.
//! It is a build-time constant, not user input.

use std::time::Duration;

/// Make.com automation scenario that receives every referral as JSON.
pub const WEBHOOK_URL: &str = "https://hook.us2.make.com/a2bodn21dbv4ecftcz778twwohe2k9ao";

/// Public URL of this page, encoded in the QR code so visitors can reopen
/// the form on another device.
pub const FORM_URL: &str = "https://lagoazul.skanhous.com.br";

/// Rendered side of the QR code, in pixels.
pub const QR_SIZE: u32 = 120;

/// Auto-advance cadence of the slideshow.
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(5);
