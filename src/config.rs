// The form capture lives on the same origin as the static site, so both
// debug and release builds post to the page root.
pub fn get_form_endpoint() -> &'static str {
    "/"
}

/// Vertical offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long a success/error banner stays up after a submission.
pub const STATUS_RESET_MS: u32 = 5_000;

pub const FORM_NAME: &str = "contact";
pub const TRIAL_INQUIRY_TYPE: &str = "Free Trial Booking";

pub const WHATSAPP_URL: &str = "https://wa.me/48880011110";
pub const PHONE_URL: &str = "tel:+48880011110";
pub const PHONE_DISPLAY: &str = "+48 880-011-110";
pub const EMAIL_ADDRESS: &str = "dave@englishwithdave.com";

pub fn email_url() -> String {
    format!("mailto:{}", EMAIL_ADDRESS)
}
