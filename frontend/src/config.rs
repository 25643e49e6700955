/// Extra wait after the nominal spin duration before the fallback
/// resolution fires (covers a stalled animation driver).
pub const SPIN_FALLBACK_GRACE_MS: u32 = 1500;

pub const FIRST_SPIN_CUE_SRC: &str = "/audio/spin-start.mp3";
pub const RETRY_SPIN_CUE_SRC: &str = "/audio/spin-retry.mp3";

/// Destination the won discount is redeemed at, opened in a new tab.
pub fn redemption_url(outcome: &str) -> String {
    let encoded = js_sys::encode_uri_component(outcome);
    format!(
        "https://www.amazon.com/primeday?utm_source=quiz&discount={}",
        String::from(encoded)
    )
}
