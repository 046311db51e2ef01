//! Coarse mobile-device detection from the user-agent string.

/// Body class added on mobile devices.
pub const MOBILE_BODY_CLASS: &str = "mobile-device";

/// User-agent fragments that mark a mobile browser (matched case-insensitively).
pub const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub fn is_mobile(user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|needle| agent.contains(needle))
}
