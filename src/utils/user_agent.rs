//! Coarse user-agent classification for click analytics.
//!
//! Classification is a case-insensitive substring test against a fixed list of
//! tokens. The order of the tests is significant: most real user agents carry
//! several tokens (Chrome advertises "Safari", Edge advertises "Chrome"), and
//! the first match wins.

use std::fmt;

/// Device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Mobile,
    Desktop,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "Mobile",
            Device::Desktop => "Desktop",
        }
    }
}

/// Browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Other,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
            Browser::Edge => "Edge",
            Browser::Other => "Other",
        }
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOS,
    Linux,
    Android,
    IOS,
    Other,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOS => "MacOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Android => "Android",
            OperatingSystem::IOS => "iOS",
            OperatingSystem::Other => "Other",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub device: Device,
    pub browser: Browser,
    pub os: OperatingSystem,
}

const BROWSER_TOKENS: &[(&str, Browser)] = &[
    ("chrome", Browser::Chrome),
    ("firefox", Browser::Firefox),
    ("safari", Browser::Safari),
    ("edge", Browser::Edge),
];

const OS_TOKENS: &[(&str, OperatingSystem)] = &[
    ("windows", OperatingSystem::Windows),
    ("mac", OperatingSystem::MacOS),
    ("linux", OperatingSystem::Linux),
    ("android", OperatingSystem::Android),
    ("ios", OperatingSystem::IOS),
];

/// Classifies a raw `User-Agent` header value.
///
/// Never fails: a missing or unrecognised value yields
/// `Desktop` / `Other` / `Other`.
///
/// # Examples
///
/// ```
/// use linktrack::utils::user_agent::{classify, Browser, Device, OperatingSystem};
///
/// let info = classify(Some("Windows NT Chrome/99"));
/// assert_eq!(info.device, Device::Desktop);
/// assert_eq!(info.browser, Browser::Chrome);
/// assert_eq!(info.os, OperatingSystem::Windows);
/// ```
pub fn classify(user_agent: Option<&str>) -> UserAgentInfo {
    let ua = user_agent.unwrap_or_default().to_lowercase();

    let device = if ua.contains("mobile") {
        Device::Mobile
    } else {
        Device::Desktop
    };

    let browser = BROWSER_TOKENS
        .iter()
        .find(|(token, _)| ua.contains(token))
        .map_or(Browser::Other, |(_, browser)| *browser);

    let os = OS_TOKENS
        .iter()
        .find(|(token, _)| ua.contains(token))
        .map_or(OperatingSystem::Other, |(_, os)| *os);

    UserAgentInfo {
        device,
        browser,
        os,
    }
}
