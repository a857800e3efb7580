//! Environment probes: viewport breakpoints, user-agent classification,
//! runtime detection, and push-permission state.
//!
//! Probes are pure functions over injected inputs; the `*Source` traits are
//! the seams an embedding application implements against its platform.

use std::sync::OnceLock;

use regex::Regex;

/// Bootstrap-style viewport breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below 576 px.
    Xs,
    /// 576 px and up.
    Sm,
    /// 768 px and up.
    Md,
    /// 992 px and up.
    Lg,
    /// 1200 px and up.
    Xl,
}

impl Breakpoint {
    /// Classifies a viewport width in pixels.
    #[must_use]
    pub const fn from_width(width: u32) -> Self {
        match width {
            0..=575 => Self::Xs,
            576..=767 => Self::Sm,
            768..=991 => Self::Md,
            992..=1199 => Self::Lg,
            _ => Self::Xl,
        }
    }

    /// Lower bound of this breakpoint in pixels.
    #[must_use]
    pub const fn min_width(self) -> u32 {
        match self {
            Self::Xs => 0,
            Self::Sm => 576,
            Self::Md => 768,
            Self::Lg => 992,
            Self::Xl => 1200,
        }
    }
}

/// Whether `width` is at or above the breakpoint's lower bound.
#[must_use]
pub const fn is_at_least(width: u32, breakpoint: Breakpoint) -> bool {
    width >= breakpoint.min_width()
}

/// Live viewport width, injected so probes stay testable.
pub trait ViewportSource {
    /// Current viewport width in pixels.
    fn width(&self) -> u32;
}

/// Live user-agent string, when the runtime exposes one.
pub trait UserAgentSource {
    /// The runtime's user-agent string.
    fn user_agent(&self) -> Option<String>;
}

/// Whether a user-agent string identifies a mobile device.
#[must_use]
#[allow(clippy::expect_used, clippy::missing_panics_doc)]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    static MOBILE: OnceLock<Regex> = OnceLock::new();
    let mobile = MOBILE.get_or_init(|| {
        Regex::new(r"Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
            .expect("mobile pattern is valid")
    });
    mobile.is_match(user_agent)
}

/// Hosting runtime of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRuntime {
    /// Running inside a Cordova (hybrid) container.
    Cordova,
    /// Running in a plain web page.
    Web,
}

impl AppRuntime {
    /// Classifies from the presence of the container's global marker.
    #[must_use]
    pub const fn from_marker(has_cordova_marker: bool) -> Self {
        if has_cordova_marker { Self::Cordova } else { Self::Web }
    }

    /// Whether this is the hybrid container runtime.
    #[must_use]
    pub const fn is_cordova(self) -> bool {
        matches!(self, Self::Cordova)
    }
}

/// Push-notification permission tri-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushPermission {
    /// The user has not been asked yet.
    Default,
    /// Permission granted.
    Granted,
    /// Permission denied.
    Denied,
}

impl PushPermission {
    /// Whether the user has answered the permission prompt.
    #[must_use]
    pub const fn is_requested(self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Whether the prompt was answered with a denial.
    #[must_use]
    pub const fn is_denied(self) -> bool {
        self.is_requested() && matches!(self, Self::Denied)
    }
}

/// Live push-permission state; `None` when the capability is absent.
pub trait PushPermissionSource {
    /// Current permission state, when the platform exposes one.
    fn permission(&self) -> Option<PushPermission>;
}
