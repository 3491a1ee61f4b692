//! Asking the launcher to pin the widget to the home screen.

use crate::error::PinError;
use tracing::{debug, info};

/// First platform level that can pin widgets.
pub const MIN_PIN_API_LEVEL: u32 = 26;

/// The launcher-side widget service.
pub trait WidgetManager {
    /// Ids of this widget already placed on the home screen.
    fn installed_widget_ids(&self) -> Vec<i32>;

    /// Whether the launcher accepts pin requests.
    fn supports_pin_request(&self) -> bool;

    /// Ask the launcher to pin; returns whether the request was accepted.
    fn request_pin(&self) -> bool;
}

/// Platform facts a pin request depends on.
pub trait PinHost {
    /// Running platform level.
    fn platform_level(&self) -> u32;

    /// The widget service, if available.
    fn widget_manager(&self) -> Option<&dyn WidgetManager>;
}

/// Result of a pin request that reached the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// A widget is already on the home screen; nothing was requested
    AlreadyPinned,
    /// The launcher accepted the request
    Requested,
    /// The launcher cannot pin widgets
    NotSupportedByLauncher,
    /// The launcher rejected the request
    Denied,
}

impl PinOutcome {
    /// Whether a widget is, or is about to be, on the home screen.
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::AlreadyPinned | Self::Requested)
    }
}

/// Request a pinned widget.
///
/// # Errors
///
/// Returns [`PinError::Unsupported`] below [`MIN_PIN_API_LEVEL`] and
/// [`PinError::ManagerUnavailable`] without a widget service.
pub fn request_pin(host: &dyn PinHost) -> Result<PinOutcome, PinError> {
    let actual = host.platform_level();
    if actual < MIN_PIN_API_LEVEL {
        return Err(PinError::Unsupported {
            required: MIN_PIN_API_LEVEL,
            actual,
        });
    }
    let manager = host.widget_manager().ok_or(PinError::ManagerUnavailable)?;

    let outcome = if !manager.installed_widget_ids().is_empty() {
        PinOutcome::AlreadyPinned
    } else if !manager.supports_pin_request() {
        PinOutcome::NotSupportedByLauncher
    } else if manager.request_pin() {
        PinOutcome::Requested
    } else {
        PinOutcome::Denied
    };
    info!(?outcome, "pin widget request");
    Ok(outcome)
}

/// Whether a widget is already on the home screen.
///
/// A missing widget service counts as "no".
#[must_use]
pub fn has_pinned_widget(host: &dyn PinHost) -> bool {
    host.widget_manager().is_some_and(|manager| {
        let ids = manager.installed_widget_ids();
        debug!(count = ids.len(), "installed widgets");
        !ids.is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeManager {
        ids: Vec<i32>,
        supported: bool,
        accept: bool,
        requests: Cell<u32>,
    }

    impl WidgetManager for FakeManager {
        fn installed_widget_ids(&self) -> Vec<i32> {
            self.ids.clone()
        }

        fn supports_pin_request(&self) -> bool {
            self.supported
        }

        fn request_pin(&self) -> bool {
            self.requests.set(self.requests.get() + 1);
            self.accept
        }
    }

    struct FakeHost {
        level: u32,
        manager: Option<FakeManager>,
    }

    impl PinHost for FakeHost {
        fn platform_level(&self) -> u32 {
            self.level
        }

        fn widget_manager(&self) -> Option<&dyn WidgetManager> {
            self.manager.as_ref().map(|m| m as &dyn WidgetManager)
        }
    }

    fn host(manager: FakeManager) -> FakeHost {
        FakeHost {
            level: 34,
            manager: Some(manager),
        }
    }

    #[test]
    fn test_old_platform_is_unsupported() {
        let host = FakeHost {
            level: 25,
            manager: None,
        };
        assert_eq!(
            request_pin(&host),
            Err(PinError::Unsupported {
                required: 26,
                actual: 25
            })
        );
    }

    #[test]
    fn test_missing_manager() {
        let host = FakeHost {
            level: 26,
            manager: None,
        };
        assert_eq!(request_pin(&host), Err(PinError::ManagerUnavailable));
        assert!(!has_pinned_widget(&host));
    }

    #[test]
    fn test_already_pinned_skips_request() {
        let host = host(FakeManager {
            ids: vec![7],
            supported: true,
            accept: true,
            ..FakeManager::default()
        });
        assert_eq!(request_pin(&host), Ok(PinOutcome::AlreadyPinned));
        assert_eq!(host.manager.as_ref().unwrap().requests.get(), 0);
        assert!(has_pinned_widget(&host));
    }

    #[test]
    fn test_launcher_without_support() {
        let host = host(FakeManager::default());
        assert_eq!(request_pin(&host), Ok(PinOutcome::NotSupportedByLauncher));
    }

    #[test]
    fn test_requested_and_denied() {
        let accepted = host(FakeManager {
            supported: true,
            accept: true,
            ..FakeManager::default()
        });
        assert_eq!(request_pin(&accepted), Ok(PinOutcome::Requested));
        assert!(PinOutcome::Requested.is_satisfied());

        let denied = host(FakeManager {
            supported: true,
            ..FakeManager::default()
        });
        assert_eq!(request_pin(&denied), Ok(PinOutcome::Denied));
        assert!(!PinOutcome::Denied.is_satisfied());
        assert!(!has_pinned_widget(&denied));
    }
}
