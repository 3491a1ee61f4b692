//! Deep-link payloads attached to clickable widget regions.

use crate::model::{EntryType, QuickActionRecord, ShortcutType};
use serde::{Deserialize, Serialize};

/// Everything the host needs to run one quick action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionLaunch {
    /// Expense or income
    #[serde(rename = "type")]
    pub action_type: EntryType,
    /// Category or feature shortcut
    pub shortcut_type: ShortcutType,
    /// Target category, `-1` when unset
    pub category_id: i32,
    /// Target category name
    pub category_name: String,
    /// Icon name
    pub icon: String,
    /// Label as configured (not uppercased)
    pub label: String,
    /// Preset amount, `0.0` when the action carries none
    pub amount: f64,
    /// Quick-add flag
    pub is_quick_add: bool,
    /// Feature identifier
    pub feature_id: Option<String>,
    /// Slot the action was configured for
    pub slot: i32,
    /// Ask the host for haptic feedback
    pub trigger_haptic: bool,
}

impl From<&QuickActionRecord> for QuickActionLaunch {
    fn from(action: &QuickActionRecord) -> Self {
        Self {
            action_type: action.action_type.clone(),
            shortcut_type: action.shortcut_type.clone(),
            category_id: action.category_id,
            category_name: action.category_name.clone(),
            icon: action.icon.clone(),
            label: action.label.clone(),
            amount: action.amount.unwrap_or(0.0),
            is_quick_add: action.is_quick_add,
            feature_id: action.feature_id.clone(),
            slot: action.slot,
            trigger_haptic: true,
        }
    }
}

/// Where a click takes the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum NavigationPayload {
    /// Open a main-screen tab
    OpenTab {
        /// Tab index
        tab: u32,
    },
    /// Open the quick-action configuration screen
    OpenQuickActionConfig,
    /// Run a configured quick action
    RunQuickAction(QuickActionLaunch),
}

/// A payload plus the request code that keeps it distinct per widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickTarget {
    /// Stable per widget and region
    pub request_code: i64,
    /// What happens on click
    pub payload: NavigationPayload,
}

impl ClickTarget {
    /// Widget body: open a tab. Request code is the widget id.
    #[must_use]
    pub fn open_tab(widget_id: i32, tab: u32) -> Self {
        Self {
            request_code: i64::from(widget_id),
            payload: NavigationPayload::OpenTab { tab },
        }
    }

    /// Configuration screen. Request code is `widget_id * 1000`.
    #[must_use]
    pub fn configure(widget_id: i32) -> Self {
        Self {
            request_code: i64::from(widget_id) * 1000,
            payload: NavigationPayload::OpenQuickActionConfig,
        }
    }

    /// A bound quick action. Request code is `widget_id * 100 + slot`.
    #[must_use]
    pub fn run(widget_id: i32, action: &QuickActionRecord) -> Self {
        Self {
            request_code: i64::from(widget_id) * 100 + i64::from(action.slot),
            payload: NavigationPayload::RunQuickAction(action.into()),
        }
    }
}
