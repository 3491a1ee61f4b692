//! Typed records read from the persisted widget snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of money flow for a category or quick action.
///
/// Unknown producer values are kept verbatim so they can be forwarded to the
/// host application unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    /// `"expense"`
    #[default]
    Expense,
    /// `"income"`
    Income,
    /// Any other value
    Other(String),
}

impl EntryType {
    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for EntryType {
    fn from(value: &str) -> Self {
        match value {
            "expense" => Self::Expense,
            "income" => Self::Income,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EntryType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<EntryType> for String {
    fn from(value: EntryType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a quick action opens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShortcutType {
    /// `"category"`: add a transaction in a category
    #[default]
    Category,
    /// Any other value (a feature shortcut)
    Other(String),
}

impl ShortcutType {
    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Category => "category",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for ShortcutType {
    fn from(value: &str) -> Self {
        match value {
            "category" => Self::Category,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ShortcutType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ShortcutType> for String {
    fn from(value: ShortcutType) -> Self {
        value.as_str().to_string()
    }
}

/// One ranked spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Display name
    pub name: String,
    /// Amount spent, never negative
    pub amount: f64,
    /// Pre-formatted share, without the `%` sign
    pub percent: String,
    /// Icon name
    pub icon: String,
    /// Stable identity
    pub category_id: i32,
    /// Expense or income
    pub entry_type: EntryType,
    /// Transport-encoded icon image
    pub icon_image: Option<String>,
    /// Pre-formatted currency amount
    pub formatted_amount: Option<String>,
}

impl CategoryRecord {
    /// A category with the optional fields at their defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, percent: impl Into<String>, category_id: i32) -> Self {
        Self {
            name: name.into(),
            amount,
            percent: percent.into(),
            icon: String::new(),
            category_id,
            entry_type: EntryType::Expense,
            icon_image: None,
            formatted_amount: None,
        }
    }
}

/// One user-configured quick action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickActionRecord {
    /// Logical position, 0..4
    pub slot: i32,
    /// Identity
    pub id: i32,
    /// Display label
    pub label: String,
    /// Expense or income
    pub action_type: EntryType,
    /// Category shortcut or feature shortcut
    pub shortcut_type: ShortcutType,
    /// Feature identifier; never `Some("")`
    pub feature_id: Option<String>,
    /// Target category, `-1` when unset
    pub category_id: i32,
    /// Target category name
    pub category_name: String,
    /// Icon name
    pub icon: String,
    /// Transport-encoded icon image
    pub icon_image: Option<String>,
    /// Preset amount
    pub amount: Option<f64>,
    /// Quick-add actions are highlighted
    pub is_quick_add: bool,
}

impl QuickActionRecord {
    /// Category id value meaning "no category".
    pub const UNSET_CATEGORY: i32 = -1;

    /// An action in `slot` with the optional fields at their defaults.
    #[must_use]
    pub fn new(slot: i32, label: impl Into<String>) -> Self {
        Self {
            slot,
            id: slot,
            label: label.into(),
            action_type: EntryType::Expense,
            shortcut_type: ShortcutType::Category,
            feature_id: None,
            category_id: Self::UNSET_CATEGORY,
            category_name: String::new(),
            icon: String::new(),
            icon_image: None,
            amount: None,
            is_quick_add: false,
        }
    }
}

/// Everything one refresh needs, read as a single unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Presence marker was set
    pub has_data: bool,
    /// e.g. `"10/2026"`
    pub month_label: String,
    /// e.g. `"Chi tiêu tháng này"`
    pub total_expense_label: String,
    /// e.g. `"₫1.250.000"`
    pub total_expense_display: String,
    /// Ranked categories, largest share first
    pub categories: Vec<CategoryRecord>,
    /// Configured quick actions, in producer order
    pub quick_actions: Vec<QuickActionRecord>,
}
