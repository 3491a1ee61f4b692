//! Snapshot reading and parsing.
//!
//! The producer writes loosely typed JSON into a key/value store from another
//! process. Reading never fails: a bad entry is dropped, a bad list becomes
//! empty, and an absent key takes its default.

use crate::error::EntryError;
use crate::model::{CategoryRecord, EntryType, QuickActionRecord, ShortcutType, Snapshot};
use serde_json::{Map, Value};
use spending_widget_config::SnapshotDefaults;
use std::collections::HashMap;
use tracing::{debug, warn};

type Object = Map<String, Value>;

/// Snapshot store keys.
pub mod keys {
    /// Presence marker; any non-empty value means data is available
    pub const LAST_UPDATE: &str = "last_update";
    /// Month label
    pub const MONTH_YEAR: &str = "month_year";
    /// Pre-formatted monthly total
    pub const TOTAL_EXPENSE_FORMATTED: &str = "total_expense_formatted";
    /// Caption for the monthly total
    pub const TOTAL_EXPENSE_LABEL: &str = "total_expense_label";
    /// JSON array of ranked categories
    pub const TOP_CATEGORIES: &str = "top_categories";
    /// JSON array of quick actions
    pub const WIDGET_QUICK_ACTIONS: &str = "widget_quick_actions";
}

/// Read-only view of the producer's key/value store.
pub trait SnapshotStore {
    /// String stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
}

impl SnapshotStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// In-memory store, for hosts that already hold the values and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    values: HashMap<String, String>,
}

impl MemorySnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set a value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Every key read once, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    /// `last_update`
    pub last_update: Option<String>,
    /// `month_year`
    pub month_year: Option<String>,
    /// `total_expense_formatted`
    pub total_expense_formatted: Option<String>,
    /// `total_expense_label`
    pub total_expense_label: Option<String>,
    /// `top_categories`
    pub top_categories: Option<String>,
    /// `widget_quick_actions`
    pub widget_quick_actions: Option<String>,
}

impl RawSnapshot {
    /// Read all keys from `store`.
    #[must_use]
    pub fn read(store: &dyn SnapshotStore) -> Self {
        Self {
            last_update: store.get(keys::LAST_UPDATE),
            month_year: store.get(keys::MONTH_YEAR),
            total_expense_formatted: store.get(keys::TOTAL_EXPENSE_FORMATTED),
            total_expense_label: store.get(keys::TOTAL_EXPENSE_LABEL),
            top_categories: store.get(keys::TOP_CATEGORIES),
            widget_quick_actions: store.get(keys::WIDGET_QUICK_ACTIONS),
        }
    }

    /// Whether the presence marker is set.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.last_update.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Parse into a typed snapshot.
    ///
    /// Quick actions are parsed regardless of the presence marker; the month
    /// and categories only when it is set.
    #[must_use]
    pub fn parse(&self, defaults: &SnapshotDefaults) -> Snapshot {
        let has_data = self.has_data();
        let or_default = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Snapshot {
            has_data,
            month_label: if has_data {
                or_default(&self.month_year, &defaults.month)
            } else {
                String::new()
            },
            total_expense_label: or_default(&self.total_expense_label, &defaults.total_label),
            total_expense_display: or_default(
                &self.total_expense_formatted,
                &defaults.total_display,
            ),
            categories: if has_data {
                parse_categories(self.top_categories.as_deref().unwrap_or_default())
            } else {
                Vec::new()
            },
            quick_actions: parse_quick_actions(
                self.widget_quick_actions.as_deref().unwrap_or_default(),
                &defaults.action_label,
            ),
        }
    }
}

impl Snapshot {
    /// Read and parse the current snapshot from `store`.
    #[must_use]
    pub fn read(store: &dyn SnapshotStore, defaults: &SnapshotDefaults) -> Self {
        RawSnapshot::read(store).parse(defaults)
    }
}

/// Parse the `top_categories` array.
#[must_use]
pub fn parse_categories(json: &str) -> Vec<CategoryRecord> {
    parse_list(keys::TOP_CATEGORIES, json, parse_category)
}

/// Parse the `widget_quick_actions` array.
///
/// `default_label` labels actions that carry none.
#[must_use]
pub fn parse_quick_actions(json: &str, default_label: &str) -> Vec<QuickActionRecord> {
    parse_list(keys::WIDGET_QUICK_ACTIONS, json, |obj, index| {
        Ok(parse_quick_action(obj, index, default_label))
    })
}

fn parse_list<T>(
    key: &'static str,
    json: &str,
    parse_entry: impl Fn(&Object, usize) -> Result<T, EntryError>,
) -> Vec<T> {
    let json = json.trim();
    if json.is_empty() || json == "[]" {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            warn!(key, found = value_kind(&other), "snapshot list is not an array");
            return Vec::new();
        }
        Err(error) => {
            warn!(key, %error, "malformed snapshot list");
            return Vec::new();
        }
    };

    let total = entries.len();
    let parsed: Vec<T> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let result = entry
                .as_object()
                .ok_or(EntryError::NotAnObject)
                .and_then(|obj| parse_entry(obj, index));
            match result {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(key, index, %error, "dropped snapshot entry");
                    None
                }
            }
        })
        .collect();

    debug!(key, total, kept = parsed.len(), "parsed snapshot list");
    parsed
}

fn parse_category(obj: &Object, index: usize) -> Result<CategoryRecord, EntryError> {
    let amount = require_f64(obj, "amount")?;
    if amount < 0.0 {
        return Err(EntryError::OutOfRange {
            field: "amount",
            value: amount.to_string(),
        });
    }

    Ok(CategoryRecord {
        name: require_string(obj, "name")?,
        amount,
        percent: require_string(obj, "percent")?,
        icon: opt_string(obj, "icon").unwrap_or_default(),
        category_id: opt_i32(obj, "category_id").unwrap_or_else(|| index_default(index)),
        entry_type: opt_string(obj, "type").map_or(EntryType::Expense, EntryType::from),
        icon_image: opt_string(obj, "icon_image"),
        formatted_amount: opt_string(obj, "formatted_amount"),
    })
}

fn parse_quick_action(obj: &Object, index: usize, default_label: &str) -> QuickActionRecord {
    QuickActionRecord {
        slot: opt_i32(obj, "slot").unwrap_or_else(|| index_default(index)),
        id: opt_i32(obj, "id").unwrap_or_else(|| index_default(index)),
        label: opt_string(obj, "label").unwrap_or_else(|| default_label.to_string()),
        action_type: opt_string(obj, "type").map_or(EntryType::Expense, EntryType::from),
        shortcut_type: opt_string(obj, "shortcut_type")
            .map_or(ShortcutType::Category, ShortcutType::from),
        feature_id: opt_string(obj, "feature_id").filter(|id| !id.trim().is_empty()),
        category_id: opt_i32(obj, "category_id").unwrap_or(QuickActionRecord::UNSET_CATEGORY),
        category_name: opt_string(obj, "category_name").unwrap_or_default(),
        icon: opt_string(obj, "icon").unwrap_or_default(),
        icon_image: opt_string(obj, "icon_image"),
        amount: field(obj, "amount").and_then(coerce_f64),
        is_quick_add: field(obj, "is_quick_add")
            .and_then(coerce_bool)
            .unwrap_or(false),
    }
}

fn index_default(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

// ===== Field extraction =====

/// A present, non-null field.
fn field<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

fn require_string(obj: &Object, key: &'static str) -> Result<String, EntryError> {
    let value = field(obj, key).ok_or(EntryError::Missing(key))?;
    coerce_string(value).ok_or(EntryError::Mistyped {
        field: key,
        expected: "string",
    })
}

fn require_f64(obj: &Object, key: &'static str) -> Result<f64, EntryError> {
    let value = field(obj, key).ok_or(EntryError::Missing(key))?;
    coerce_f64(value).ok_or(EntryError::Mistyped {
        field: key,
        expected: "number",
    })
}

fn opt_string(obj: &Object, key: &str) -> Option<String> {
    field(obj, key).and_then(coerce_string)
}

fn opt_i32(obj: &Object, key: &str) -> Option<i32> {
    field(obj, key).and_then(coerce_i32)
}

/// Strings as-is; numbers and booleans in their JSON text form.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Finite numbers, or strings that parse as one.
fn coerce_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Integers, floats truncated toward zero, or numeric strings.
fn coerce_i32(value: &Value) -> Option<i32> {
    if let Some(int) = value.as_i64() {
        return i32::try_from(int).ok();
    }
    let float = coerce_f64(value)?.trunc();
    if float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX) {
        Some(float as i32)
    } else {
        None
    }
}

/// Booleans, or the strings `"true"` / `"false"` in any case.
fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
