//! The five-slot quick-action strip.

use crate::icon::{decode_optional, IconDecoder};
use crate::model::QuickActionRecord;
use crate::navigation::ClickTarget;
use crate::view::{CommandSet, FieldId, ImageSource, ResourceRef, ViewCommand, QUICK_ACTION_SLOTS};
use spending_widget_config::QuickActionConfig;
use spending_widget_core::Color;

/// Number of slots on the strip.
pub const SLOT_COUNT: usize = QUICK_ACTION_SLOTS.len();

/// What one slot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotBinding {
    /// A configured action
    Bound {
        /// Decoded icon or the default resource
        icon: ImageSource,
        /// Uppercased label
        label: String,
        /// Highlight for quick-add actions, neutral otherwise
        label_color: Color,
        /// Runs the action
        click: ClickTarget,
    },
    /// No action configured; opens configuration
    Placeholder {
        /// "Add" label
        label: String,
        /// Muted color
        label_color: Color,
        /// Opens the configuration screen
        click: ClickTarget,
    },
}

impl SlotBinding {
    /// Whether an action is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }

    /// Slot icon.
    #[must_use]
    pub fn icon(&self) -> ImageSource {
        match self {
            Self::Bound { icon, .. } => icon.clone(),
            Self::Placeholder { .. } => ImageSource::Resource(ResourceRef::DefaultCategoryIcon),
        }
    }

    /// Displayed label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Bound { label, .. } | Self::Placeholder { label, .. } => label,
        }
    }

    /// Label color.
    #[must_use]
    pub const fn label_color(&self) -> Color {
        match self {
            Self::Bound { label_color, .. } | Self::Placeholder { label_color, .. } => *label_color,
        }
    }

    /// Click target.
    #[must_use]
    pub const fn click(&self) -> &ClickTarget {
        match self {
            Self::Bound { click, .. } | Self::Placeholder { click, .. } => click,
        }
    }
}

/// Summary hint under the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    /// No action configured
    TapToAdd,
    /// At least one action configured
    HoldToEdit,
}

impl HintState {
    /// Hint text from `config`.
    #[must_use]
    pub fn text(self, config: &QuickActionConfig) -> &str {
        match self {
            Self::TapToAdd => &config.hint_empty,
            Self::HoldToEdit => &config.hint_configured,
        }
    }
}

/// Action shown in slot `index`.
///
/// An action configured for the slot wins. Otherwise the action at that
/// list position is used, but only if its own slot is off the strip, so an
/// action never shows twice.
#[must_use]
pub fn resolve_slot(actions: &[QuickActionRecord], index: usize) -> Option<&QuickActionRecord> {
    actions
        .iter()
        .find(|action| strip_slot(action) == Some(index))
        .or_else(|| actions.get(index).filter(|action| strip_slot(action).is_none()))
}

fn strip_slot(action: &QuickActionRecord) -> Option<usize> {
    usize::try_from(action.slot)
        .ok()
        .filter(|&slot| slot < SLOT_COUNT)
}

/// Resolved strip for one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickActionLayout {
    widget_id: i32,
    slots: [SlotBinding; SLOT_COUNT],
    hint: HintState,
}

impl QuickActionLayout {
    /// Resolve all five slots.
    #[must_use]
    pub fn resolve(
        widget_id: i32,
        actions: &[QuickActionRecord],
        config: &QuickActionConfig,
        decoder: &dyn IconDecoder,
    ) -> Self {
        let slots = std::array::from_fn(|index| match resolve_slot(actions, index) {
            Some(action) => SlotBinding::Bound {
                icon: decode_optional(decoder, action.icon_image.as_deref()).map_or(
                    ImageSource::Resource(ResourceRef::DefaultCategoryIcon),
                    ImageSource::Icon,
                ),
                label: action.label.to_uppercase(),
                label_color: if action.is_quick_add {
                    config.quick_add_color
                } else {
                    config.label_color
                },
                click: ClickTarget::run(widget_id, action),
            },
            None => SlotBinding::Placeholder {
                label: config.placeholder_label.clone(),
                label_color: config.placeholder_color,
                click: ClickTarget::configure(widget_id),
            },
        });

        Self {
            widget_id,
            slots,
            hint: if actions.is_empty() {
                HintState::TapToAdd
            } else {
                HintState::HoldToEdit
            },
        }
    }

    /// All slots, by index.
    #[must_use]
    pub const fn slots(&self) -> &[SlotBinding; SLOT_COUNT] {
        &self.slots
    }

    /// Summary hint.
    #[must_use]
    pub const fn hint(&self) -> HintState {
        self.hint
    }

    /// Number of bound slots.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_bound()).count()
    }

    /// Emit the strip's view commands.
    pub fn bind(&self, set: &mut CommandSet, config: &QuickActionConfig) {
        for (fields, slot) in QUICK_ACTION_SLOTS.iter().zip(&self.slots) {
            set.set_image(fields.icon, slot.icon());
            set.set_text(fields.label, slot.label());
            set.push(ViewCommand::SetTextColor {
                field: fields.label,
                color: slot.label_color(),
            });
            set.set_click(fields.container, slot.click().clone());
        }
        set.set_text(FieldId::QuickActionHint, self.hint.text(config));
        set.set_click(
            FieldId::QuickActionsContainer,
            ClickTarget::configure(self.widget_id),
        );
    }
}
