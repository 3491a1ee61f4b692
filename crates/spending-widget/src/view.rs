//! Declarative view commands and the sink that receives them.

use crate::icon::DecodedIcon;
use crate::navigation::ClickTarget;
use crate::raster::ChartImage;
use spending_widget_core::Color;
use std::sync::Arc;

/// Addressable regions of the widget layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Whole widget
    Root,
    /// Month label
    Month,
    /// Chart, rows and legend
    ContentContainer,
    /// Shown instead of the content when there is nothing to chart
    EmptyState,
    /// Donut chart image
    PieChart,
    /// Row container of category `n`
    CategoryRow(usize),
    /// Category name text
    CategoryName(usize),
    /// Category percent text
    CategoryPercent(usize),
    /// Category icon image
    CategoryIcon(usize),
    /// Category color bar
    CategoryColorBar(usize),
    /// Quick-action strip
    QuickActionsContainer,
    /// Quick-action summary hint
    QuickActionHint,
    /// Slot container of quick action `n`
    QuickActionSlot(usize),
    /// Slot icon image
    QuickActionIcon(usize),
    /// Slot label text
    QuickActionLabel(usize),
}

/// Fields of one category row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRowFields {
    /// Row container
    pub row: FieldId,
    /// Name text
    pub name: FieldId,
    /// Percent text
    pub percent: FieldId,
    /// Icon image
    pub icon: FieldId,
    /// Color bar
    pub color_bar: FieldId,
}

impl CategoryRowFields {
    const fn at(rank: usize) -> Self {
        Self {
            row: FieldId::CategoryRow(rank),
            name: FieldId::CategoryName(rank),
            percent: FieldId::CategoryPercent(rank),
            icon: FieldId::CategoryIcon(rank),
            color_bar: FieldId::CategoryColorBar(rank),
        }
    }
}

/// Fields of one quick-action slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickActionSlotFields {
    /// Slot container
    pub container: FieldId,
    /// Icon image
    pub icon: FieldId,
    /// Label text
    pub label: FieldId,
}

impl QuickActionSlotFields {
    const fn at(slot: usize) -> Self {
        Self {
            container: FieldId::QuickActionSlot(slot),
            icon: FieldId::QuickActionIcon(slot),
            label: FieldId::QuickActionLabel(slot),
        }
    }
}

/// Category rows, by rank.
pub const CATEGORY_ROWS: [CategoryRowFields; 3] = [
    CategoryRowFields::at(0),
    CategoryRowFields::at(1),
    CategoryRowFields::at(2),
];

/// Quick-action slots, by slot index.
pub const QUICK_ACTION_SLOTS: [QuickActionSlotFields; 5] = [
    QuickActionSlotFields::at(0),
    QuickActionSlotFields::at(1),
    QuickActionSlotFields::at(2),
    QuickActionSlotFields::at(3),
    QuickActionSlotFields::at(4),
];

/// View visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Shown
    Visible,
    /// Hidden and takes no space
    Gone,
}

/// Built-in image resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef {
    /// Generic category icon
    DefaultCategoryIcon,
}

/// Image bound to an image field.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Rendered chart
    Chart(Arc<ChartImage>),
    /// Decoded icon
    Icon(Arc<DecodedIcon>),
    /// Built-in resource
    Resource(ResourceRef),
}

/// One view update.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Set a text field
    SetText {
        /// Target
        field: FieldId,
        /// New text
        text: String,
    },
    /// Show or hide a view
    SetVisibility {
        /// Target
        field: FieldId,
        /// New visibility
        visibility: Visibility,
    },
    /// Set an image
    SetImage {
        /// Target
        field: FieldId,
        /// New image
        image: ImageSource,
    },
    /// Set a text color
    SetTextColor {
        /// Target
        field: FieldId,
        /// New color
        color: Color,
    },
    /// Set a background color
    SetBackgroundColor {
        /// Target
        field: FieldId,
        /// New color
        color: Color,
    },
    /// Attach a click target
    SetClickTarget {
        /// Target
        field: FieldId,
        /// What a click does
        target: ClickTarget,
    },
}

impl ViewCommand {
    /// Field this command updates.
    #[must_use]
    pub const fn field(&self) -> FieldId {
        match self {
            Self::SetText { field, .. }
            | Self::SetVisibility { field, .. }
            | Self::SetImage { field, .. }
            | Self::SetTextColor { field, .. }
            | Self::SetBackgroundColor { field, .. }
            | Self::SetClickTarget { field, .. } => *field,
        }
    }
}

/// Which branch a composition took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Presence marker absent
    NoData,
    /// Present, but no usable categories
    HasDataEmptyCategories,
    /// Present with at least one category
    HasDataWithCategories,
}

/// The complete set of view updates for one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSet {
    /// Widget instance
    pub widget_id: i32,
    /// Branch taken
    pub state: WidgetState,
    /// Updates, in application order
    pub commands: Vec<ViewCommand>,
}

impl CommandSet {
    /// Empty set for `widget_id`.
    #[must_use]
    pub const fn new(widget_id: i32, state: WidgetState) -> Self {
        Self {
            widget_id,
            state,
            commands: Vec::new(),
        }
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn push(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }

    pub(crate) fn set_text(&mut self, field: FieldId, text: impl Into<String>) {
        self.push(ViewCommand::SetText {
            field,
            text: text.into(),
        });
    }

    pub(crate) fn set_visibility(&mut self, field: FieldId, visibility: Visibility) {
        self.push(ViewCommand::SetVisibility { field, visibility });
    }

    pub(crate) fn set_image(&mut self, field: FieldId, image: ImageSource) {
        self.push(ViewCommand::SetImage { field, image });
    }

    pub(crate) fn set_click(&mut self, field: FieldId, target: ClickTarget) {
        self.push(ViewCommand::SetClickTarget { field, target });
    }

    fn last<'a, T>(&'a self, pick: impl Fn(&'a ViewCommand) -> Option<T>) -> Option<T> {
        self.commands.iter().rev().find_map(pick)
    }

    /// Final text of `field`.
    #[must_use]
    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.last(|c| match c {
            ViewCommand::SetText { field: f, text } if *f == field => Some(text.as_str()),
            _ => None,
        })
    }

    /// Final visibility of `field`.
    #[must_use]
    pub fn visibility(&self, field: FieldId) -> Option<Visibility> {
        self.last(|c| match c {
            ViewCommand::SetVisibility {
                field: f,
                visibility,
            } if *f == field => Some(*visibility),
            _ => None,
        })
    }

    /// Final image of `field`.
    #[must_use]
    pub fn image(&self, field: FieldId) -> Option<&ImageSource> {
        self.last(|c| match c {
            ViewCommand::SetImage { field: f, image } if *f == field => Some(image),
            _ => None,
        })
    }

    /// Final text color of `field`.
    #[must_use]
    pub fn text_color(&self, field: FieldId) -> Option<Color> {
        self.last(|c| match c {
            ViewCommand::SetTextColor { field: f, color } if *f == field => Some(*color),
            _ => None,
        })
    }

    /// Final background color of `field`.
    #[must_use]
    pub fn background_color(&self, field: FieldId) -> Option<Color> {
        self.last(|c| match c {
            ViewCommand::SetBackgroundColor { field: f, color } if *f == field => Some(*color),
            _ => None,
        })
    }

    /// Final click target of `field`.
    #[must_use]
    pub fn click_target(&self, field: FieldId) -> Option<&ClickTarget> {
        self.last(|c| match c {
            ViewCommand::SetClickTarget { field: f, target } if *f == field => Some(target),
            _ => None,
        })
    }

    /// The bound chart image, if any.
    #[must_use]
    pub fn chart(&self) -> Option<&ChartImage> {
        match self.image(FieldId::PieChart)? {
            ImageSource::Chart(image) => Some(image.as_ref()),
            _ => None,
        }
    }
}

/// Receives finished command sets.
pub trait ViewSink {
    /// Apply one widget's command set.
    fn apply(&mut self, commands: CommandSet);
}

impl ViewSink for Vec<CommandSet> {
    fn apply(&mut self, commands: CommandSet) {
        self.push(commands);
    }
}
