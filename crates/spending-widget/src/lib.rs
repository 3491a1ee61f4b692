//! Spending widget: home-screen summary of the month's top spending.
//!
//! One refresh turns the producer's snapshot into a complete, declarative
//! [`CommandSet`] for each widget instance:
//!
//! - [`Snapshot`] parsing from a [`SnapshotStore`]
//! - Stable category colors from [`ColorAssigner`]
//! - A donut chart from [`PieChartRenderer`], rasterized with tiny-skia
//! - The five-slot [`QuickActionLayout`]
//! - [`WidgetComposer`] tying it together
//!
//! ```
//! use spending_widget::{keys, MemorySnapshotStore, WidgetComposer, WidgetState};
//! use spending_widget::CommandSet;
//!
//! let store = MemorySnapshotStore::new()
//!     .with(keys::LAST_UPDATE, "2026-10-14T08:00:00")
//!     .with(keys::TOP_CATEGORIES, r#"[{"name":"Ăn uống","amount":500000,"percent":"100"}]"#);
//!
//! let mut sink: Vec<CommandSet> = Vec::new();
//! WidgetComposer::default().refresh(&store, &[1], 2.0, &mut sink);
//! assert_eq!(sink[0].state, WidgetState::HasDataWithCategories);
//! ```

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

mod composer;
mod error;
mod glyph;
mod icon;
mod model;
mod navigation;
mod palette;
mod pie;
mod pin;
mod quick_actions;
mod raster;
mod snapshot;
mod view;

pub use composer::WidgetComposer;
pub use error::{PinError, RenderError};
pub use icon::{DecodedIcon, IconDecoder, IconError, NoopIconDecoder};
pub use model::{CategoryRecord, EntryType, QuickActionRecord, ShortcutType, Snapshot};
pub use navigation::{ClickTarget, NavigationPayload, QuickActionLaunch};
pub use palette::ColorAssigner;
pub use pie::{sweep_angles, ChartLayout, PieChartRenderer, PieSegment, RenderedChart};
pub use pin::{has_pinned_widget, request_pin, PinHost, PinOutcome, WidgetManager, MIN_PIN_API_LEVEL};
pub use quick_actions::{resolve_slot, HintState, QuickActionLayout, SlotBinding, SLOT_COUNT};
pub use raster::{ChartImage, PixmapCanvas};
pub use snapshot::{
    keys, parse_categories, parse_quick_actions, MemorySnapshotStore, RawSnapshot, SnapshotStore,
};
pub use view::{
    CategoryRowFields, CommandSet, FieldId, ImageSource, QuickActionSlotFields, ResourceRef,
    ViewCommand, ViewSink, Visibility, WidgetState, CATEGORY_ROWS, QUICK_ACTION_SLOTS,
};

pub use spending_widget_config::WidgetConfig;
