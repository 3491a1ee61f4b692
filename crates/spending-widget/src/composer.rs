//! Composition of a full widget command set from one snapshot.

use crate::icon::{decode_optional, IconDecoder, NoopIconDecoder};
use crate::model::{CategoryRecord, Snapshot};
use crate::navigation::ClickTarget;
use crate::palette::ColorAssigner;
use crate::pie::PieChartRenderer;
use crate::quick_actions::QuickActionLayout;
use crate::snapshot::SnapshotStore;
use crate::view::{
    CategoryRowFields, CommandSet, FieldId, ImageSource, ResourceRef, ViewCommand, ViewSink,
    Visibility, WidgetState, CATEGORY_ROWS,
};
use spending_widget_config::WidgetConfig;
use spending_widget_core::Color;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds widget command sets.
///
/// Holds configuration only, so one composer can serve any number of
/// widget instances from any thread.
pub struct WidgetComposer {
    config: WidgetConfig,
    renderer: PieChartRenderer,
    colors: ColorAssigner,
    decoder: Box<dyn IconDecoder>,
}

impl fmt::Debug for WidgetComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetComposer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for WidgetComposer {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl WidgetComposer {
    /// Create a composer that uses the default icon for every icon.
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            renderer: PieChartRenderer::new(config.chart.clone()),
            config,
            colors: ColorAssigner::new(),
            decoder: Box::new(NoopIconDecoder),
        }
    }

    /// Use `decoder` for category and quick-action icons.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl IconDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Read and parse the current snapshot.
    #[must_use]
    pub fn read_snapshot(&self, store: &dyn SnapshotStore) -> Snapshot {
        Snapshot::read(store, &self.config.snapshot)
    }

    /// Refresh every widget in `widget_ids` from one snapshot read.
    pub fn refresh(
        &self,
        store: &dyn SnapshotStore,
        widget_ids: &[i32],
        density: f32,
        sink: &mut dyn ViewSink,
    ) {
        debug!(widget_count = widget_ids.len(), density, "refreshing widgets");
        let snapshot = self.read_snapshot(store);
        for &widget_id in widget_ids {
            let set = self.compose(widget_id, &snapshot, density);
            info!(
                widget_id,
                state = ?set.state,
                commands = set.len(),
                "emitting widget command set"
            );
            sink.apply(set);
        }
    }

    /// Build the complete command set for one widget.
    #[must_use]
    pub fn compose(&self, widget_id: i32, snapshot: &Snapshot, density: f32) -> CommandSet {
        debug!(widget_id, has_data = snapshot.has_data, "composing widget");
        let state = match (snapshot.has_data, snapshot.categories.is_empty()) {
            (false, _) => WidgetState::NoData,
            (true, true) => WidgetState::HasDataEmptyCategories,
            (true, false) => WidgetState::HasDataWithCategories,
        };
        let mut set = CommandSet::new(widget_id, state);

        QuickActionLayout::resolve(
            widget_id,
            &snapshot.quick_actions,
            &self.config.quick_actions,
            self.decoder.as_ref(),
        )
        .bind(&mut set, &self.config.quick_actions);

        if snapshot.has_data {
            set.set_text(FieldId::Month, &snapshot.month_label);
        }

        for fields in &CATEGORY_ROWS {
            set.set_visibility(fields.row, Visibility::Gone);
        }

        let show_content = state == WidgetState::HasDataWithCategories;
        if show_content {
            self.bind_categories(&mut set, &snapshot.categories, density);
        }

        let (content, empty) = if show_content {
            (Visibility::Visible, Visibility::Gone)
        } else {
            (Visibility::Gone, Visibility::Visible)
        };
        set.set_visibility(FieldId::ContentContainer, content);
        set.set_visibility(FieldId::EmptyState, empty);

        set.set_click(
            FieldId::Root,
            ClickTarget::open_tab(widget_id, self.config.navigation.statistics_tab),
        );
        set
    }

    fn bind_categories(&self, set: &mut CommandSet, categories: &[CategoryRecord], density: f32) {
        let used = &categories[..categories.len().min(CATEGORY_ROWS.len())];
        let colors: Vec<Color> = used.iter().map(|c| self.colors.assign(c)).collect();

        for ((fields, category), color) in CATEGORY_ROWS.iter().zip(used).zip(&colors) {
            self.bind_row(set, fields, category, *color);
        }

        let size_px = self.config.chart.pixel_size(density);
        match self.renderer.render(used, &colors, size_px) {
            Ok(chart) => set.set_image(FieldId::PieChart, ImageSource::Chart(Arc::new(chart.image))),
            Err(error) => warn!(
                widget_id = set.widget_id,
                size_px,
                %error,
                "chart rendering failed, binding widget without chart"
            ),
        }
    }

    fn bind_row(
        &self,
        set: &mut CommandSet,
        fields: &CategoryRowFields,
        category: &CategoryRecord,
        color: Color,
    ) {
        set.set_visibility(fields.row, Visibility::Visible);
        set.set_text(fields.name, &category.name);
        set.set_text(fields.percent, format!("{}%", category.percent));
        let icon = decode_optional(self.decoder.as_ref(), category.icon_image.as_deref())
            .map_or(
                ImageSource::Resource(ResourceRef::DefaultCategoryIcon),
                ImageSource::Icon,
            );
        set.set_image(fields.icon, icon);
        set.push(ViewCommand::SetBackgroundColor {
            field: fields.color_bar,
            color: color.scale_alpha(self.config.rows.color_bar_alpha),
        });
    }
}
