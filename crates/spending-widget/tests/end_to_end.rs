//! End-to-end refreshes from a raw snapshot store to command sets.

use spending_widget::{
    keys, CommandSet, FieldId, ImageSource, MemorySnapshotStore, NavigationPayload, ResourceRef,
    ViewCommand, Visibility, WidgetComposer, WidgetConfig, WidgetState, CATEGORY_ROWS,
    QUICK_ACTION_SLOTS,
};
use tracing_subscriber::EnvFilter;

const TWO_CATEGORIES: &str = r#"[
    {"name":"Ăn uống","amount":500000,"percent":"62","category_id":1},
    {"name":"Di chuyển","amount":300000,"percent":"38","category_id":2}
]"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn refresh_one(store: &MemorySnapshotStore) -> CommandSet {
    init_tracing();
    let mut sink: Vec<CommandSet> = Vec::new();
    WidgetComposer::default().refresh(store, &[42], 1.0, &mut sink);
    assert_eq!(sink.len(), 1);
    sink.remove(0)
}

fn chart_bindings(set: &CommandSet) -> usize {
    set.commands
        .iter()
        .filter(|c| matches!(c, ViewCommand::SetImage { field: FieldId::PieChart, .. }))
        .count()
}

#[test]
fn test_two_category_snapshot() {
    let store = MemorySnapshotStore::new()
        .with(keys::LAST_UPDATE, "2026-10-14T08:00:00")
        .with(keys::MONTH_YEAR, "10/2026")
        .with(keys::TOP_CATEGORIES, TWO_CATEGORIES);
    let set = refresh_one(&store);

    assert_eq!(set.state, WidgetState::HasDataWithCategories);
    assert_eq!(set.text(FieldId::Month), Some("10/2026"));
    assert_eq!(set.visibility(FieldId::CategoryRow(0)), Some(Visibility::Visible));
    assert_eq!(set.visibility(FieldId::CategoryRow(1)), Some(Visibility::Visible));
    assert_eq!(set.visibility(FieldId::CategoryRow(2)), Some(Visibility::Gone));
    assert_eq!(set.text(FieldId::CategoryPercent(0)), Some("62%"));

    // color bars carry the named-table colors at 70% alpha
    let bar = |rank| {
        set.background_color(FieldId::CategoryColorBar(rank))
            .map(|c| c.to_argb())
    };
    assert_eq!(bar(0), Some(0xB2FF_8A65));
    assert_eq!(bar(1), Some(0xB24E_CDC4));

    assert_eq!(chart_bindings(&set), 1);
    let chart = set.chart().expect("chart bound");
    assert_eq!((chart.width(), chart.height()), (104, 104));
    assert_eq!(chart.pixel(82, 64).map(|c| c.to_argb()), Some(0xFFFF_8A65));
    assert_eq!(chart.pixel(19, 52).map(|c| c.to_argb()), Some(0xFF4E_CDC4));
}

#[test]
fn test_chart_sweeps_cover_full_circle() {
    let categories = spending_widget::parse_categories(TWO_CATEGORIES);
    let composer = WidgetComposer::default();
    let colors: Vec<_> = categories
        .iter()
        .map(|c| spending_widget::ColorAssigner::new().assign(c))
        .collect();
    let renderer = spending_widget::PieChartRenderer::new(composer.config().chart.clone());
    let chart = renderer.render(&categories, &colors, 104).unwrap();
    assert_eq!(chart.segments.len(), 2);
    assert!((chart.total_sweep() - 360.0).abs() < 1e-9);
    assert_eq!(chart.palette[0].to_argb(), 0xFFFF_8A65);
    assert_eq!(chart.palette[1].to_argb(), 0xFF4E_CDC4);
}

#[test]
fn test_no_data_snapshot() {
    let store = MemorySnapshotStore::new()
        .with(keys::MONTH_YEAR, "10/2026")
        .with(keys::TOP_CATEGORIES, TWO_CATEGORIES);
    let set = refresh_one(&store);

    assert_eq!(set.state, WidgetState::NoData);
    assert!(set.chart().is_none());
    assert!(set.text(FieldId::Month).is_none());
    assert_eq!(set.visibility(FieldId::EmptyState), Some(Visibility::Visible));
    for fields in &CATEGORY_ROWS {
        assert_eq!(set.visibility(fields.row), Some(Visibility::Gone));
    }
    for fields in &QUICK_ACTION_SLOTS {
        assert_eq!(set.text(fields.label), Some("Thêm"));
        assert_eq!(
            set.image(fields.icon),
            Some(&ImageSource::Resource(ResourceRef::DefaultCategoryIcon))
        );
        assert_eq!(
            set.click_target(fields.container).map(|t| &t.payload),
            Some(&NavigationPayload::OpenQuickActionConfig)
        );
    }
    assert_eq!(set.text(FieldId::QuickActionHint), Some("Chạm để thêm tác vụ"));
    assert_eq!(
        set.click_target(FieldId::Root).map(|t| &t.payload),
        Some(&NavigationPayload::OpenTab { tab: 3 })
    );
}

#[test]
fn test_malformed_categories_fall_back_to_empty_state() {
    let store = MemorySnapshotStore::new()
        .with(keys::LAST_UPDATE, "2026-10-14T08:00:00")
        .with(keys::TOP_CATEGORIES, r#"[{"name":"Ăn uống","amount":500000"#);
    let set = refresh_one(&store);

    assert_eq!(set.state, WidgetState::HasDataEmptyCategories);
    assert_eq!(set.text(FieldId::Month), Some("--/----"));
    assert!(set.chart().is_none());
    assert_eq!(set.visibility(FieldId::ContentContainer), Some(Visibility::Gone));
}

#[test]
fn test_sparse_quick_action_slots() {
    let store = MemorySnapshotStore::new().with(
        keys::WIDGET_QUICK_ACTIONS,
        r#"[
            {"slot":3,"label":"Cà phê","category_id":5,"amount":35000,"is_quick_add":true},
            {"slot":4,"label":"Xăng","category_id":6}
        ]"#,
    );
    let set = refresh_one(&store);

    // both actions claim their own slots, so the leading slots stay empty
    let labels: Vec<_> = QUICK_ACTION_SLOTS
        .iter()
        .map(|f| set.text(f.label).unwrap_or_default().to_string())
        .collect();
    assert_eq!(labels, vec!["Thêm", "Thêm", "Thêm", "CÀ PHÊ", "XĂNG"]);
    assert_eq!(
        set.click_target(FieldId::QuickActionSlot(0)).map(|t| &t.payload),
        Some(&NavigationPayload::OpenQuickActionConfig)
    );

    let slot3 = set.click_target(FieldId::QuickActionSlot(3)).unwrap();
    assert_eq!(slot3.request_code, 42 * 100 + 3);
    match &slot3.payload {
        NavigationPayload::RunQuickAction(launch) => {
            assert_eq!(launch.category_id, 5);
            assert_eq!(launch.amount, 35_000.0);
            assert!(launch.is_quick_add);
            assert!(launch.trigger_haptic);
        }
        other => panic!("unexpected payload {other:?}"),
    }
    assert_eq!(
        set.text_color(FieldId::QuickActionLabel(3)).map(|c| c.to_argb()),
        Some(0xFFFF_D54F)
    );
    assert_eq!(
        set.click_target(FieldId::QuickActionSlot(2)).unwrap().request_code,
        42_000
    );
    assert_eq!(
        set.text(FieldId::QuickActionHint),
        Some("Nhấn giữ widget để chỉnh")
    );
}

#[test]
fn test_configured_composer() {
    let config = WidgetConfig::from_yaml_str(
        "chart:\n  size_dp: 64\nnavigation:\n  statistics_tab: 1\nquick_actions:\n  placeholder_label: Add\n",
    )
    .unwrap();
    let store = MemorySnapshotStore::new()
        .with(keys::LAST_UPDATE, "x")
        .with(keys::TOP_CATEGORIES, TWO_CATEGORIES);
    let mut sink: Vec<CommandSet> = Vec::new();
    WidgetComposer::new(config).refresh(&store, &[1, 2], 2.0, &mut sink);

    assert_eq!(sink.len(), 2);
    for set in &sink {
        assert_eq!(set.chart().map(|c| c.width()), Some(128));
        assert_eq!(set.text(FieldId::QuickActionLabel(0)), Some("Add"));
        assert_eq!(
            set.click_target(FieldId::Root).map(|t| &t.payload),
            Some(&NavigationPayload::OpenTab { tab: 1 })
        );
    }
    assert_eq!(sink[1].click_target(FieldId::Root).unwrap().request_code, 2);
}
