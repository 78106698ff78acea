use dynplot::config::{DynPlotSettings, ManualEntryPolicy, CANVAS_SIZE};

#[test]
fn defaults() {
    let s = DynPlotSettings::default();
    assert_eq!(CANVAS_SIZE, [500.0, 500.0]);
    assert_eq!(s.manual_entry, ManualEntryPolicy::Lenient);
    assert!(!s.clear_inputs_after_add);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let yaml = "title: My plot\nmanual_entry: strict\nchart:\n  point_radius: 3.0\n";
    let s = DynPlotSettings::from_yaml_str(yaml).unwrap();
    assert_eq!(s.title, "My plot");
    assert_eq!(s.manual_entry, ManualEntryPolicy::Strict);
    assert_eq!(s.chart.point_radius, 3.0);
    assert_eq!(s.chart.line_width, 2.0);
}

#[test]
fn bad_yaml_is_a_config_error() {
    let err = DynPlotSettings::from_yaml_str("manual_entry: sometimes\n").unwrap_err();
    assert!(matches!(err, dynplot::DynPlotError::Config(_)));
}

#[test]
fn canvas_size_key_is_ignored() {
    let s = DynPlotSettings::from_yaml_str("canvas_size: [800.0, 600.0]\n").unwrap();
    assert_eq!(s, DynPlotSettings::default());
}
