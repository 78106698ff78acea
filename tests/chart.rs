mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::RecordingSurface;
use dynplot::chart::{bind_store, ChartBinding, ChartSpec, ChartStyle};
use dynplot::data::{DataStore, Point, Series, Value};

#[test]
fn spec_labels_points_by_position() {
    let series: Series = vec![Point::new(10.0, 1.0), Point::new(20.0, 2.0), Point::new(30.0, 3.0)].into();
    let spec = ChartSpec::from_series(&series, &ChartStyle::default());
    assert_eq!(spec.labels, vec!["Point 1", "Point 2", "Point 3"]);
    assert_eq!(spec.values, vec![Some(1.0), Some(2.0), Some(3.0)]);
    assert_eq!(spec.label_at(1.0), Some("Point 2"));
    assert_eq!(spec.label_at(1.5), None);
    assert_eq!(spec.label_at(3.0), None);
}

#[test]
fn gaps_split_the_line() {
    let series = Series::from_columns(
        vec![Value::Number(0.0); 5],
        vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(f64::NAN),
            Value::Missing,
            Value::Number(5.0),
        ],
    )
    .unwrap();
    let spec = ChartSpec::from_series(&series, &ChartStyle::default());
    assert_eq!(
        spec.segments(),
        vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[4.0, 5.0]]]
    );
    assert_eq!(spec.markers(), vec![[0.0, 1.0], [1.0, 2.0], [4.0, 5.0]]);
}

#[test]
fn default_style_matches_line_plot_look() {
    let style = ChartStyle::default();
    assert_eq!(style.label, "Line Plot");
    assert_eq!(style.color, [75, 192, 192, 255]);
    assert_eq!(style.line_width, 2.0);
    assert_eq!(style.point_radius, 5.0);
    assert_eq!(style.max_ticks, 5);
    assert!(!style.show_legend);
}

#[test]
fn binding_never_holds_two_live_instances() {
    let (surface, log) = RecordingSurface::new();
    let binding = Rc::new(RefCell::new(ChartBinding::new(surface, ChartStyle::default())));
    let mut store = DataStore::new();
    bind_store(&mut store, binding.clone());

    for i in 0..10 {
        store.append_point(i as f64, (i * i) as f64);
    }
    store.replace_all(Series::new());

    assert_eq!(binding.borrow().redraw_count(), 12);
    assert_eq!(binding.borrow().current().map(|h| h.id()), Some(12));
    let log = log.borrow();
    assert_eq!(log.creates(), 12);
    assert_eq!(log.max_live, 1);
    assert_eq!(log.live.len(), 1);
}
