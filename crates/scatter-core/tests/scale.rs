// File: crates/scatter-core/tests/scale.rs
// Purpose: Padded domain fitting, y inversion, and scale purity.

use scatter_core::dataset::{DataRecord, Dataset};
use scatter_core::dimension::{XDimension, YDimension};
use scatter_core::scale::{self, LinearScale};
use scatter_core::{ChartState, Layout};

fn record(abbr: &str, poverty: f64, age: f64, income: f64, obesity: f64, smokes: f64, healthcare: f64) -> DataRecord {
    DataRecord {
        state: abbr.to_string(),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
        smokes,
        healthcare,
    }
}

fn sample() -> Dataset {
    Dataset::from_records(vec![
        record("AL", 18.2, 38.0, 43613.0, 33.6, 18.5, 15.3),
        record("AK", 12.8, 33.5, 69017.0, 28.4, 18.6, 18.6),
        record("UT", 11.7, 30.7, 60727.0, 24.5, 9.3, 13.0),
        record("MS", 21.5, 37.0, 40593.0, 35.6, 22.2, 16.1),
    ])
}

#[test]
fn x_domain_brackets_every_value_with_padding() {
    let ds = sample();
    for dim in XDimension::ALL {
        let s = scale::fit_x(&ds, dim, 0.0, 750.0).expect("fit");
        let (d0, d1) = s.domain();
        for r in ds.records() {
            let v = dim.value_of(r);
            assert!(d0 <= v * 0.8 + 1e-9, "{dim}: lower bound {d0} above {v}*0.8");
            assert!(d1 >= v * 1.2 - 1e-9, "{dim}: upper bound {d1} below {v}*1.2");
        }
    }
}

#[test]
fn y_domain_brackets_every_value_with_padding() {
    let ds = sample();
    for dim in YDimension::ALL {
        let s = scale::fit_y(&ds, dim, 40.0, 510.0).expect("fit");
        let (d0, d1) = s.domain();
        for r in ds.records() {
            let v = dim.value_of(r);
            assert!(d0 <= v * 0.8 + 1e-9);
            assert!(d1 >= v * 1.2 - 1e-9);
        }
    }
}

#[test]
fn y_scale_is_inverted() {
    let ds = sample();
    let s = scale::fit_y(&ds, YDimension::Obesity, 40.0, 510.0).expect("fit");
    let (d0, d1) = s.domain();
    // Larger values plot higher, i.e. at smaller pixel offsets.
    assert!(s.to_px(d1) < s.to_px(d0));
    assert!((s.to_px(d0) - 510.0).abs() < 1e-3);
    assert!((s.to_px(d1) - 40.0).abs() < 1e-3);
}

#[test]
fn round_trips_through_pixels() {
    let s = LinearScale::new((10.0, 20.0), (0.0, 750.0));
    for v in [10.0, 12.5, 17.3, 20.0] {
        let back = s.from_px(s.to_px(v));
        assert!((back - v).abs() < 1e-3, "{v} round-tripped to {back}");
    }
}

#[test]
fn degenerate_domain_is_widened() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    let (d0, d1) = s.domain();
    assert!(d1 > d0);
    let px = s.to_px(5.0);
    assert!(px.is_finite());
}

#[test]
fn scale_depends_on_dataset_and_dimension_not_history() {
    // Selecting A -> B -> A must land on the same scale as selecting A from
    // the default state.
    let ds = sample();
    let layout = Layout::default();
    let direct = ChartState::new(&ds, layout).expect("state");
    let expected = direct.x_scale;

    let wandered = ChartState::new(&ds, layout)
        .expect("state")
        .select_x(&ds, XDimension::Income)
        .expect("select income")
        .select_x(&ds, XDimension::Poverty)
        .expect("select poverty");

    assert_eq!(wandered.x_scale, expected);
    assert_eq!(wandered.x_scale.domain(), expected.domain());
}
