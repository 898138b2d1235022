// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use std::time::Duration;

use scatter_core::dataset::{DataRecord, Dataset};
use scatter_core::{render, ChartState, Layout, RenderOptions};

fn sample() -> Dataset {
    Dataset::from_records(vec![
        DataRecord {
            state: "Alabama".into(),
            abbr: "AL".into(),
            poverty: 18.2,
            age: 38.0,
            income: 43613.0,
            obesity: 33.6,
            smokes: 18.5,
            healthcare: 15.3,
        },
        DataRecord {
            state: "Alaska".into(),
            abbr: "AK".into(),
            poverty: 12.8,
            age: 33.5,
            income: 69017.0,
            obesity: 28.4,
            smokes: 18.6,
            healthcare: 18.6,
        },
        DataRecord {
            state: "Utah".into(),
            abbr: "UT".into(),
            poverty: 11.7,
            age: 30.7,
            income: 60727.0,
            obesity: 24.5,
            smokes: 9.3,
            healthcare: 13.0,
        },
    ])
}

#[test]
fn render_smoke_png() {
    let ds = sample();
    let state = ChartState::new(&ds, Layout::default()).expect("state");
    let scene = state.scene_at(&ds, Duration::ZERO);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render::render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render::render_to_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba_buffer_has_expected_size() {
    let ds = sample();
    let mut state = ChartState::new(&ds, Layout::default()).expect("state");
    state.hovered = Some(0); // exercise the tooltip path
    let scene = state.scene_at(&ds, Duration::ZERO);

    let opts = RenderOptions::default();
    let rgba = render::render_to_rgba8(&scene, &opts).expect("render rgba");
    assert_eq!(rgba.len(), (opts.width * opts.height * 4) as usize);
    // The background is opaque, so every alpha byte is set.
    assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));
}
