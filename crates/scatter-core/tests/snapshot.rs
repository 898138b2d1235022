// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::time::Duration;

use scatter_core::dataset::{DataRecord, Dataset};
use scatter_core::{render, ChartState, Layout, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let ds = Dataset::from_records(vec![
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
    ]);
    let state = ChartState::new(&ds, Layout::default()).expect("state");
    let scene = state.scene_at(&ds, Duration::ZERO);

    let mut opts = RenderOptions::default();
    opts.draw_text = false; // avoid text nondeterminism across platforms
    render::render_to_png_bytes(&scene, &opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_scatter.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
