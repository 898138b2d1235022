// File: crates/demo/src/main.rs
// Summary: Demo loads the state CSV and renders every one-click-away dimension pair to PNGs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use scatter_core::{render, ChartState, Dataset, Layout, RenderOptions, XDimension, YDimension};
use scatter_core::transition::TRANSITION_DURATION;

fn main() -> Result<()> {
    // Args: [csv_path] [x_dim] [y_dim]; path falls back to the sample dataset.
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "assets/data/data.csv".to_string()));
    let x_arg = args.next().map(|s| s.parse::<XDimension>()).transpose()?;
    let y_arg = args.next().map(|s| s.parse::<YDimension>()).transpose()?;
    println!("Using input file: {}", path.display());

    let dataset = Dataset::load_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", dataset.len());

    let layout = Layout::default();
    let baseline = ChartState::new(&dataset, layout).context("building chart state")?;
    let opts = RenderOptions::default();

    // A requested pair renders alone; otherwise render the default selection
    // plus every selection reachable by one caption click.
    if x_arg.is_some() || y_arg.is_some() {
        let mut state = baseline;
        if let Some(dim) = x_arg {
            state = state.select_x(&dataset, dim)?;
        }
        if let Some(dim) = y_arg {
            state = state.select_y(&dataset, dim)?;
        }
        return write_chart(&state, &dataset, &opts, TRANSITION_DURATION);
    }

    write_chart(&baseline, &dataset, &opts, Duration::ZERO)?;
    for dim in XDimension::ALL {
        let state = baseline.clone().select_x(&dataset, dim)?;
        write_chart(&state, &dataset, &opts, TRANSITION_DURATION)?;
    }
    for dim in YDimension::ALL {
        let state = baseline.clone().select_y(&dataset, dim)?;
        write_chart(&state, &dataset, &opts, TRANSITION_DURATION)?;
    }

    Ok(())
}

fn write_chart(
    state: &ChartState,
    dataset: &Dataset,
    opts: &RenderOptions,
    elapsed: Duration,
) -> Result<()> {
    let scene = state.scene_at(dataset, elapsed);
    let out = out_name(state.x_dim, state.y_dim);
    render::render_to_png(&scene, opts, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Output file like target/out/scatter_poverty_obesity.png
fn out_name(x: XDimension, y: YDimension) -> PathBuf {
    let out = Path::new("target/out");
    std::fs::create_dir_all(out).ok();
    out.join(format!("scatter_{x}_{y}.png"))
}
