// File: crates/window-demo/src/main.rs
// Summary: Interactive windowed demo: hover tooltips, caption clicks with animated
// axis swaps, and full chart rebuild on resize. CPU blit via winit + softbuffer.

use std::num::NonZeroU32;
use std::time::Instant;

use scatter_core::{render, ChartState, Dataset, Layout, RenderOptions};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const DATA_PATH: &str = "assets/data/data.csv";

fn main() {
    // Load data once. A failure leaves the chart unrendered; the window still
    // opens and shows only the background.
    let dataset = match Dataset::load_csv(DATA_PATH) {
        Ok(ds) => {
            println!("Loaded {} records from {DATA_PATH}", ds.len());
            Some(ds)
        }
        Err(e) => {
            eprintln!("dataset load failed: {e}");
            None
        }
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("State Scatter — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(900.0, 600.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let build_state = |ds: Option<&Dataset>, w: u32, h: u32| -> Option<ChartState> {
        let ds = ds?;
        match ChartState::new(ds, Layout::new(w.max(1) as i32, h.max(1) as i32)) {
            Ok(st) => Some(st),
            Err(e) => {
                eprintln!("chart state failed: {e}");
                None
            }
        }
    };

    let mut state = build_state(dataset.as_ref(), size.width, size.height);
    let mut transition_start: Option<Instant> = None;
    let mut cursor: Option<(f32, f32)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = if transition_start.is_some() { ControlFlow::Poll } else { ControlFlow::Wait };
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    // Full rebuild policy: drop the chart (abandoning any
                    // in-flight transition) and refit around the new canvas.
                    size = new_size;
                    state = build_state(dataset.as_ref(), size.width, size.height);
                    transition_start = None;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (cx, cy) = (position.x as f32, position.y as f32);
                    cursor = Some((cx, cy));
                    if let (Some(st), Some(ds)) = (state.as_mut(), dataset.as_ref()) {
                        let hovered = st.hover_at(ds, cx, cy);
                        if hovered != st.hovered {
                            st.hovered = hovered;
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    if let Some(st) = state.as_mut() {
                        if st.hovered.take().is_some() {
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::MouseInput { state: btn_state, button, .. } => {
                    if button == MouseButton::Left && btn_state == ElementState::Pressed {
                        if let (Some((cx, cy)), Some(ds)) = (cursor, dataset.as_ref()) {
                            let choice = state.as_ref().and_then(|st| st.layout.caption_at(cx, cy));
                            if let Some(choice) = choice {
                                if let Some(st) = state.take() {
                                    println!("axis selection: {choice:?}");
                                    match st.select(ds, choice) {
                                        Ok(next) => {
                                            state = Some(next);
                                            transition_start = Some(Instant::now());
                                            *cf = ControlFlow::Poll;
                                        }
                                        Err(e) => eprintln!("selection failed: {e}"),
                                    }
                                    window.request_redraw();
                                }
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if let Some(start) = transition_start {
                    let done = state
                        .as_ref()
                        .and_then(|st| st.transition.as_ref())
                        .map_or(true, |t| t.is_finished(start.elapsed()));
                    if done {
                        if let Some(st) = state.as_mut() {
                            st.settle();
                        }
                        transition_start = None;
                        *cf = ControlFlow::Wait;
                    }
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("frame unavailable: {e:?}");
                        return;
                    }
                };

                match (state.as_ref(), dataset.as_ref()) {
                    (Some(st), Some(ds)) => {
                        let elapsed = transition_start
                            .map(|t| t.elapsed())
                            .unwrap_or_default();
                        let scene = st.scene_at(ds, elapsed);
                        let mut opts = RenderOptions::default();
                        opts.width = w as i32;
                        opts.height = h as i32;
                        match render::render_to_rgba8(&scene, &opts) {
                            Ok(rgba) => {
                                let max_px = frame.len().min(rgba.len() / 4);
                                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                                    let r = px[0] as u32;
                                    let g = px[1] as u32;
                                    let b = px[2] as u32;
                                    let a = px[3] as u32;
                                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                                }
                            }
                            Err(e) => eprintln!("render error: {e}"),
                        }
                    }
                    _ => {
                        // No dataset: plain background, no chart.
                        let bg = 0xFF121214u32;
                        for px in frame.iter_mut() {
                            *px = bg;
                        }
                    }
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
