// File: crates/window-demo/src/main.rs
// Summary: Windowed viewer; renders the sine plot to a window via RGBA blit (CPU)
// using winit + softbuffer and blocks until the window is closed.

use anyhow::{anyhow, Context, Result};
use log::info;
use std::num::NonZeroU32;
use wave_core::signal::{Wave, X_END, X_START};
use wave_core::{theme, Axis, Chart, RenderOptions, Series, Theme, ViewState};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{
    DeviceEvent, ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta,
    VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let wave = Wave::standard().context("generate sine samples")?;
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", X_START, X_END);
    chart.y_axis = Axis::default_y();
    chart.add_series(Series::from_wave("sin(x)", &wave));

    let home = ViewState::from_chart(&chart);
    let mut view = home;

    let themes = theme::presets();
    let mut theme_idx = 0usize;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("waveplot")
        .with_inner_size(LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("create window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;

    info!("displaying {} samples; close the window to exit", wave.len());

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        dragging = state == ElementState::Pressed;
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, cy)) = cursor {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                            MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                        };
                        let insets = RenderOptions::default().insets;
                        view.zoom_at_pixel(scroll, cx, cy, size.width as i32, size.height as i32, &insets);
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match key {
                    VirtualKeyCode::R => {
                        view = home;
                        window.request_redraw();
                    }
                    VirtualKeyCode::T => {
                        theme_idx = (theme_idx + 1) % themes.len();
                        window.request_redraw();
                    }
                    VirtualKeyCode::Escape => {
                        *control_flow = ControlFlow::Exit;
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                if dragging {
                    let insets = RenderOptions::default().insets;
                    view.pan_by_pixels(delta.0, delta.1, size.width as i32, size.height as i32, &insets);
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) =
                    draw_frame(&mut surface, &mut chart, &view, cursor, size, &themes[theme_idx])
                {
                    log::error!("draw failed: {e:#}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn draw_frame(
    surface: &mut softbuffer::Surface,
    chart: &mut Chart,
    view: &ViewState,
    cursor: Option<(f64, f64)>,
    size: PhysicalSize<u32>,
    theme: &Theme,
) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface
        .resize(nw, nh)
        .map_err(|e| anyhow!("resize surface: {e}"))?;

    let mut opts = RenderOptions::default();
    opts.width = w as i32;
    opts.height = h as i32;
    opts.theme = *theme;

    view.apply_to_chart(chart);
    let (rgba, _, _, _) = chart.render_to_rgba8(&opts)?;

    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow!("acquire frame: {e}"))?;
    let n = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(n).enumerate() {
        let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
        // Softbuffer expects the alpha in the top byte with RGB packed below.
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }

    // Crosshair overlay at the pointer position
    if let Some((cx, cy)) = cursor {
        let iw = w as usize;
        let ih = h as usize;
        if frame.len() >= iw * ih {
            let ix = cx.round().clamp(0.0, w as f64 - 1.0) as usize;
            let iy = cy.round().clamp(0.0, h as f64 - 1.0) as usize;
            let c = theme.crosshair;
            let color =
                (0xFFu32 << 24) | ((c.r() as u32) << 16) | ((c.g() as u32) << 8) | c.b() as u32;
            for x in 0..iw {
                frame[iy * iw + x] = color;
            }
            for y in 0..ih {
                frame[y * iw + ix] = color;
            }
        }
    }

    frame.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}
