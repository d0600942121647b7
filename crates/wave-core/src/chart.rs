// File: crates/wave-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::series::Series;
use crate::signal::linspace;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;

/// Grid columns/rows also drive tick label placement.
const X_TICKS: usize = 11;
const Y_TICKS: usize = 5;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data with a fractional y margin.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let view = ViewState::from_chart_margin(self, margin_frac);
        view.apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to PNG-encoded bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 pixel buffer for windowed blitting.
    /// Returns (pixels, width, height, stride) with stride == width * 4.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let w = opts.width.max(1) as u32;
        let h = opts.height.max(1) as u32;
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read pixels from raster surface failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        canvas.clear(opts.theme.background);

        let plot = PlotRect::from_outer(opts.width, opts.height, &opts.insets);

        // Tick positions in world space; the sample generator is the single
        // source of evenly spaced sequences in this crate.
        let x_ticks = linspace(self.x_axis.min, self.x_axis.max, X_TICKS)?;
        let y_ticks = linspace(self.y_axis.min, self.y_axis.max, Y_TICKS)?;

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, &opts.theme);
        draw_axes(canvas, &plot, &opts.theme);

        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, &opts.theme, s);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(
                canvas, &shaper, &plot,
                &self.x_axis, &self.y_axis,
                &x_ticks, &y_ticks,
                &opts.theme,
            );
        }
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn scale_x(plot: &PlotRect, axis: &Axis, x: f64) -> f32 {
    plot.left as f32 + ((x - axis.min) / axis.span()) as f32 * plot.width() as f32
}

fn scale_y(plot: &PlotRect, axis: &Axis, y: f64) -> f32 {
    plot.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * plot.height() as f32
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for &wx in x_ticks {
        let x = scale_x(plot, x_axis, wx);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    // horizontals
    for &wy in y_ticks {
        let y = scale_y(plot, y_axis, wy);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line(
        (plot.left as f32, plot.bottom as f32),
        (plot.right as f32, plot.bottom as f32),
        &axis_paint,
    );
    canvas.draw_line(
        (plot.left as f32, plot.top as f32),
        (plot.left as f32, plot.bottom as f32),
        &axis_paint,
    );
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let tick_size = 12.0;
    let label_size = 14.0;

    for &wx in x_ticks {
        let x = scale_x(plot, x_axis, wx);
        shaper.draw_centered(canvas, &format_tick(wx), x, plot.bottom as f32 + 18.0, tick_size, theme.tick, true);
    }
    for &wy in y_ticks {
        let y = scale_y(plot, y_axis, wy);
        shaper.draw_right(canvas, &format_tick(wy), plot.left as f32 - 8.0, y + 4.0, tick_size, theme.tick, true);
    }

    shaper.draw_right(
        canvas, &x_axis.label,
        plot.right as f32, plot.bottom as f32 + 40.0,
        label_size, theme.axis_label, false,
    );
    shaper.draw_left(
        canvas, &y_axis.label,
        plot.left as f32 - 60.0, plot.top as f32 - 8.0,
        label_size, theme.axis_label, false,
    );
}

/// Compact tick formatting: whole numbers for large magnitudes, two decimals
/// otherwise.
fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    series: &Series,
) {
    let data = &series.points;
    if data.len() < 2 {
        return;
    }

    let mut builder = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    builder.move_to((scale_x(plot, x_axis, x0), scale_y(plot, y_axis, y0)));

    for &(x, y) in data.iter().skip(1) {
        builder.line_to((scale_x(plot, x_axis, x), scale_y(plot, y_axis, y)));
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}
