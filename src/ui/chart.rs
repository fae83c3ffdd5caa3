use gtk4::prelude::*;
use gtk4 as gtk;
use gtk::cairo;
use std::f64::consts::PI;

use crate::bank::models::{ChartKind, ChartSpec, DataPoint};

const ACCENT: (f64, f64, f64) = (0.498, 0.239, 1.0);
const PALETTE: [(f64, f64, f64); 5] = [
    (0.498, 0.239, 1.0),
    (0.133, 0.773, 0.369),
    (0.961, 0.620, 0.043),
    (0.937, 0.267, 0.267),
    (0.231, 0.510, 0.965),
];
const PAD_LEFT: f64 = 44.0;
const PAD: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Plot {
    fn inset(width: f64, height: f64) -> Self {
        Self {
            x: PAD_LEFT,
            y: PAD,
            w: (width - PAD_LEFT - PAD).max(1.0),
            h: (height - PAD - PAD_BOTTOM).max(1.0),
        }
    }
}

fn max_amount(points: &[DataPoint]) -> f64 {
    points.iter().map(|p| p.amount).fold(0.0, f64::max)
}

/// Evenly spaced points along x, scaled so the largest amount touches the top.
fn line_points(points: &[DataPoint], plot: Plot) -> Vec<(f64, f64)> {
    let max = max_amount(points);
    let step = if points.len() > 1 { plot.w / (points.len() - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let ratio = if max > 0.0 { p.amount / max } else { 0.0 };
            (plot.x + step * i as f64, plot.y + plot.h * (1.0 - ratio))
        })
        .collect()
}

/// (x, y, width, height) per bar; bars fill 60% of their slot.
fn bar_rects(points: &[DataPoint], plot: Plot) -> Vec<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = max_amount(points);
    let slot = plot.w / points.len() as f64;
    let width = slot * 0.6;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let height = if max > 0.0 { plot.h * p.amount / max } else { 0.0 };
            let x = plot.x + slot * i as f64 + (slot - width) / 2.0;
            (x, plot.y + plot.h - height, width, height)
        })
        .collect()
}

/// Start and end angle for each slice, starting at twelve o'clock.
fn pie_angles(points: &[DataPoint]) -> Vec<(f64, f64)> {
    let total: f64 = points.iter().map(|p| p.amount.max(0.0)).sum();
    let mut start = -PI / 2.0;
    points
        .iter()
        .map(|p| {
            let sweep = if total > 0.0 { 2.0 * PI * p.amount.max(0.0) / total } else { 0.0 };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn axes(cr: &cairo::Context, points: &[DataPoint], plot: Plot, centered: bool) -> Result<(), cairo::Error> {
    let max = max_amount(points);
    cr.set_font_size(11.0);
    cr.set_line_width(1.0);
    for step in 0..=4 {
        let y = plot.y + plot.h * f64::from(step) / 4.0;
        cr.set_source_rgba(0.5, 0.5, 0.5, 0.25);
        cr.set_dash(&[3.0, 3.0], 0.0);
        cr.move_to(plot.x, y);
        cr.line_to(plot.x + plot.w, y);
        cr.stroke()?;
        cr.set_dash(&[], 0.0);
        cr.set_source_rgba(0.6, 0.6, 0.6, 1.0);
        cr.move_to(4.0, y + 4.0);
        cr.show_text(&format!("{:.0}", max * (1.0 - f64::from(step) / 4.0)))?;
    }
    let slot = if centered || points.len() < 2 {
        plot.w / points.len().max(1) as f64
    } else {
        plot.w / (points.len() - 1) as f64
    };
    for (i, p) in points.iter().enumerate() {
        let ext = cr.text_extents(&p.category)?;
        let mut x = plot.x + slot * i as f64 - ext.width() / 2.0;
        if centered {
            x += slot / 2.0;
        }
        cr.move_to(x, plot.y + plot.h + 18.0);
        cr.show_text(&p.category)?;
    }
    Ok(())
}

fn draw_area(cr: &cairo::Context, points: &[DataPoint], plot: Plot) -> Result<(), cairo::Error> {
    axes(cr, points, plot, false)?;
    let pts = line_points(points, plot);
    let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
        return Ok(());
    };
    let (r, g, b) = ACCENT;

    cr.move_to(first.0, plot.y + plot.h);
    for (x, y) in &pts {
        cr.line_to(*x, *y);
    }
    cr.line_to(last.0, plot.y + plot.h);
    cr.close_path();
    let fill = cairo::LinearGradient::new(0.0, plot.y, 0.0, plot.y + plot.h);
    fill.add_color_stop_rgba(0.05, r, g, b, 0.3);
    fill.add_color_stop_rgba(0.95, r, g, b, 0.0);
    cr.set_source(&fill)?;
    cr.fill()?;

    cr.set_source_rgb(r, g, b);
    cr.set_line_width(2.0);
    cr.move_to(first.0, first.1);
    for (x, y) in pts.iter().skip(1) {
        cr.line_to(*x, *y);
    }
    cr.stroke()
}

fn draw_bars(cr: &cairo::Context, points: &[DataPoint], plot: Plot) -> Result<(), cairo::Error> {
    axes(cr, points, plot, true)?;
    let (r, g, b) = ACCENT;
    cr.set_source_rgb(r, g, b);
    for (x, y, w, h) in bar_rects(points, plot) {
        cr.rectangle(x, y, w, h);
    }
    cr.fill()
}

fn draw_pie(cr: &cairo::Context, points: &[DataPoint], width: f64, height: f64) -> Result<(), cairo::Error> {
    let legend_w = 130.0;
    let radius = ((width - legend_w).min(height) / 2.0 - PAD).max(4.0);
    let (cx, cy) = (PAD + radius, height / 2.0);
    cr.set_font_size(12.0);
    for (i, ((start, end), p)) in pie_angles(points).into_iter().zip(points).enumerate() {
        let (r, g, b) = PALETTE[i % PALETTE.len()];
        cr.set_source_rgb(r, g, b);
        cr.move_to(cx, cy);
        cr.arc(cx, cy, radius, start, end);
        cr.close_path();
        cr.fill()?;

        let ly = PAD + 20.0 * i as f64;
        let lx = cx + radius + 24.0;
        cr.rectangle(lx, ly, 10.0, 10.0);
        cr.fill()?;
        cr.set_source_rgba(0.7, 0.7, 0.7, 1.0);
        cr.move_to(lx + 16.0, ly + 10.0);
        cr.show_text(&format!("{} ${:.0}", p.category, p.amount))?;
    }
    Ok(())
}

/// A titled card holding a chart of the given literal series.
pub fn chart_card(spec: &ChartSpec) -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.add_css_class("card-surface");
    root.set_hexpand(true);

    let title = gtk::Label::new(Some(&spec.title));
    title.add_css_class("title-4");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let area = gtk::DrawingArea::new();
    area.set_content_height(if spec.kind == ChartKind::Pie { 220 } else { 280 });
    area.set_hexpand(true);
    let kind = spec.kind;
    let points = spec.points.clone();
    area.set_draw_func(move |_, cr, w, h| {
        let (w, h) = (f64::from(w), f64::from(h));
        let res = match kind {
            ChartKind::Area => draw_area(cr, &points, Plot::inset(w, h)),
            ChartKind::Bar => draw_bars(cr, &points, Plot::inset(w, h)),
            ChartKind::Pie => draw_pie(cr, &points, w, h),
        };
        if let Err(e) = res {
            log::warn!("chart draw failed: {e}");
        }
    });
    root.append(&area);

    root.upcast()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint { category: format!("c{i}"), amount: *v })
            .collect()
    }

    const PLOT: Plot = Plot { x: 0.0, y: 0.0, w: 300.0, h: 100.0 };

    #[test]
    fn peak_touches_top_and_zero_sits_on_baseline() {
        let line = line_points(&pts(&[0.0, 150.0, 300.0, 75.0]), PLOT);
        assert_eq!(line[0], (0.0, 100.0));
        assert_eq!(line[1], (100.0, 50.0));
        assert_eq!(line[2], (200.0, 0.0));
        assert_eq!(line[3], (300.0, 75.0));
    }

    #[test]
    fn all_zero_series_stays_flat() {
        assert!(line_points(&pts(&[0.0, 0.0]), PLOT).iter().all(|(_, y)| *y == 100.0));
        assert!(bar_rects(&pts(&[0.0]), PLOT).iter().all(|r| r.3 == 0.0));
    }

    #[test]
    fn bars_keep_input_order_and_scale() {
        let bars = bar_rects(&pts(&[50.0, 100.0]), PLOT);
        assert_eq!(bars.len(), 2);
        assert!(bars[0].0 < bars[1].0);
        assert_eq!(bars[1].3, 100.0);
        assert_eq!(bars[0].3, 50.0);
        assert!((bars[0].2 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn pie_covers_full_circle() {
        let angles = pie_angles(&pts(&[1.0, 1.0, 2.0]));
        assert_eq!(angles[0].0, -PI / 2.0);
        assert!((angles[2].1 - 3.0 * PI / 2.0).abs() < 1e-9);
        assert!((angles[2].1 - angles[2].0 - PI).abs() < 1e-9);
        for pair in angles.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
