use std::{fmt, io, path, sync::atomic::{AtomicUsize, Ordering}};

use crate::{Coordinate, Edge, Polygon, VertexId, debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

static SNAPSHOT_COUNT: AtomicUsize = AtomicUsize::new(0);

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// A context framing `polygon`, or `None` if nothing at `level` should be written
    pub fn for_polygon<C: Coordinate>(polygon: &Polygon<C>, level: SvgOutputLevel) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        if output_level < level || output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for p in polygon.points() {
            let (x, y) = to_f32(p)?;
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        // Leave a margin so vertex markers are not clipped
        let margin = (view_x_max - view_x_min).max(view_y_max - view_y_min) * 0.05;
        Some(Self {
            output_path,
            output_level,
            view_x_min: view_x_min - margin,
            view_x_max: view_x_max + margin,
            view_y_min: view_y_min - margin,
            view_y_max: view_y_max + margin,
            show_labels: debug::env::svg::show_labels(),
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

fn to_f32<C: Coordinate>(p: crate::Point<C>) -> Option<(f32, f32)> {
    Some((p.x.to_f32()?, p.y.to_f32()?))
}

/// `<circle .../>` markup for a filled vertex marker.
///
/// Written by hand since svg_fmt has no constructor for `Circle` and its fields differ between releases.
struct Marker {
    x: f32,
    y: f32,
    radius: f32,
    fill: svg_fmt::Fill,
}

fn marker(x: f32, y: f32, radius: f32, color: svg_fmt::Color) -> Marker {
    Marker {
        x,
        y,
        radius,
        fill: svg_fmt::Fill::Color(color),
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<circle cx="{}" cy="{}" r="{}" style="{};stroke:none" />"#, self.x, self.y, self.radius, self.fill)
    }
}

fn write_polygon<C: Coordinate>(svg_output: &mut SvgOutput<'_>, ring: &Polygon<C>, highlight: Option<VertexId>) -> fmt::Result {
    use svg_fmt::{Align, Fill, Stroke, black, blue, polygon, rgb, text};
    use fmt::Write;

    let points: Vec<[f32; 2]> = ring.points().into_iter().filter_map(to_f32).map(|(x, y)| [x, y]).collect();
    writeln!(svg_output, "{}",
        polygon(&points)
            .fill(Fill::None)
            .stroke(Stroke::Color(black(), svg_output.context.percent(0.3)))
    )?;

    for v in ring.iter() {
        let (x, y) = match to_f32(v.point) {
            Some(p) => p,
            None => continue,
        };
        let color = if Some(v.id) == highlight { rgb(255, 126, 0) } else { blue() };
        writeln!(svg_output, "{}",
            marker(x, y, svg_output.context.percent(0.6), color)
        )?;
        if svg_output.context.show_labels {
            let gap = svg_output.context.percent(1.0);
            writeln!(svg_output, "{}",
                text(x - gap, y, v.id.to_string())
                    .color(black())
                    .align(Align::Right)
                    .size(svg_output.context.percent(2.0))
            )?;
        }
    }
    Ok(())
}

fn write_diagonals<C: Coordinate>(svg_output: &mut SvgOutput<'_>, ring: &Polygon<C>, diagonals: &[Edge<VertexId>]) -> fmt::Result {
    use svg_fmt::{line_segment, red};
    use fmt::Write;

    for d in diagonals {
        if let (Some((x0, y0)), Some((x1, y1))) = (to_f32(ring.point(d.a)), to_f32(ring.point(d.b))) {
            writeln!(svg_output, "{}",
                line_segment(x0, y0, x1, y1)
                    .color(red())
                    .width(svg_output.context.percent(0.25))
            )?;
        }
    }
    Ok(())
}

fn save(svg: SvgOutput<'_>, name: &str) {
    let index = SNAPSHOT_COUNT.fetch_add(1, Ordering::Relaxed);
    if let Err(e) = svg.save(format!("{:05}_{}.svg", index, name)) {
        log::warn!("Failed to write SVG snapshot: {}", e);
    }
}

/// Draws the ring with the monotone diagonals found so far
pub(crate) fn snapshot_partition<C: Coordinate>(polygon: &Polygon<C>, diagonals: &[Edge<VertexId>], highlight: Option<VertexId>, level: SvgOutputLevel) {
    if let Some(context) = SvgContext::for_polygon(polygon, level) {
        let mut svg = SvgOutput::new(&context);
        if write_polygon(&mut svg, polygon, highlight).and_then(|()| write_diagonals(&mut svg, polygon, diagonals)).is_ok() {
            save(svg, "partition");
        }
    }
}

/// Draws the ring as it currently stands, e.g. part way through ear clipping
pub(crate) fn snapshot_ring<C: Coordinate>(polygon: &Polygon<C>, highlight: VertexId, level: SvgOutputLevel) {
    if let Some(context) = SvgContext::for_polygon(polygon, level) {
        let mut svg = SvgOutput::new(&context);
        if write_polygon(&mut svg, polygon, Some(highlight)).is_ok() {
            save(svg, "ear_clip");
        }
    }
}
