use std::{fmt, io, path};

use crate::{Coords, debug, graph::Node, idx::Idx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a, Style> {
    pub context: &'a SvgContext,
    pub style: Style,
    content: String,
}

impl<'a, Style> SvgOutput<'a, Style> {
    pub fn new(context: &'a SvgContext, style: Style) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<Style, State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
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

impl<'a, Style> fmt::Write for SvgOutput<'a, Style> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Hide,
    Standard,
    Highlight,
}

type VertexStyle = Box<dyn Fn(Idx<Node>) -> SvgElementStyle>;
type EdgeStyle = Box<dyn Fn(Idx<Node>, Idx<Node>) -> SvgElementStyle>;

/// How the vertices and edges of the adjacency graph are drawn
pub(crate) struct SvgGraphStyle {
    v_style: Option<VertexStyle>,
    e_style: Option<EdgeStyle>,
    pub add_labels: bool,
}

impl Default for SvgGraphStyle {
    fn default() -> Self {
        Self {
            v_style: None,
            e_style: None,
            add_labels: true,
        }
    }
}

impl SvgGraphStyle {
    /// Highlights the given undirected edges and their endpoints
    pub fn highlight_edges(edges: Vec<(Idx<Node>, Idx<Node>)>) -> Self {
        let vertices: Vec<_> = edges.iter().flat_map(|(a, b)| [*a, *b]).collect();
        Self {
            v_style: Some(Box::new(move |v| Self::highlight_if(vertices.contains(&v)))),
            e_style: Some(Box::new(move |a, b| Self::highlight_if(edges.iter().any(|e| *e == (a, b) || *e == (b, a))))),
            ..Self::default()
        }
    }

    fn highlight_if(highlight: bool) -> SvgElementStyle {
        if highlight {
            SvgElementStyle::Highlight
        } else {
            SvgElementStyle::Standard
        }
    }

    pub fn get_v_style(&self, v: Idx<Node>) -> SvgElementStyle {
        match &self.v_style {
            Some(style) => style(v),
            None => SvgElementStyle::Standard,
        }
    }

    pub fn get_e_style(&self, a: Idx<Node>, b: Idx<Node>) -> SvgElementStyle {
        match &self.e_style {
            Some(style) => style(a, b),
            None => SvgElementStyle::Standard,
        }
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
    /// Reads the output settings from the environment and frames the given points.
    /// [None] if no output was requested.
    pub fn from_env<'c>(points: impl Iterator<Item=&'c Coords>) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for c in points {
            view_x_min = view_x_min.min(c.x() as f32);
            view_x_max = view_x_max.max(c.x() as f32);
            view_y_min = view_y_min.min(c.y() as f32);
            view_y_max = view_y_max.max(c.y() as f32);
        }

        // Keep a degenerate (collinear) point set visible
        let w = (view_x_max - view_x_min).max(f32::EPSILON);
        let h = (view_y_max - view_y_min).max(f32::EPSILON);
        let margin = 0.1 * w.max(h);
        view_x_min -= margin;
        view_x_max += margin;
        view_y_min -= margin;
        view_y_max += margin;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<Style, State=()> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a, Style>, state: &State) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
        comment: None,
    }
}
