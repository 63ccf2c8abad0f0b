use crate::{Predicates, Sign, errors::InternalError, graph::{AdjacencyGraph, Node}, idx::Idx};

#[cfg(feature = "debugging")]
use std::fmt;
#[cfg(feature = "debugging")]
use crate::{debug, idx::SliceExt};

/// The extreme vertices of a sub-triangulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hull {
    pub leftmost: Idx<Node>,
    pub rightmost: Idx<Node>,
}

/// Guards a walk that must terminate on valid input
struct StepLimit {
    what: &'static str,
    remaining: usize,
}

impl StepLimit {
    fn new(what: &'static str, limit: usize) -> Self {
        Self { what, remaining: limit }
    }

    fn step(&mut self) -> Result<(), InternalError> {
        match self.remaining.checked_sub(1) {
            Some(remaining) => {
                self.remaining = remaining;
                Ok(())
            }
            None => Err(InternalError::new(format!("{} did not terminate", self.what))),
        }
    }
}

#[cfg(feature = "debugging")]
struct DebugState {
    svg_context: Option<debug::svg::SvgContext>,
    current_step: u32,
    current_substep: u32,
    // Sub-triangulations completed so far, innermost merges last
    merge_trees: Vec<text_trees::TreeNode<String>>,
}

/// Builds the Delaunay graph of points sorted by x then y, by recursively splitting them in half and merging
/// the halves bottom-up between their lower and upper common tangents.
pub(crate) struct DivideAndConquer<K: Predicates> {
    graph: AdjacencyGraph<K>,
    #[cfg(feature = "debugging")]
    debug: DebugState,
}

impl<K: Predicates> DivideAndConquer<K> {
    pub fn new(graph: AdjacencyGraph<K>) -> Self {
        #[cfg(feature = "debugging")]
        let debug = DebugState {
            svg_context: debug::svg::SvgContext::from_env(graph.nodes().iter().map(|n| n.coords())),
            current_step: 0,
            current_substep: 0,
            merge_trees: Vec::new(),
        };

        Self {
            graph,
            #[cfg(feature = "debugging")]
            debug,
        }
    }

    /// Triangulates every vertex of the graph. The graph must have at least 2 vertices and no edges.
    pub fn build(mut self) -> Result<AdjacencyGraph<K>, InternalError> {
        if self.graph.len() < 2 {
            return Err(InternalError::new(format!("Cannot triangulate {} vertices", self.graph.len())));
        }
        self.triangulate_range(0, self.graph.len() - 1)?;

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgGraphStyle::default(), debug::svg::SvgOutputLevel::ResultOnly);

        Ok(self.graph)
    }

    /// Triangulates the sorted positions `first..=last`, which must span at least 2 vertices
    fn triangulate_range(&mut self, first: usize, last: usize) -> Result<Hull, InternalError> {
        let hull = Hull {
            leftmost: Idx::new(first),
            rightmost: Idx::new(last),
        };
        match last - first {
            1 => {
                self.graph.connect(hull.leftmost, hull.rightmost);
            }
            2 => {
                let middle = Idx::new(first + 1);
                self.graph.connect(hull.leftmost, middle);
                self.graph.connect(middle, hull.rightmost);
                // Collinear triples stay a chain
                if self.graph.orientation(hull.leftmost, middle, hull.rightmost) != Sign::Zero {
                    self.graph.connect(hull.leftmost, hull.rightmost);
                }
            }
            0 => return Err(InternalError::new(format!("Cannot triangulate the single vertex {}", hull.leftmost))),
            _ => {
                let mid = first + (last - first) / 2;
                let left = self.triangulate_range(first, mid)?;
                let right = self.triangulate_range(mid + 1, last)?;
                self.merge(left, right, last - first + 1)?;
            }
        }

        #[cfg(feature = "debugging")]
        self.advance_step(first, last);

        Ok(hull)
    }

    /// The lower common tangent of two hulls, walking down from the facing extremes
    fn lower_tangent(&self, left_rightmost: Idx<Node>, right_leftmost: Idx<Node>, limit: usize) -> Result<(Idx<Node>, Idx<Node>), InternalError> {
        let mut x = left_rightmost;
        let mut y = right_leftmost;
        let mut y_next = self.graph.first(y);
        let mut x_next = self.graph.first(x).and_then(|fx| self.graph.pred(x, fx));

        let mut steps = StepLimit::new("Lower tangent search", limit);
        loop {
            steps.step()?;
            match (y_next, x_next) {
                (Some(r), _) if self.graph.right_of(r, x, y) => {
                    y_next = self.graph.succ(r, y);
                    y = r;
                }
                (_, Some(l)) if self.graph.right_of(l, x, y) => {
                    x_next = self.graph.pred(l, x);
                    x = l;
                }
                _ => return Ok((x, y)),
            }
        }
    }

    /// The upper common tangent of two hulls, walking up from the facing extremes
    fn upper_tangent(&self, left_rightmost: Idx<Node>, right_leftmost: Idx<Node>, limit: usize) -> Result<(Idx<Node>, Idx<Node>), InternalError> {
        let mut x = left_rightmost;
        let mut y = right_leftmost;
        let mut x_next = self.graph.first(x);
        let mut y_next = self.graph.first(y).and_then(|fy| self.graph.pred(y, fy));

        let mut steps = StepLimit::new("Upper tangent search", limit);
        loop {
            steps.step()?;
            match (y_next, x_next) {
                (Some(r), _) if self.graph.left_of(r, x, y) => {
                    y_next = self.graph.pred(r, y);
                    y = r;
                }
                (_, Some(l)) if self.graph.left_of(l, x, y) => {
                    x_next = self.graph.succ(l, x);
                    x = l;
                }
                _ => return Ok((x, y)),
            }
        }
    }

    fn pred(&self, v: Idx<Node>, w: Idx<Node>) -> Result<Idx<Node>, InternalError> {
        self.graph.pred(v, w).ok_or_else(|| InternalError::new(format!("{} is not a neighbor of {}", w, v)))
    }

    fn succ(&self, v: Idx<Node>, w: Idx<Node>) -> Result<Idx<Node>, InternalError> {
        self.graph.succ(v, w).ok_or_else(|| InternalError::new(format!("{} is not a neighbor of {}", w, v)))
    }

    /// Stitches two adjacent sub-triangulations together, `left` entirely precedes `right` in sorted order.
    ///
    /// Starting from the lower common tangent, the base edge `li - ri` climbs to the upper common tangent.
    /// At each step the first candidate neighbor on either side that is not invalidated by the next one is
    /// kept, edges to invalidated candidates are cut, and the base advances to whichever side's candidate
    /// forms a triangle with an empty circumcircle.
    fn merge(&mut self, left: Hull, right: Hull, vertex_count: usize) -> Result<(), InternalError> {
        let limit = 2 * vertex_count + 2;
        let (lower_left, lower_right) = self.lower_tangent(left.rightmost, right.leftmost, limit)?;
        let (upper_left, upper_right) = self.upper_tangent(left.rightmost, right.leftmost, limit)?;

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgGraphStyle::highlight_edges(vec![(lower_left, lower_right), (upper_left, upper_right)]), debug::svg::SvgOutputLevel::MajorSteps);

        let mut li = lower_left;
        let mut ri = lower_right;
        let mut steps = StepLimit::new("Merge", 3 * vertex_count + 3);
        while li != upper_left || ri != upper_right {
            steps.step()?;
            self.graph.connect(li, ri);

            let mut r1 = self.pred(ri, li)?;
            let right_exhausted = if self.graph.left_of(r1, li, ri) {
                let mut cuts = StepLimit::new("Right candidate search", self.graph.node(ri).ring().len() + 1);
                let mut r2 = self.pred(ri, r1)?;
                while self.graph.in_circle(r1, li, ri, r2) {
                    cuts.step()?;
                    self.graph.disconnect(ri, r1);
                    r1 = r2;
                    r2 = self.pred(ri, r1)?;
                }
                false
            } else {
                true
            };

            let mut l1 = self.succ(li, ri)?;
            let left_exhausted = if self.graph.right_of(l1, ri, li) {
                let mut cuts = StepLimit::new("Left candidate search", self.graph.node(li).ring().len() + 1);
                let mut l2 = self.succ(li, l1)?;
                while self.graph.in_circle(li, ri, l1, l2) {
                    cuts.step()?;
                    self.graph.disconnect(li, l1);
                    l1 = l2;
                    l2 = self.succ(li, l1)?;
                }
                false
            } else {
                true
            };

            #[cfg(feature = "debugging")]
            self.output_svg(debug::svg::SvgGraphStyle::highlight_edges(vec![(li, ri), (li, l1), (ri, r1)]), debug::svg::SvgOutputLevel::AllSteps);

            if right_exhausted {
                li = l1;
            } else if left_exhausted {
                ri = r1;
            } else if !self.graph.in_circle(li, ri, r1, l1) {
                ri = r1;
            } else {
                li = l1;
            }
        }
        self.graph.connect(upper_left, upper_right);

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgGraphStyle::highlight_edges(vec![(upper_left, upper_right)]), debug::svg::SvgOutputLevel::MajorSteps);

        Ok(())
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, style: debug::svg::SvgGraphStyle, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.debug.svg_context {
            if svg_context.output_level >= level {
                // Make the directory for this step if this is the first svg
                if self.debug.current_substep == 0 {
                    let path = svg_context.output_path.join(format!("{:03}", self.debug.current_step));
                    if std::fs::create_dir_all(path).is_err() {
                        return;
                    }
                }

                let mut svg = debug::svg::SvgOutput::new(svg_context, style);
                let _ = svg.append_element(&self.graph, &());

                let path: std::path::PathBuf = format!("{:03}", self.debug.current_step).into();
                let path = path.join(format!("{:03}.svg", self.debug.current_substep));
                let _ = svg.save(path);

                self.debug.current_substep += 1;
            }
        }
    }

    /// Records the sub-triangulation of `first..=last` in the merge tree and writes it out
    #[cfg(feature = "debugging")]
    fn advance_step(&mut self, first: usize, last: usize) {
        let label = format!("{}..={}", Idx::<Node>::new(first), Idx::<Node>::new(last));
        let node = if last - first > 2 {
            let right = self.debug.merge_trees.pop();
            let left = self.debug.merge_trees.pop();
            text_trees::TreeNode::with_child_nodes(label, left.into_iter().chain(right))
        } else {
            text_trees::TreeNode::new(label)
        };

        if let Some(svg_context) = &self.debug.svg_context {
            if svg_context.output_level >= debug::svg::SvgOutputLevel::MajorSteps && last - first > 2 {
                let dir = svg_context.output_path.join(format!("{:03}", self.debug.current_step));
                if std::fs::create_dir_all(&dir).is_ok() {
                    if let Ok(f) = std::fs::File::create(dir.join("state.txt")) {
                        let mut w = std::io::BufWriter::new(&f);
                        let _ = graph_fmt(&mut w, &node, &self.graph);
                    }
                }

                self.debug.current_step += 1;
                self.debug.current_substep = 0;
            }
        }

        self.debug.merge_trees.push(node);
    }
}

#[cfg(feature = "debugging")]
fn graph_fmt<K: Predicates>(w: &mut impl std::io::Write, merge_tree: &text_trees::TreeNode<String>, graph: &AdjacencyGraph<K>) -> std::io::Result<()> {
    writeln!(w, "merges:")?;
    writeln!(w, "{}", merge_tree)?;

    writeln!(w, "rings:")?;
    for v in graph.nodes().iter_index() {
        let node = graph.node(v);
        if node.ring().is_empty() {
            continue;
        }
        write!(w, "{} {}:", v, node.coords())?;
        for n in node.ring().iter() {
            write!(w, " {}", n)?;
        }
        writeln!(w)?;
    }
    writeln!(w, "edges: {}", graph.edge_count())?;
    Ok(())
}

#[cfg(feature = "debugging")]
impl<K: Predicates> debug::svg::SvgElement<debug::svg::SvgGraphStyle, ()> for AdjacencyGraph<K> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgGraphStyle>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let width = svg_output.context.percent(0.25);
        for v in self.nodes().iter_index() {
            let a = self.node(v).coords();
            for w in self.node(v).ring().iter().filter(|w| v < *w) {
                let b = self.node(w).coords();
                let (color, width) = match svg_output.style.get_e_style(v, w) {
                    debug::svg::SvgElementStyle::Hide => continue,
                    debug::svg::SvgElementStyle::Standard => (black(), width),
                    debug::svg::SvgElementStyle::Highlight => (rgb(255, 126, 0), width * 2.0),
                };
                writeln!(svg_output, "{}",
                    line_segment(a.x() as f32, a.y() as f32, b.x() as f32, b.y() as f32)
                        .color(color)
                        .width(width)
                )?;
            }
        }

        let r = svg_output.context.percent(0.5);
        let show_labels = svg_output.context.show_labels && svg_output.style.add_labels;
        for v in self.nodes().iter_index() {
            let c = self.node(v).coords();
            let color = match svg_output.style.get_v_style(v) {
                debug::svg::SvgElementStyle::Hide => continue,
                debug::svg::SvgElementStyle::Standard => blue(),
                debug::svg::SvgElementStyle::Highlight => rgb(255, 126, 0),
            };
            writeln!(svg_output, "{}",
                debug::svg::circle(c.x() as f32, c.y() as f32, r)
                    .fill(Fill::Color(color))
            )?;
            if show_labels {
                writeln!(svg_output, "{}",
                    text(c.x() as f32 + r, c.y() as f32 - r, format!("{}", v))
                        .size(svg_output.context.percent(2.0))
                        .color(black())
                )?;
            }
        }
        Ok(())
    }
}
