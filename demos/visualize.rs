//! Renders sample partitions to SVG files.
//!
//! Run with: cargo run --example visualize

use rectilin::{partition, Point2, Polygon};

use std::fs::File;
use std::io::Write;

const SCALE: f64 = 48.0;
const MARGIN: f64 = 24.0;

const FILLS: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
];

fn main() {
    std::fs::create_dir_all("screenshots").expect("create screenshots directory");

    render(
        "l_shape",
        &[(0, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2)],
    );
    render(
        "plus_sign",
        &[
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 3),
            (1, 3),
            (1, 2),
            (0, 2),
            (0, 1),
            (1, 1),
        ],
    );
    render(
        "comb",
        &[
            (0, 0),
            (7, 0),
            (7, 2),
            (6, 2),
            (6, 1),
            (5, 1),
            (5, 2),
            (4, 2),
            (4, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 1),
            (1, 1),
            (1, 2),
            (0, 2),
        ],
    );
    render(
        "staircase",
        &[
            (0, 0),
            (4, 0),
            (4, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 3),
            (1, 3),
            (1, 4),
            (0, 4),
        ],
    );

    println!("Generated all partitions in screenshots/");
}

/// Partitions the polygon and writes outline plus rectangles to an SVG.
fn render(name: &str, points: &[(i32, i32)]) {
    let polygon = Polygon::new(
        points
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect::<Vec<_>>(),
    );
    let rects = partition(&polygon).expect("sample polygon is valid");
    let bounds = polygon.bounding_rect().expect("sample polygon is not empty");

    let height = f64::from(bounds.max.y - bounds.min.y) * SCALE + 2.0 * MARGIN;
    let width = f64::from(bounds.max.x - bounds.min.x) * SCALE + 2.0 * MARGIN;
    // Flip y so the polygon renders with y growing upward.
    let tx = |x: i32| f64::from(x - bounds.min.x) * SCALE + MARGIN;
    let ty = |y: i32| height - (f64::from(y - bounds.min.y) * SCALE + MARGIN);

    let mut svg = Svg::new(width, height);
    for (i, r) in rects.iter().enumerate() {
        svg.rect(
            tx(r.min.x),
            ty(r.max.y),
            f64::from(r.max.x - r.min.x) * SCALE,
            f64::from(r.max.y - r.min.y) * SCALE,
            FILLS[i % FILLS.len()],
            "#555555",
            1.5,
        );
    }
    let outline: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (tx(x), ty(y))).collect();
    svg.polygon(&outline, "none", "#111111", 3.0);

    let path = format!("screenshots/{}.svg", name);
    svg.save(&path).expect("write svg");
    println!("  {} -> {} rectangles", path, rects.len());
}

/// Minimal SVG document builder.
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            x, y, w, h, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[(f64, f64)], fill: &str, stroke: &str, stroke_width: f64) {
        let list: Vec<String> = points.iter().map(|&(x, y)| format!("{},{}", x, y)).collect();
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            list.join(" "),
            fill,
            stroke,
            stroke_width
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(
            file,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        )?;
        file.write_all(self.content.as_bytes())?;
        writeln!(file, "</svg>")?;
        Ok(())
    }
}
