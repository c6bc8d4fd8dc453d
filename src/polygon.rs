use crate::error::{Error, Result};
use crate::graphics::Geometry;
use std::f32::consts::PI;
use std::io::{BufRead, Write};

/// Fewest vertices the polygon exercise accepts
pub const MIN_POLYGON_VERTICES: u32 = 8;
/// Most vertices the polygon exercise accepts, keeps the buffers a few
/// megabytes and every index count well inside `GLsizei`
pub const MAX_POLYGON_VERTICES: u32 = 1 << 20;

const TWICE_PI: f32 = PI * 2.0;

/// A regular polygon drawn as a triangle fan around its center.
///
/// Vertex 0 is the center, vertices `1..=n` sit on the circle.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl Polygon {
    pub fn regular(sides: u32, radius: f32) -> Self {
        assert!(sides >= 3, "a polygon needs at least three sides");
        assert!(sides <= MAX_POLYGON_VERTICES, "too many sides: {}", sides);

        let mut vertices = Vec::with_capacity((sides as usize + 1) * 3);
        vertices.extend_from_slice(&[0.0, 0.0, 0.0]);
        for i in 0..sides {
            let angle = TWICE_PI * i as f32 / sides as f32;
            vertices.extend_from_slice(&[radius * angle.cos(), radius * angle.sin(), 0.0]);
        }

        let mut indices = Vec::with_capacity(sides as usize * 3);
        for i in 1..sides {
            indices.extend_from_slice(&[0, i, i + 1]);
        }
        // Close the fan on the first perimeter vertex
        indices.extend_from_slice(&[0, sides, 1]);

        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn geometry(&self) -> Geometry<'_> {
        Geometry::new(&self.vertices, &self.indices, &[3])
    }
}

/// Asks for a vertex count until a number between [`MIN_POLYGON_VERTICES`]
/// and [`MAX_POLYGON_VERTICES`] is entered.
///
/// Lines that aren't a number are treated like a value that is out of range.
pub fn prompt_vertex_count<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<u32> {
    let mut line = String::new();
    loop {
        write!(output, "Podaj ilosc wierzcholkow wielokata: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::PromptClosed);
        }
        writeln!(output)?;

        match line.trim().parse::<u32>() {
            Ok(n) if (MIN_POLYGON_VERTICES..=MAX_POLYGON_VERTICES).contains(&n) => return Ok(n),
            _ => log::debug!("rejected vertex count {:?}", line.trim()),
        }
    }
}
