use crate::particle::Particle;

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Particle counts per character cell. Row 0 is the source row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityGrid {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl DensityGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width * height],
        }
    }

    /// Count every particle into the cell at (floor(y), round(x)).
    pub fn from_particles(particles: &[Particle], width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for p in particles {
            grid.add(p.x, p.y);
        }
        grid
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Positions past the grid edge land in the nearest edge cell. That only
    /// happens for particles that are about to respawn.
    pub fn add(&mut self, x: f64, y: f64) {
        if self.counts.is_empty() {
            return;
        }
        let row = clamp_cell(y.floor(), self.height);
        let col = clamp_cell(x.round(), self.width);
        if row as f64 != y.floor() || col as f64 != x.round() {
            log::debug!("clamped stale particle at ({x:.2}, {y:.2}) to cell ({row}, {col})");
        }
        let i = self.idx(row, col);
        self.counts[i] += 1;
    }

    pub fn count(&self, row: usize, col: usize) -> u32 {
        if row < self.height && col < self.width {
            self.counts[self.idx(row, col)]
        } else {
            0
        }
    }

    pub fn set(&mut self, row: usize, col: usize, count: u32) {
        if row < self.height && col < self.width {
            let i = self.idx(row, col);
            self.counts[i] = count;
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = u32> + '_ {
        NEIGHBORS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then(|| self.counts[self.idx(r, c)])
        })
    }

    /// Densest cell in the 8-neighborhood; cells off the grid are skipped.
    pub fn neighbor_max(&self, row: usize, col: usize) -> u32 {
        self.neighbors(row, col).max().unwrap_or(0)
    }

    /// Clear every cell that sits next to a cell holding more than
    /// `threshold` particles. Neighbors are read from the grid as it was
    /// before the pass.
    pub fn declump(&mut self, threshold: u32) {
        let before = self.clone();
        for row in 0..self.height {
            for col in 0..self.width {
                if before.neighbor_max(row, col) > threshold {
                    self.set(row, col, 0);
                }
            }
        }
    }

    /// Render with `glyph`, farthest row first, so the source row is the
    /// last line. Lines are joined with '\n' and carry no trailing newline.
    pub fn render<F>(&self, mut glyph: F) -> String
    where
        F: FnMut(&DensityGrid, usize, usize) -> char,
    {
        let mut lines = Vec::with_capacity(self.height);
        for row in (0..self.height).rev() {
            let line: String = (0..self.width).map(|col| glyph(self, row, col)).collect();
            lines.push(line);
        }
        lines.join("\n")
    }
}

fn clamp_cell(v: f64, len: usize) -> usize {
    if v <= 0.0 || v.is_nan() {
        0
    } else {
        (v as usize).min(len.saturating_sub(1))
    }
}
