//! Binary edge mask produced by edge detection

/// Per-pixel "is-edge" flags for one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    width: u32,
    height: u32,
    flags: Vec<bool>,
}

impl EdgeMask {
    /// Create a mask with no pixel marked
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flags: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the mask covers no pixels
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` is marked as an edge. Out-of-range coordinates are not edges.
    #[inline]
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.flags[self.index(x, y)]
    }

    /// Mark `(x, y)` as an edge
    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.flags[i] = true;
    }

    /// Number of marked pixels
    pub fn edge_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Iterate over the coordinates of every marked pixel
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }
}
