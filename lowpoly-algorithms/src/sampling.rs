//! Edge-biased point sampling
//!
//! The sampler produces the vertex set of a low-poly mesh: the four corners of
//! the unit square, a share of points drawn from edge pixels, and uniform
//! random points for whatever budget remains.

use lowpoly_core::{normalize_pixel, unit_square_corners, EdgeMask, Point2f};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of corner points every sample set starts with
pub const CORNER_COUNT: usize = 4;

/// Configuration for point sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Fraction of the non-corner budget that edge sampling may fill
    pub edge_share: f32,
    /// Number of random pixel probes made while looking for edge pixels.
    /// Probes that miss an edge are not retried.
    pub edge_attempts: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            edge_share: 0.7,
            edge_attempts: 100,
        }
    }
}

impl SamplingConfig {
    /// Set the edge share of the budget
    pub fn with_edge_share(mut self, edge_share: f32) -> Self {
        self.edge_share = edge_share;
        self
    }

    /// Set the number of edge probes
    pub fn with_edge_attempts(mut self, edge_attempts: usize) -> Self {
        self.edge_attempts = edge_attempts;
        self
    }
}

/// Clamp a requested vertex budget to the four mandatory corners
pub fn effective_vertex_budget(requested: usize) -> usize {
    requested.max(CORNER_COUNT)
}

/// Sample the vertex set for one pass
///
/// # Arguments
/// * `mask` - Edge mask of the source buffer
/// * `vertex_budget` - Target number of points; values below 4 are clamped
/// * `config` - Sampling parameters
/// * `rng` - Random source
///
/// # Returns
/// * `Vec<Point2f>` - The four corners first, then edge points, then uniform
///   random points. All coordinates are normalized.
pub fn sample_points<R: Rng + ?Sized>(
    mask: &EdgeMask,
    vertex_budget: usize,
    config: &SamplingConfig,
    rng: &mut R,
) -> Vec<Point2f> {
    let budget = effective_vertex_budget(vertex_budget) - CORNER_COUNT;
    let mut points = Vec::with_capacity(CORNER_COUNT + budget);
    points.extend_from_slice(&unit_square_corners());

    let edge_quota = budget as f32 * config.edge_share;
    let mut added = 0usize;

    if !mask.is_empty() {
        let (width, height) = (mask.width(), mask.height());
        for _ in 0..config.edge_attempts {
            if added as f32 >= edge_quota {
                break;
            }

            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            if mask.is_edge(x, y) {
                points.push(normalize_pixel(x, y, width, height));
                added += 1;
            }
        }
    }
    let edge_points = added;

    while added < budget {
        points.push(Point2f::new(rng.gen::<f32>(), rng.gen::<f32>()));
        added += 1;
    }

    debug!(
        total = points.len(),
        edge_points,
        random_points = added - edge_points,
        "points sampled"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowpoly_core::is_normalized;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_mask(width: u32, height: u32) -> EdgeMask {
        let mut mask = EdgeMask::new(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.mark(x, y);
            }
        }
        mask
    }

    #[test]
    fn test_sampling_config_default() {
        let config = SamplingConfig::default();
        assert_eq!(config.edge_share, 0.7);
        assert_eq!(config.edge_attempts, 100);
    }

    #[test]
    fn test_corners_come_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_points(&EdgeMask::new(8, 8), 50, &SamplingConfig::default(), &mut rng);

        assert_eq!(&points[..4], &unit_square_corners());
        assert_eq!(points.len(), 50);
    }

    #[test]
    fn test_budget_below_corners_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        for budget in [0, 1, 3, 4] {
            let points = sample_points(&EdgeMask::new(4, 4), budget, &SamplingConfig::default(), &mut rng);
            assert_eq!(points, unit_square_corners().to_vec());
        }
    }

    #[test]
    fn test_edge_points_lie_on_edge_pixels() {
        let mut mask = EdgeMask::new(10, 10);
        mask.mark(3, 7);

        // Every probe that lands must be (3, 7)
        let config = SamplingConfig::default().with_edge_attempts(10_000).with_edge_share(1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let points = sample_points(&mask, 6, &config, &mut rng);

        assert_eq!(points.len(), 6);
        assert!(points[4..].contains(&Point2f::new(0.3, 0.7)));
    }

    #[test]
    fn test_edge_quota_caps_edge_sampling() {
        // With every pixel an edge, 70% of a budget of 100 is 70 edge points;
        // edge points sit on the pixel grid so their coordinates are multiples of 0.1
        let config = SamplingConfig::default().with_edge_attempts(1_000);
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample_points(&full_mask(10, 10), 104, &config, &mut rng);

        assert_eq!(points.len(), 104);
        let on_grid = |v: f32| ((v * 10.0).round() - v * 10.0).abs() < 1e-4;
        assert!(points[4..74].iter().all(|p| on_grid(p.x) && on_grid(p.y)));
    }

    #[test]
    fn test_empty_mask_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(9);
        let points = sample_points(&EdgeMask::new(0, 0), 20, &SamplingConfig::default(), &mut rng);
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn test_effective_vertex_budget() {
        assert_eq!(effective_vertex_budget(0), 4);
        assert_eq!(effective_vertex_budget(2000), 2000);
    }

    proptest! {
        #[test]
        fn prop_point_count_within_bounds(
            budget in 0usize..600,
            width in 1u32..40,
            height in 1u32..40,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = sample_points(&full_mask(width, height), budget, &SamplingConfig::default(), &mut rng);

            prop_assert!(points.len() >= 4);
            prop_assert!(points.len() <= effective_vertex_budget(budget));
            prop_assert_eq!(&points[..4], &unit_square_corners()[..]);
            prop_assert!(points.iter().all(is_normalized));
        }
    }
}
