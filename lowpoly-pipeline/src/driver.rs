//! Single-pass driver for still images
//!
//! A pass runs edge detection, point sampling, triangulation and rasterization
//! on a fresh [`PipelineState`]. Failures inside a pass degrade the output but
//! never escape it: every pass ends with a [`PassReport`].

use crate::config::PipelineConfig;
use crate::state::PipelineState;
use lowpoly_algorithms::{detect_edges, sample_points};
use lowpoly_core::{EdgeMask, PixelBuffer, RenderTarget};
use lowpoly_reconstruction::TriangulationStrategy;
use lowpoly_render::{rasterize, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How a pass ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassStatus {
    /// The full mesh was rendered
    Rendered,
    /// The pass completed with a visually degraded result
    Degraded { reason: String },
    /// No pixel buffer was available; the render target was not touched
    MissingSource,
}

/// Result of a pipeline pass with metadata
#[derive(Debug, Clone)]
pub struct PassReport {
    /// Outcome of the pass
    pub status: PassStatus,
    /// State produced by the pass; `None` when the pass was skipped
    pub state: Option<PipelineState>,
    /// Triangulator that produced the mesh
    pub triangulator: Option<&'static str>,
    /// Whether the primary triangulator failed and the fallback ran
    pub used_fallback: bool,
    /// Wall-clock time spent in the pass
    pub elapsed: Duration,
}

impl PassReport {
    fn missing_source(elapsed: Duration) -> Self {
        Self {
            status: PassStatus::MissingSource,
            state: None,
            triangulator: None,
            used_fallback: false,
            elapsed,
        }
    }

    /// Number of points sampled in this pass
    pub fn point_count(&self) -> usize {
        self.state.as_ref().map_or(0, PipelineState::point_count)
    }

    /// Number of triangles drawn in this pass
    pub fn triangle_count(&self) -> usize {
        self.state.as_ref().map_or(0, PipelineState::triangle_count)
    }
}

/// The low-poly pipeline
pub struct LowPolyPipeline {
    config: PipelineConfig,
    strategy: TriangulationStrategy,
    rng: StdRng,
}

impl LowPolyPipeline {
    /// Create a new pipeline with configuration
    pub fn new(config: PipelineConfig) -> Self {
        if config.vertex_budget < config.effective_vertex_budget() {
            warn!(
                requested = config.vertex_budget,
                effective = config.effective_vertex_budget(),
                "vertex budget below the four corners, clamping"
            );
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let strategy = Self::build_strategy(&config);

        Self { config, strategy, rng }
    }

    fn build_strategy(config: &PipelineConfig) -> TriangulationStrategy {
        TriangulationStrategy::new(
            config.triangulator,
            config.effective_vertex_budget(),
            &config.random_triangulation,
        )
    }

    /// Current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Change the vertex budget used by later passes
    pub fn set_vertex_budget(&mut self, vertex_budget: usize) {
        self.config.vertex_budget = vertex_budget;
        self.strategy = Self::build_strategy(&self.config);
    }

    /// Toggle the wireframe overlay for later passes and redraws
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.config.wireframe = wireframe;
    }

    /// Viewport for drawing a source of the given size onto `target`
    pub fn viewport_for<T: RenderTarget + ?Sized>(&self, source: &PixelBuffer<'_>, target: &T) -> Viewport {
        if self.config.letterbox {
            Viewport::letterbox(source.width(), source.height(), target.width(), target.height())
        } else {
            Viewport::fill(target.width(), target.height())
        }
    }

    /// Stage 1: binary edge mask of the source
    pub fn build_edge_mask(&self, source: &PixelBuffer<'_>) -> EdgeMask {
        detect_edges(source, &self.config.edges)
    }

    /// Stage 2: replace the state's points with a fresh sample
    pub fn sample(&mut self, mut state: PipelineState, mask: &EdgeMask) -> PipelineState {
        state.points = sample_points(
            mask,
            self.config.vertex_budget,
            &self.config.sampling,
            &mut self.rng,
        );
        state
    }

    /// Stage 3: replace the state's triangles with a triangulation of its points
    ///
    /// Returns the name of the triangulator used and whether the fallback ran.
    pub fn triangulate(&mut self, mut state: PipelineState) -> (PipelineState, &'static str, bool) {
        let outcome = self.strategy.triangulate(&state.points, &mut self.rng);
        state.triangles = outcome.triangles;
        (state, outcome.algorithm_used, outcome.used_fallback)
    }

    /// Stage 4: draw the state's triangles onto `target`
    pub fn rasterize<T: RenderTarget + ?Sized>(&self, state: &PipelineState, source: &PixelBuffer<'_>, target: &mut T) {
        rasterize(
            &state.triangles,
            source,
            target,
            &state.viewport,
            self.config.active_wireframe(),
        );
    }

    /// Run one full pass
    ///
    /// With no source (or an empty one) the pass is a no-op that leaves
    /// `target` untouched.
    pub fn run_pass<T: RenderTarget + ?Sized>(&mut self, source: Option<&PixelBuffer<'_>>, target: &mut T) -> PassReport {
        let start = Instant::now();

        let source = match source {
            Some(source) if !source.is_empty() => source,
            _ => {
                debug!("no source pixels, skipping pass");
                return PassReport::missing_source(start.elapsed());
            }
        };

        let state = PipelineState::new(source.width(), source.height(), self.viewport_for(source, target));

        let mask = self.build_edge_mask(source);
        let state = self.sample(state, &mask);
        drop(mask);

        let (state, triangulator, used_fallback) = self.triangulate(state);
        self.rasterize(&state, source, target);

        let status = if state.triangles.is_empty() {
            PassStatus::Degraded {
                reason: "no triangles generated".to_string(),
            }
        } else if used_fallback {
            PassStatus::Degraded {
                reason: "primary triangulation failed, randomized fallback used".to_string(),
            }
        } else {
            PassStatus::Rendered
        };

        let elapsed = start.elapsed();
        debug!(
            points = state.point_count(),
            triangles = state.triangle_count(),
            triangulator,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "pass complete"
        );

        PassReport {
            status,
            state: Some(state),
            triangulator: Some(triangulator),
            used_fallback,
            elapsed,
        }
    }

    /// Render a still image once and notify `on_complete` when done
    ///
    /// The notification fires for every outcome, including a missing source.
    pub fn render_still<T, F>(&mut self, source: Option<&PixelBuffer<'_>>, target: &mut T, on_complete: F) -> PassReport
    where
        T: RenderTarget + ?Sized,
        F: FnOnce(&PassReport),
    {
        let report = self.run_pass(source, target);
        info!(
            status = ?report.status,
            points = report.point_count(),
            triangles = report.triangle_count(),
            "still image rendered"
        );
        on_complete(&report);
        report
    }

    /// Draw an earlier pass's state again with the current settings
    ///
    /// Points and triangles are reused as-is; only the rasterizer runs. Use
    /// this after toggling the wireframe overlay.
    pub fn redraw<T: RenderTarget + ?Sized>(&self, state: &PipelineState, source: &PixelBuffer<'_>, target: &mut T) {
        if state.triangles.is_empty() {
            return;
        }
        self.rasterize(state, source, target);
    }
}

impl std::fmt::Debug for LowPolyPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LowPolyPipeline")
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .finish()
    }
}
