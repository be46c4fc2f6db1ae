//! Pipeline configuration

use lowpoly_algorithms::{effective_vertex_budget, EdgeConfig, SamplingConfig};
use lowpoly_reconstruction::{RandomTriangulationConfig, TriangulatorKind};
use lowpoly_render::WireframeStyle;
use serde::{Deserialize, Serialize};

/// Configuration for the low-poly pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Target number of mesh vertices, including the four corners.
    /// Values below 4 are treated as 4.
    pub vertex_budget: usize,
    /// Stroke triangle edges after filling them
    pub wireframe: bool,
    /// Wireframe color and line width
    pub wireframe_style: WireframeStyle,
    /// Primary triangulation algorithm
    pub triangulator: TriangulatorKind,
    /// Preserve the source aspect ratio on the render target
    pub letterbox: bool,
    /// Edge detection parameters
    pub edges: EdgeConfig,
    /// Point sampling parameters
    pub sampling: SamplingConfig,
    /// Randomized fallback triangulation parameters
    pub random_triangulation: RandomTriangulationConfig,
    /// Seed for the pipeline's random stream; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vertex_budget: 2000,
            wireframe: false,
            wireframe_style: WireframeStyle::default(),
            triangulator: TriangulatorKind::Delaunay,
            letterbox: true,
            edges: EdgeConfig::default(),
            sampling: SamplingConfig::default(),
            random_triangulation: RandomTriangulationConfig::default(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Set the vertex budget
    pub fn with_vertex_budget(mut self, vertex_budget: usize) -> Self {
        self.vertex_budget = vertex_budget;
        self
    }

    /// Enable or disable the wireframe overlay
    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    /// Set the wireframe style
    pub fn with_wireframe_style(mut self, style: WireframeStyle) -> Self {
        self.wireframe_style = style;
        self
    }

    /// Select the primary triangulator
    pub fn with_triangulator(mut self, triangulator: TriangulatorKind) -> Self {
        self.triangulator = triangulator;
        self
    }

    /// Enable or disable letterboxing
    pub fn with_letterbox(mut self, letterbox: bool) -> Self {
        self.letterbox = letterbox;
        self
    }

    /// Set edge detection parameters
    pub fn with_edges(mut self, edges: EdgeConfig) -> Self {
        self.edges = edges;
        self
    }

    /// Set point sampling parameters
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set fallback triangulation parameters
    pub fn with_random_triangulation(mut self, config: RandomTriangulationConfig) -> Self {
        self.random_triangulation = config;
        self
    }

    /// Seed the random stream
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Vertex budget after clamping to the four mandatory corners
    pub fn effective_vertex_budget(&self) -> usize {
        effective_vertex_budget(self.vertex_budget)
    }

    /// Wireframe style to draw with, if the overlay is enabled
    pub fn active_wireframe(&self) -> Option<&WireframeStyle> {
        self.wireframe.then_some(&self.wireframe_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.vertex_budget, 2000);
        assert!(!config.wireframe);
        assert_eq!(config.triangulator, TriangulatorKind::Delaunay);
        assert!(config.letterbox);
        assert_eq!(config.seed, None);
        assert!(config.active_wireframe().is_none());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_vertex_budget(0)
            .with_wireframe(true)
            .with_triangulator(TriangulatorKind::Random)
            .with_seed(11);

        assert_eq!(config.effective_vertex_budget(), 4);
        assert_eq!(config.active_wireframe(), Some(&WireframeStyle::default()));
        assert_eq!(config.triangulator, TriangulatorKind::Random);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            vertex_budget = 500
            triangulator = "random"

            [edges]
            threshold = 12.5

            [wireframe_style]
            color = [255, 0, 255]
            "#,
        )
        .unwrap();

        assert_eq!(config.vertex_budget, 500);
        assert_eq!(config.triangulator, TriangulatorKind::Random);
        assert_eq!(config.edges.threshold, 12.5);
        assert_eq!(config.wireframe_style.color, [255, 0, 255]);
        assert_eq!(config.wireframe_style.line_width, 0.5);
        assert_eq!(config.sampling, SamplingConfig::default());
        assert!(!config.wireframe);
    }
}
