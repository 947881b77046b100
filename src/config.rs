//! Filter parameters and the JSON configuration of the `frame_edges` tool.
use crate::color::PixelLayout;
use crate::edges::CannyParams;
use crate::morphology::StructuringElement;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything that shapes the transform. `Default` is the fixed behaviour:
/// ARGB pixels, Sobel/L1 Canny at 100/200, one 3×3 dilation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeFilterParams {
    pub layout: PixelLayout,
    pub canny: CannyParams,
    /// Number of dilation iterations; 0 returns the raw Canny mask.
    pub thickness: usize,
    pub element: StructuringElement,
}

impl Default for EdgeFilterParams {
    fn default() -> Self {
        Self {
            layout: PixelLayout::Argb,
            canny: CannyParams::default(),
            thickness: 1,
            element: StructuringElement::Square,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub filter: EdgeFilterParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutputConfig {
    /// Grayscale PNG receiving the edge map
    pub edge_map: PathBuf,
    /// Optional JSON report with dimensions, edge count and stage timings
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<EdgeToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
