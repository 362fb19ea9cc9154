use crate::model::ConfigError;
use crate::parser::store_parser::{DEFAULT_ROW_CELLS, DEFAULT_ROW_SELECTOR};
use crate::snapshot::DEFAULT_FRAME_NAME;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Saved storefront page.
    pub snapshot_path: String,
    /// Frame holding the listing; `null` parses the page itself.
    #[serde(default = "default_frame_name")]
    pub frame_name: Option<String>,
    #[serde(default = "default_row_selector")]
    pub row_selector: String,
    #[serde(default = "default_row_cells")]
    pub row_cells: usize,
    /// Where to write the field values; stdout when absent.
    #[serde(default)]
    pub output_path: Option<String>,
}

fn default_frame_name() -> Option<String> {
    Some(DEFAULT_FRAME_NAME.to_string())
}

fn default_row_selector() -> String {
    DEFAULT_ROW_SELECTOR.to_string()
}

fn default_row_cells() -> usize {
    DEFAULT_ROW_CELLS
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
