pub mod allocator;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod snapshot;
pub mod utils;
pub mod writer;

use allocator::{summarize, Allocator, GreedyAllocator};
use config::AppConfig;
use model::{AppError, ParserError};
use parser::{Parser, StoreListingParser};
use snapshot::{FileSnapshot, SnapshotSource};
use tracing::info;
use writer::{apply_allocations, FormFill, RunOutput};

/// Extracts offers from a listing document, allocates them and collects the
/// resulting field values.
pub fn process_listing(html: &str, parser: &impl Parser) -> Result<RunOutput, ParserError> {
    let listed = parser.parse(html)?;
    let allocated = GreedyAllocator::new().allocate(listed);
    let report = summarize(&allocated);

    let mut form = FormFill::new();
    apply_allocations(&allocated, &mut form);

    Ok(RunOutput {
        report,
        fields: form.into_assignments(),
    })
}

/// One full run: load the snapshot, then extract and allocate.
pub async fn run(config: &AppConfig) -> Result<RunOutput, AppError> {
    let snapshot = FileSnapshot::new(&config.snapshot_path, config.frame_name.clone());
    let html = snapshot.load().await?;

    info!("Parsing listing...");
    let parser = StoreListingParser::with_layout(config.row_selector.clone(), config.row_cells);
    Ok(process_listing(&html, &parser)?)
}
