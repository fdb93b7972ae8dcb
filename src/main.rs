use std::sync::Arc;

use itemproc::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = match CliArgs::parse(std::env::args().collect()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    CliApp::new("itemproc")
        .with_verbose(args.verbose)
        .run(|writer| run_batch(writer, args))
        .await
}

/// Seed an in-memory store from CSV, process every item, print what changed
async fn run_batch(
    mut writer: tokio::io::BufWriter<tokio::io::Stdout>,
    args: CliArgs,
) -> Result<(), AppError> {
    let store = Arc::new(ConcurrentItemStore::new());

    // Invalid rows are logged and skipped
    let stream = CsvItemStream::from_file(&args.input).await?;
    let summary = load_items(store.as_ref(), stream).await?;
    info!(
        loaded = summary.loaded,
        rejected = summary.rejected,
        "Seeded item store"
    );

    let processor = BatchProcessor::new(Arc::clone(&store)).with_concurrency(args.concurrency);

    // Any failed item fails the whole run; nothing is written in that case
    let mut processed = processor.process_all().await?;
    processed.sort_by_key(|item| item.id());

    // write_items flushes the writer
    write_items(&processed, &mut writer).await?;

    Ok(())
}
