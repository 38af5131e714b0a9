//! Arc generation command handler.

use super::commands::GenerateArgs;
use callsheet::{
    ArcMaterialsOrchestrator, CallsheetConfig, CallsheetResult, FileSystemRepository, JsonError,
    OpenAICompatibleClient, ProgressEvent, ProgressKind, StorageError, StorageErrorKind,
    arc_request,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Generate an arc's materials and write the bundle.
#[tracing::instrument(skip(args), fields(story = %args.arc.story, arc = args.arc.arc))]
pub async fn run_generate(args: GenerateArgs) -> CallsheetResult<()> {
    let config = match &args.config {
        Some(path) => CallsheetConfig::from_file(path)?,
        None => CallsheetConfig::load()?,
    };

    let repository = FileSystemRepository::new(&args.arc.data_dir);
    let request = arc_request(
        &repository,
        &args.arc.story,
        args.arc.arc,
        args.arc.episodes.clone(),
        args.arc.character.clone(),
    )
    .await?;

    let driver = OpenAICompatibleClient::new(config.provider().clone())?;

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current phase");
            ctrl_c.cancel();
        }
    });

    let (tx, rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(print_progress(rx));

    let orchestrator = ArcMaterialsOrchestrator::new(driver, config)
        .with_progress(tx)
        .with_cancellation(token);
    let result = orchestrator.generate_arc_materials(&request).await;

    // Closes the channel so the printer drains and exits
    drop(orchestrator);
    let _ = printer.await;

    let bundle = result?;
    let json = serde_json::to_string_pretty(&bundle)
        .map_err(|e| JsonError::new(format!("Failed to serialize bundle: {}", e)))?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, json).await.map_err(|e| {
                StorageError::new(StorageErrorKind::Write(format!("{}: {}", path.display(), e)))
            })?;
            println!(
                "Wrote materials for {} characters to {}",
                bundle.characters().len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn print_progress(mut rx: mpsc::UnboundedReceiver<ProgressEvent>) {
    while let Some(event) = rx.recv().await {
        match event.kind {
            ProgressKind::Complete => eprintln!("[{:>6.2}%] {}", event.percentage, event.message),
            _ => eprintln!("[{:>6.2}%]   {}", event.percentage, event.message),
        }
    }
}
