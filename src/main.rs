use clap::Parser;
use fleetdoc::{DocumentServiceBuilder, EnvironmentSetting, PipelineError, RenderRequest, Settings};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Render an HTML document to PDF, degrading to a plain-text PDF when the
/// browser is unavailable.
#[derive(Parser, Debug)]
#[command(name = "fleetdoc", version, about)]
struct Cli {
    /// HTML file to render, or `-` for standard input.
    input: PathBuf,

    /// Where to write the PDF. Defaults to a name derived from the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the browser and produce the plain-text document directly.
    #[arg(long)]
    fallback_only: bool,

    /// Treat this process as a constrained hosted runtime.
    #[arg(long, conflicts_with = "local")]
    hosted: bool,

    /// Use the locally installed Chrome regardless of the hosted flag.
    #[arg(long)]
    local: bool,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if cli.hosted {
        settings.renderer.environment = EnvironmentSetting::Hosted;
    } else if cli.local {
        settings.renderer.environment = EnvironmentSetting::Local;
    }

    let html = read_input(&cli.input)?;
    let hint = filename_hint(&cli.input);

    let service = DocumentServiceBuilder::new()
        .with_settings(settings)
        .fallback_only(cli.fallback_only)
        .build()?;

    let mut request = RenderRequest::new(html);
    if let Some(hint) = hint {
        request = request.with_filename_hint(hint);
    }
    let document = service.render_document(request).await;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(document.filename()));
    fs::write(&output, document.bytes())?;

    println!(
        "Wrote {} ({} bytes, origin: {}{})",
        output.display(),
        document.len(),
        document.origin(),
        if document.is_truncated() { ", truncated" } else { "" }
    );
    Ok(())
}

fn read_input(input: &Path) -> Result<String, PipelineError> {
    if input == Path::new("-") {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html)?;
        Ok(html)
    } else {
        fs::read_to_string(input).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read '{}': {}", input.display(), e),
            ))
        })
    }
}

fn filename_hint(input: &Path) -> Option<String> {
    if input == Path::new("-") {
        return None;
    }
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
}
