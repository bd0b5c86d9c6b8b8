//! Batch-render the configured source tree.

use std::path::{Path, PathBuf};

use clap::Args;
use linedown_config::{CliSettings, Config};
use linedown_renderer::MarkdownConverter;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `build` command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to linedown.toml; discovered in parent directories when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured source directory.
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Override the configured output directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            out_dir: self.out_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let build = &config.build_resolved;

        if !build.source_dir.is_dir() {
            return Err(CliError::Validation(format!(
                "source directory does not exist: {}",
                build.source_dir.display()
            )));
        }

        let converter = MarkdownConverter::new();
        let mut rendered = 0usize;

        for ext in &build.extensions {
            let pattern = format!("{}/**/*.{ext}", build.source_dir.display());
            for entry in glob::glob(&pattern)? {
                let source = entry?;
                render_file(&converter, &source, &build.source_dir, &build.out_dir)?;
                rendered += 1;
            }
        }

        out.success(&format!(
            "Rendered {rendered} file(s) into {}",
            build.out_dir.display()
        ));
        Ok(())
    }
}

/// Render one source file into its mirrored path under `out_dir`.
fn render_file(
    converter: &MarkdownConverter,
    source: &Path,
    source_dir: &Path,
    out_dir: &Path,
) -> Result<(), CliError> {
    let relative = source.strip_prefix(source_dir).unwrap_or(source);
    let target = out_dir.join(relative).with_extension("html");

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text = std::fs::read_to_string(source)?;
    let html = converter.convert(&text);
    std::fs::write(&target, html)?;

    info!(source = %source.display(), target = %target.display(), "rendered");
    Ok(())
}
