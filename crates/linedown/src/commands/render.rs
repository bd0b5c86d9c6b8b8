//! Render one file or stdin to HTML.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use linedown_renderer::MarkdownConverter;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Source file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let text = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let html = MarkdownConverter::new().convert(&text);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                out.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}
