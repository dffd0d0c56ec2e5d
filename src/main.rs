//! CLI entry point for the chaos-game fern renderer

use barnsley::io::cli::{Cli, Renderer};
use clap::Parser;

// Allow print for the final render summary
#[allow(clippy::print_stderr)]
fn main() -> barnsley::Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let mut renderer = Renderer::new(cli);
    let summary = renderer.render()?;
    if !quiet {
        eprintln!(
            "Rendered {} points ({} distinct pixels) to {}",
            summary.points,
            summary.lit_pixels,
            summary.output.display()
        );
    }
    Ok(())
}
