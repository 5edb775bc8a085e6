use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::application::routes::support::lenient_json;
use crate::domain::banners::BannerFields;
use crate::presentation::web::templates::render_banner;

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// JSON file with banner fields; reads stdin when omitted
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub fn run(command: RenderCommand) -> anyhow::Result<()> {
    let contents = match &command.file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read banner fields from stdin")?;
            buf
        }
    };

    let fields: BannerFields = lenient_json(&contents);
    let html = render_banner(fields).context("failed to render banner")?;
    println!("{html}");
    Ok(())
}
