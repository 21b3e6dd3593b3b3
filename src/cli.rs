use clap::Parser;
use std::path::Path;

use crate::layout::last_segment;

#[derive(Parser, Debug)]
#[command(name = "ichs")]
#[command(version)]
#[command(about = "Checks if a ZIP archive is ready to be published to SDKMAN!", long_about = None)]
#[command(after_help = "Examples:\n  \
  ichs https://example.com/app-1.0.zip   check a remote archive\n  \
  ichs ./build/app-1.0.zip               check a local archive")]
pub struct Cli {
    /// The archive's URL (or a local path)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Print diagnostics to stderr (-vv for more)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }

    /// Name shown at the top of the tree: the last segment of the URL
    /// path, or the file name of a local archive.
    pub fn caption(&self) -> String {
        if self.is_http_url() {
            let path = reqwest::Url::parse(&self.url)
                .map(|url| url.path().to_string())
                .unwrap_or_else(|_| self.url.clone());
            return last_segment(&path).to_string();
        }

        Path::new(&self.url)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.url.clone())
    }
}
