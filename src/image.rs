use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::path::{Path, PathBuf};

/// Where the flyer image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote URL or `data:` URI, passed to the API untouched
    Url(String),
    /// Local file, inlined as a base64 data URI
    Path(PathBuf),
}

impl ImageSource {
    /// Classify a command-line argument
    ///
    /// Anything that is neither a URL nor an existing file is treated as a
    /// URL and left for the API to reject.
    pub fn from_arg(arg: &str) -> Self {
        if arg.contains("://") || arg.starts_with("data:") {
            return ImageSource::Url(arg.to_string());
        }

        let path = Path::new(arg);
        if path.is_file() {
            ImageSource::Path(path.to_path_buf())
        } else {
            ImageSource::Url(arg.to_string())
        }
    }

    /// The value sent in the `image_url` part of the request
    pub async fn to_image_url(&self) -> Result<String> {
        match self {
            ImageSource::Url(url) => Ok(url.clone()),
            ImageSource::Path(path) => {
                let data = tokio::fs::read(path).await?;
                debug!("Inlining {} ({} bytes)", path.display(), data.len());
                Ok(format!(
                    "data:{};base64,{}",
                    mime_type(path),
                    STANDARD.encode(&data)
                ))
            }
        }
    }
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
