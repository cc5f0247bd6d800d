use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Front-end asset tree. HTML pages live in `pages/`, everything else
/// (styles, scripts, images) anywhere below the root.
#[derive(Debug, Clone)]
pub struct AssetRoot {
    root: PathBuf,
}

pub struct Asset {
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Reads the file a request path maps to, looking in `pages/` before the
    /// root. `Ok(None)` covers missing files and paths escaping the root.
    pub async fn load(&self, request_path: &str) -> Result<Option<Asset>> {
        let Some(relative) = sanitize(request_path) else {
            return Ok(None);
        };

        for candidate in [self.root.join("pages").join(&relative), self.root.join(&relative)] {
            let is_file = fs::metadata(&candidate)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let body = fs::read(&candidate)
                .await
                .with_context(|| format!("Failed to read {}", candidate.display()))?;
            return Ok(Some(Asset {
                body,
                content_type: content_type(&candidate),
            }));
        }

        Ok(None)
    }
}

/// Relative path for a request, or `None` when it is empty or would leave
/// the asset root.
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!relative.as_os_str().is_empty()).then_some(relative)
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
