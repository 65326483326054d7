use std::path::{Path, PathBuf};

use crate::{
    content::record::ResolvedContent,
    foundation::error::{ReelError, ReelResult},
};

/// Normalize a relative asset path into a stable, forward-slash form.
///
/// Removes `.` segments and rejects absolute paths or parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> ReelResult<String> {
    let s = source.trim().replace('\\', "/");
    if s.is_empty() {
        return Err(ReelError::configuration("asset path must be non-empty"));
    }
    if s.starts_with('/') || s.as_bytes().get(1) == Some(&b':') {
        return Err(ReelError::configuration(format!(
            "asset path '{source}' must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ReelError::configuration(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::configuration(format!(
            "asset path '{source}' must contain a file name"
        )));
    }
    Ok(out.join("/"))
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// A content source after the filesystem check.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PreparedSource {
    /// File under the asset root. `size` is `(width, height)` for images.
    Local {
        source: String,
        norm_path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<(u32, u32)>,
    },
    /// Fetched by the renderer; not checked here.
    Remote { url: String },
}

impl PreparedSource {
    pub fn source(&self) -> &str {
        match self {
            Self::Local { source, .. } => source,
            Self::Remote { url } => url,
        }
    }
}

/// Every asset one composition references, checked up front so rendering never touches IO.
#[derive(Clone, Debug)]
pub struct PreparedAssets {
    root: PathBuf,
    images: Vec<PreparedSource>,
    voiceover: Option<PreparedSource>,
}

impl PreparedAssets {
    #[tracing::instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn prepare(content: &ResolvedContent, root: impl AsRef<Path>) -> ReelResult<Self> {
        let root = root.as_ref().to_path_buf();
        let images = content
            .images
            .iter()
            .map(|s| prepare_source(&root, s, true))
            .collect::<ReelResult<Vec<_>>>()?;
        let voiceover = content
            .voiceover
            .as_deref()
            .map(|s| prepare_source(&root, s, false))
            .transpose()?;
        tracing::debug!(
            images = images.len(),
            voiceover = voiceover.is_some(),
            "prepared assets"
        );
        Ok(Self {
            root,
            images,
            voiceover,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images(&self) -> &[PreparedSource] {
        &self.images
    }

    pub fn voiceover(&self) -> Option<&PreparedSource> {
        self.voiceover.as_ref()
    }

    /// Absolute-ish filesystem path for a local source.
    pub fn resolve(&self, source: &PreparedSource) -> Option<PathBuf> {
        match source {
            PreparedSource::Local { norm_path, .. } => Some(self.root.join(norm_path)),
            PreparedSource::Remote { .. } => None,
        }
    }
}

fn prepare_source(root: &Path, source: &str, probe_image: bool) -> ReelResult<PreparedSource> {
    if is_remote(source) {
        return Ok(PreparedSource::Remote {
            url: source.to_owned(),
        });
    }
    let norm_path = normalize_rel_path(source)?;
    let path = root.join(&norm_path);
    if !path.is_file() {
        return Err(ReelError::asset_missing(source));
    }
    let size = if probe_image {
        let dims = image::image_dimensions(&path)
            .map_err(|e| ReelError::configuration(format!("probe image '{source}': {e}")))?;
        Some(dims)
    } else {
        None
    };
    Ok(PreparedSource::Local {
        source: source.to_owned(),
        norm_path,
        size,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
