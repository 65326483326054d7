use std::{fs::File, io::BufReader, path::Path};

use crate::{
    brand::registry::{BrandContent, BrandProfile, MAX_IMAGES},
    foundation::error::{ReelError, ReelResult},
};

/// Caller-supplied content for one video, typically a generated JSON record.
///
/// Every field is optional. A field that is absent, blank, or an empty list falls back to the
/// brand default in [`resolve_content`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentOverride {
    /// Brand the record was generated for. When present it must name the brand being rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Option<Vec<String>>,
    #[serde(default)]
    pub cta: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub voiceover: Option<String>,
}

impl ContentOverride {
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let record: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse content JSON: {e}")))?;
        record.validate()?;
        Ok(record)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!("open content JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ReelResult<()> {
        if let Some(images) = &self.images
            && images.len() > MAX_IMAGES
        {
            return Err(ReelError::configuration(format!(
                "content lists {} images; at most {MAX_IMAGES} are supported",
                images.len()
            )));
        }
        if let Some(points) = &self.points
            && let Some(i) = points.iter().position(|p| p.trim().is_empty())
        {
            return Err(ReelError::configuration(format!(
                "content point {i} must be non-empty"
            )));
        }
        Ok(())
    }
}

/// Content after merging an override onto a brand's defaults.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedContent {
    pub content: BrandContent,
    pub images: Vec<String>,
    pub voiceover: Option<String>,
}

fn pick_text(over: Option<&String>, default: &str) -> String {
    match over {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => default.to_owned(),
    }
}

fn pick_list(over: Option<&Vec<String>>, default: &[String]) -> Vec<String> {
    match over {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_vec(),
    }
}

/// Merge `over` onto `brand`. Precedence per field: non-empty override, then brand default.
pub fn resolve_content(
    brand: &BrandProfile,
    over: Option<&ContentOverride>,
) -> ReelResult<ResolvedContent> {
    let empty = ContentOverride::default();
    let over = over.unwrap_or(&empty);
    over.validate()?;
    if let Some(id) = over.brand.as_deref().map(str::trim)
        && !id.is_empty()
        && id != brand.id
    {
        return Err(ReelError::configuration(format!(
            "content record is for brand '{id}', not '{}'",
            brand.id
        )));
    }

    let defaults = &brand.content;
    let content = BrandContent {
        hook: pick_text(over.hook.as_ref(), &defaults.hook),
        title: pick_text(over.title.as_ref(), &defaults.title),
        points: pick_list(over.points.as_ref(), &defaults.points),
        cta: pick_text(over.cta.as_ref(), &defaults.cta),
    };
    content.validate()?;

    let images = pick_list(over.images.as_ref(), &brand.images);
    if images.is_empty() {
        return Err(ReelError::configuration(format!(
            "brand '{}' resolved to an empty image list",
            brand.id
        )));
    }

    let voiceover = match &over.voiceover {
        Some(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => brand.voiceover.clone(),
    };

    Ok(ResolvedContent {
        content,
        images,
        voiceover,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/content/record.rs"]
mod tests;
