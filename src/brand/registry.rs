use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    brand::color::Rgba8,
    foundation::error::{ReelError, ReelResult},
};

/// Maximum number of slideshow images a brand (or a content record) may carry.
pub const MAX_IMAGES: usize = 4;

/// Three-color visual theme of a brand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrandTheme {
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub accent: Rgba8,
}

/// Narrative text of one video.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrandContent {
    pub hook: String,
    pub title: String,
    pub points: Vec<String>,
    pub cta: String,
}

impl BrandContent {
    pub fn validate(&self) -> ReelResult<()> {
        for (field, value) in [
            ("hook", &self.hook),
            ("title", &self.title),
            ("cta", &self.cta),
        ] {
            if value.trim().is_empty() {
                return Err(ReelError::configuration(format!(
                    "content {field} must be non-empty"
                )));
            }
        }
        if let Some(i) = self.points.iter().position(|p| p.trim().is_empty()) {
            return Err(ReelError::configuration(format!(
                "content point {i} must be non-empty"
            )));
        }
        Ok(())
    }
}

/// Everything the composition needs to know about one brand.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BrandProfile {
    pub id: String,
    pub display_name: String,
    pub theme: BrandTheme,
    /// Slideshow images, relative to the asset root or `http(s)://` URLs.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover: Option<String>,
    pub content: BrandContent,
    #[serde(default)]
    pub hashtags: String,
}

impl BrandProfile {
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::configuration("brand id must be non-empty"));
        }
        if self.images.is_empty() || self.images.len() > MAX_IMAGES {
            return Err(ReelError::configuration(format!(
                "brand '{}' must list 1..={MAX_IMAGES} images (got {})",
                self.id,
                self.images.len()
            )));
        }
        self.content
            .validate()
            .map_err(|e| ReelError::configuration(format!("brand '{}': {e}", self.id)))
    }
}

/// Immutable brand table, built once and passed by reference to every consumer.
#[derive(Clone, Debug, Default)]
pub struct BrandRegistry {
    brands: BTreeMap<String, BrandProfile>,
}

impl BrandRegistry {
    /// Build a registry from profiles, validating each and rejecting duplicate ids.
    pub fn new(profiles: impl IntoIterator<Item = BrandProfile>) -> ReelResult<Self> {
        let mut brands = BTreeMap::new();
        for profile in profiles {
            profile.validate()?;
            let id = profile.id.clone();
            if brands.insert(id.clone(), profile).is_some() {
                return Err(ReelError::configuration(format!(
                    "duplicate brand id '{id}'"
                )));
            }
        }
        Ok(Self { brands })
    }

    /// The three brands the video pipeline ships with.
    pub fn builtin() -> Self {
        let brands = builtin_profiles()
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { brands }
    }

    /// Parse a JSON array of [`BrandProfile`] objects.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let profiles: Vec<BrandProfile> = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse brand registry JSON: {e}")))?;
        let registry = Self::new(profiles)?;
        tracing::debug!(brands = registry.len(), "loaded brand registry");
        Ok(registry)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!("open brand registry '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Look up a brand. Unknown ids are an error; no default brand is substituted.
    pub fn get(&self, id: &str) -> ReelResult<&BrandProfile> {
        self.brands
            .get(id)
            .ok_or_else(|| ReelError::unknown_brand(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandProfile> {
        self.brands.values()
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

fn hex(s: &str) -> Rgba8 {
    // Only called on the literals below.
    Rgba8::parse_hex(s).unwrap_or(Rgba8::BLACK)
}

fn slides(dir: &str) -> Vec<String> {
    (1..=MAX_IMAGES)
        .map(|i| format!("assets/images/{dir}/slide{i}.jpg"))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn builtin_profiles() -> Vec<BrandProfile> {
    vec![
        BrandProfile {
            id: "daily_deal_darling".to_owned(),
            display_name: "DailyDealDarling".to_owned(),
            theme: BrandTheme {
                primary: hex("#E54D3E"),
                secondary: hex("#FF6B5B"),
                accent: hex("#FFD93D"),
            },
            images: slides("daily-deal-darling"),
            fallback_image: Some("assets/images/daily-deal-darling-bg.jpg".to_owned()),
            voiceover: Some("assets/audio/daily-deal-darling-voice.mp3".to_owned()),
            content: BrandContent {
                hook: "Every woman needs this...".to_owned(),
                title: "Life-Changing Beauty Find!".to_owned(),
                points: strings(&[
                    "Makes your skin glow",
                    "Under $30 on sale now",
                    "TikTok made me buy it",
                ]),
                cta: "Link in Bio!".to_owned(),
            },
            hashtags: "#amazonfinds #kitchengadgets #morningroutine #deals #dailydealdarling"
                .to_owned(),
        },
        BrandProfile {
            id: "fitnessmadeasy".to_owned(),
            display_name: "FitOver35".to_owned(),
            theme: BrandTheme {
                primary: hex("#1DB954"),
                secondary: hex("#1ED760"),
                accent: hex("#4ECDC4"),
            },
            images: slides("fitnessmadeasy"),
            fallback_image: Some("assets/images/fitness-made-easy-bg.jpg".to_owned()),
            voiceover: Some("assets/audio/fitness-made-easy-voice.mp3".to_owned()),
            content: BrandContent {
                hook: "Over 35? Try this...".to_owned(),
                title: "Boost Your Metabolism!".to_owned(),
                points: strings(&[
                    "Works in just 10 minutes",
                    "No gym required",
                    "Feel stronger every day",
                ]),
                cta: "Save for Later!".to_owned(),
            },
            hashtags: "#fitness #workout #abs #homeworkout #fitover35".to_owned(),
        },
        BrandProfile {
            id: "menopause_planner".to_owned(),
            display_name: "MenopausePlanner".to_owned(),
            theme: BrandTheme {
                primary: hex("#9B59B6"),
                secondary: hex("#A855F7"),
                accent: hex("#F472B6"),
            },
            images: slides("menopause-planner"),
            fallback_image: Some("assets/images/menopause-planner-bg.jpg".to_owned()),
            voiceover: Some("assets/audio/menopause-planner-voice.mp3".to_owned()),
            content: BrandContent {
                hook: "Struggling with menopause?".to_owned(),
                title: "Sleep Better Tonight!".to_owned(),
                points: strings(&[
                    "Natural remedies that work",
                    "No more night sweats",
                    "Wake up refreshed",
                ]),
                cta: "Get the Guide!".to_owned(),
            },
            hashtags: "#menopause #wellness #hotflashes #womenshealth #naturalremedy".to_owned(),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/brand/registry.rs"]
mod tests;
