//! Text derived from resolved content: the narration read by the voiceover and the pin
//! description posted alongside the rendered video.

use crate::{brand::registry::BrandProfile, content::record::ResolvedContent};

/// Narration in reading order: hook, title, every point, CTA.
pub fn voiceover_script(content: &ResolvedContent) -> String {
    let c = &content.content;
    let mut script = format!("{} {}. ", c.hook, c.title);
    for point in &c.points {
        script.push_str(point);
        script.push_str(". ");
    }
    script.push_str(&c.cta);
    script
}

pub fn pin_description(brand: &BrandProfile, content: &ResolvedContent) -> String {
    let c = &content.content;
    format!(
        "{} - Watch with Sound!\n\n{} {}!\n\n{}\n\n{}",
        c.title,
        c.hook,
        c.points.join(". "),
        c.cta,
        brand.hashtags
    )
}

#[cfg(test)]
#[path = "../../tests/unit/content/script.rs"]
mod tests;
