//! Initial layout of the floating field.

use crate::config::{ConfigError, FieldConfig};
use crate::constants::PHASE_OFFSET_MAX;
use crate::palette::{styles_of, GlyphKind, GlyphStyle};
use glam::Vec3;
use rand::Rng;

/// One floating glyph. Everything except `position` is fixed at creation.
#[derive(Clone, Debug)]
pub struct FloatingElement {
    pub id: usize,
    pub style: &'static GlyphStyle,
    pub position: Vec3,
    pub base_scale: f32,
    pub speed: f32,
    pub phase_offset: f32,
}

impl FloatingElement {
    #[inline]
    pub fn content(&self) -> &'static str {
        self.style.content
    }

    #[inline]
    pub fn kind(&self) -> GlyphKind {
        self.style.kind
    }
}

impl FieldConfig {
    pub fn scale_for(&self, kind: GlyphKind) -> f32 {
        match kind {
            GlyphKind::Text => self.text_scale,
            GlyphKind::Icon => self.icon_scale,
        }
    }
}

#[inline]
pub(crate) fn sample(rng: &mut impl Rng, [min, max]: [f32; 2]) -> f32 {
    rng.gen_range(min..max)
}

/// Build `config.item_count` independent elements from `rng`. The config is
/// validated first since sampling panics on empty ranges.
pub fn generate_items(
    config: &FieldConfig,
    rng: &mut impl Rng,
) -> Result<Vec<FloatingElement>, ConfigError> {
    config.validate()?;
    let text_styles = styles_of(GlyphKind::Text);
    let icon_styles = styles_of(GlyphKind::Icon);

    let items: Vec<FloatingElement> = (0..config.item_count)
        .map(|id| {
            let kind = if rng.gen_bool(config.text_probability) {
                GlyphKind::Text
            } else {
                GlyphKind::Icon
            };
            let pool = match kind {
                GlyphKind::Text => &text_styles,
                GlyphKind::Icon => &icon_styles,
            };
            let style = pool[rng.gen_range(0..pool.len())];
            let position = Vec3::new(
                sample(rng, config.x_range),
                sample(rng, config.spawn_y_range),
                sample(rng, config.z_range),
            );
            FloatingElement {
                id,
                style,
                position,
                base_scale: config.scale_for(kind),
                speed: sample(rng, config.speed_range),
                phase_offset: rng.gen_range(0.0..PHASE_OFFSET_MAX),
            }
        })
        .collect();

    let text = items.iter().filter(|e| e.kind() == GlyphKind::Text).count();
    log::info!(
        "[items] generated {} (text={} icon={})",
        items.len(),
        text,
        items.len() - text
    );
    Ok(items)
}
