use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    Text,
    Icon,
}

/// Displayed content bound to its presentation. Content and colors are
/// always chosen together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphStyle {
    pub content: &'static str,
    pub kind: GlyphKind,
    pub color: &'static str,
    pub glow: &'static str,
}

pub static GLYPH_POOL: [GlyphStyle; 6] = [
    GlyphStyle {
        content: "小洛熙",
        kind: GlyphKind::Text,
        color: "#f9a8d4",
        glow: "rgba(249, 168, 212, 0.8)",
    },
    GlyphStyle {
        content: "小圆头",
        kind: GlyphKind::Text,
        color: "#67e8f9",
        glow: "rgba(103, 232, 249, 0.8)",
    },
    GlyphStyle {
        content: "要真相",
        kind: GlyphKind::Text,
        color: "#fde68a",
        glow: "rgba(253, 230, 138, 0.8)",
    },
    GlyphStyle {
        content: "❤",
        kind: GlyphKind::Icon,
        color: "#f87171",
        glow: "rgba(248, 113, 113, 0.8)",
    },
    GlyphStyle {
        content: "✨",
        kind: GlyphKind::Icon,
        color: "#fef08a",
        glow: "rgba(254, 240, 138, 0.8)",
    },
    GlyphStyle {
        content: "💕",
        kind: GlyphKind::Icon,
        color: "#f472b6",
        glow: "rgba(244, 114, 182, 0.8)",
    },
];

/// Pool entries of one category, in pool order.
pub fn styles_of(kind: GlyphKind) -> SmallVec<[&'static GlyphStyle; 4]> {
    GLYPH_POOL.iter().filter(|s| s.kind == kind).collect()
}

impl GlyphStyle {
    /// CSS `text-shadow` producing the neon glow.
    pub fn text_shadow(&self) -> String {
        let g = self.glow;
        format!("0 0 10px {g}, 0 0 20px {g}, 0 0 40px {g}")
    }
}
