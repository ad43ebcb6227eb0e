// DOM hooks and web-only render settings

pub const CANVAS_ID: &str = "app-canvas";
pub const LAYER_ID: &str = "glyph-layer";

// slate-900, shown if the backdrop pass has not drawn yet
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0086,
    g: 0.0086,
    b: 0.0232,
    a: 1.0,
};
