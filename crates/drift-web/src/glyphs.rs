//! DOM rendering of the floating field.
//!
//! Every element of the field gets a pair of nodes: an outer node carrying
//! the per-frame 3D transform and stacking order, and an inner node with the
//! glyph text, its one-time styling, and the per-frame opacity.

use crate::constants::LAYER_ID;
use crate::dom;
use drift_core::css::{camera_transform, glyph_transform, perspective_px, z_index};
use drift_core::{
    Camera, FloatField, FloatingElement, GLYPH_FONT_FAMILY, GLYPH_FONT_PX, GLYPH_STYLE_SCALE,
    OPACITY_TRANSITION_MS,
};
use web_sys as web;

struct GlyphNode {
    outer: web::HtmlElement,
    inner: web::HtmlElement,
}

pub struct GlyphLayer {
    document: web::Document,
    view: web::HtmlElement,
    camera_el: web::HtmlElement,
    nodes: Vec<Option<GlyphNode>>,
    viewport: (f32, f32),
}

impl GlyphLayer {
    /// Build the layer inside `parent`. Glyphs that fail to mount are left
    /// empty and retried by [`GlyphLayer::remount_missing`].
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        field: &FloatField,
    ) -> anyhow::Result<Self> {
        let view = dom::create_div(document)?;
        view.set_id(LAYER_ID);
        _ = view.style().set_css_text(
            "position:absolute;inset:0;overflow:hidden;pointer-events:none;z-index:10;",
        );
        let camera_el = dom::create_div(document)?;
        _ = camera_el
            .style()
            .set_css_text("position:absolute;left:0;top:0;transform-style:preserve-3d;pointer-events:none;");
        view.append_child(&camera_el)
            .map_err(|e| anyhow::anyhow!("append camera element: {:?}", e))?;
        parent
            .append_child(&view)
            .map_err(|e| anyhow::anyhow!("append glyph layer: {:?}", e))?;

        let mut layer = Self {
            document: document.clone(),
            view,
            camera_el,
            nodes: Vec::with_capacity(field.len()),
            viewport: (0.0, 0.0),
        };
        for element in field.elements() {
            let node = layer.create_node(element);
            layer.nodes.push(node);
        }
        let mounted = layer.nodes.iter().filter(|n| n.is_some()).count();
        log::info!("[glyphs] mounted {}/{} glyphs", mounted, field.len());
        Ok(layer)
    }

    fn create_node(&self, element: &FloatingElement) -> Option<GlyphNode> {
        match self.try_create_node(element) {
            Ok(node) => Some(node),
            Err(e) => {
                log::warn!("[glyphs] item {} not mounted: {:?}", element.id, e);
                None
            }
        }
    }

    fn try_create_node(&self, element: &FloatingElement) -> anyhow::Result<GlyphNode> {
        let outer = dom::create_div(&self.document)?;
        _ = outer.style().set_css_text(
            "position:absolute;left:0;top:0;transform-style:preserve-3d;pointer-events:none;",
        );
        let inner = dom::create_div(&self.document)?;
        let style = element.style;
        _ = inner.style().set_css_text(&format!(
            "color:{};font-family:{};font-size:{}px;font-weight:bold;white-space:nowrap;\
             user-select:none;transition:opacity {}ms;transform:scale({});\
             text-shadow:{};opacity:0;",
            style.color,
            GLYPH_FONT_FAMILY,
            GLYPH_FONT_PX,
            OPACITY_TRANSITION_MS,
            element.base_scale * GLYPH_STYLE_SCALE,
            style.text_shadow(),
        ));
        inner.set_text_content(Some(style.content));
        outer
            .append_child(&inner)
            .map_err(|e| anyhow::anyhow!("append glyph: {:?}", e))?;
        self.camera_el
            .append_child(&outer)
            .map_err(|e| anyhow::anyhow!("append glyph node: {:?}", e))?;
        Ok(GlyphNode { outer, inner })
    }

    #[inline]
    pub fn is_mounted(&self, index: usize) -> bool {
        matches!(self.nodes.get(index), Some(Some(_)))
    }

    /// Try again to mount glyphs that failed earlier.
    pub fn remount_missing(&mut self, field: &FloatField) {
        for (i, element) in field.elements().iter().enumerate() {
            if self.nodes.get(i).is_some_and(|n| n.is_none()) {
                let node = self.create_node(element);
                self.nodes[i] = node;
            }
        }
    }

    /// Match the camera aspect, perspective and camera transform to the
    /// current viewport.
    pub fn sync_camera(&mut self, camera: &mut Camera) {
        let (w, h) = dom::css_size(&self.view);
        if (w, h) != self.viewport {
            self.viewport = (w, h);
            camera.set_aspect(w, h);
            dom::set_style(
                &self.view,
                "perspective",
                &format!("{}px", perspective_px(camera, h)),
            );
            dom::set_style(&self.camera_el, "width", &format!("{w}px"));
            dom::set_style(&self.camera_el, "height", &format!("{h}px"));
            log::debug!("[glyphs] viewport {}x{}", w, h);
        }
        dom::set_style(
            &self.camera_el,
            "transform",
            &camera_transform(camera, w, h),
        );
    }

    /// Write the latest poses to the DOM. Only opacity, transform and stacking
    /// order change per frame.
    pub fn apply(&self, field: &FloatField, camera: &Camera) {
        for (node, pose) in self.nodes.iter().zip(field.poses()) {
            let Some(node) = node else {
                continue;
            };
            dom::set_style(&node.outer, "transform", &glyph_transform(pose));
            dom::set_style(
                &node.outer,
                "z-index",
                &z_index(camera, pose.distance).to_string(),
            );
            dom::set_style(&node.inner, "opacity", &pose.opacity.to_string());
        }
    }
}
