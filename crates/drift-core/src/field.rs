use crate::animate::{advance, FrameTime, GlyphPose};
use crate::camera::Camera;
use crate::config::{ConfigError, FieldConfig};
use crate::items::{generate_items, FloatingElement};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The whole floating field: elements and their latest poses in parallel
/// buffers, plus the random source used for layout and wrap resampling.
pub struct FloatField {
    config: FieldConfig,
    elements: Vec<FloatingElement>,
    poses: Vec<GlyphPose>,
    rng: StdRng,
}

impl FloatField {
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let elements = generate_items(&config, &mut rng)?;
        let poses = elements.iter().map(|e| GlyphPose::at(e.position)).collect();
        Ok(Self {
            config,
            elements,
            poses,
            rng,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[FloatingElement] {
        &self.elements
    }

    pub fn poses(&self) -> &[GlyphPose] {
        &self.poses
    }

    /// Advance every element whose render node is mounted, all against the
    /// same clock and camera snapshot. Unmounted elements keep their state and
    /// last pose until a later frame. Returns how many were advanced.
    pub fn step(
        &mut self,
        time: FrameTime,
        camera: &Camera,
        is_mounted: impl Fn(usize) -> bool,
    ) -> usize {
        let mut advanced = 0;
        for (i, (element, pose)) in self.elements.iter_mut().zip(&mut self.poses).enumerate() {
            if !is_mounted(i) {
                continue;
            }
            *pose = advance(element, &self.config, time, camera, &mut self.rng);
            advanced += 1;
        }
        advanced
    }
}
