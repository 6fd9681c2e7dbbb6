//! Visual configuration: spark palettes, blending, and trail geometry.

use glam::Vec3;

/// Color sets that spawned sparks draw from.
///
/// Each particle picks one color uniformly at spawn and keeps it for life;
/// fading comes from the shrinking tail width and dot radius, not from
/// color interpolation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Palette {
    /// Fire - orange-red through gold to white (default).
    #[default]
    Fire,

    /// Ember - deep reds and oranges, no white core.
    Ember,

    /// Neon - vibrant pink, purple, and cyan.
    Neon,

    /// Ice - white through light blue to deep blue.
    Ice,

    /// A caller-supplied color set. Should be non-empty; an empty set
    /// renders white sparks.
    Custom(Vec<Vec3>),
}

const FIRE: [Vec3; 4] = [
    Vec3::new(1.0, 0.271, 0.0),  // orange-red
    Vec3::new(1.0, 0.549, 0.0),  // dark orange
    Vec3::new(1.0, 0.843, 0.0),  // gold
    Vec3::new(1.0, 1.0, 1.0),    // white
];

const EMBER: [Vec3; 4] = [
    Vec3::new(0.5, 0.0, 0.0),
    Vec3::new(0.8, 0.2, 0.0),
    Vec3::new(1.0, 0.3, 0.0),
    Vec3::new(1.0, 0.6, 0.1),
];

const NEON: [Vec3; 5] = [
    Vec3::new(1.0, 0.0, 0.5),
    Vec3::new(0.5, 0.0, 1.0),
    Vec3::new(0.0, 0.5, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.5, 1.0, 0.5),
];

const ICE: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.8, 0.9, 1.0),
    Vec3::new(0.4, 0.7, 1.0),
    Vec3::new(0.1, 0.4, 0.8),
];

impl Palette {
    /// The color stops particles draw from at spawn.
    pub fn colors(&self) -> &[Vec3] {
        match self {
            Palette::Fire => &FIRE,
            Palette::Ember => &EMBER,
            Palette::Neon => &NEON,
            Palette::Ice => &ICE,
            Palette::Custom(colors) => colors,
        }
    }
}

/// Blend mode for spark rendering.
///
/// Controls how spark colors combine with the background and each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending. Sparks occlude what is behind them.
    Alpha,

    /// Additive blending (default). Overlapping sparks brighten instead of
    /// occluding, which is what gives the trail its glow.
    #[default]
    Additive,

    /// Multiplicative blending. Darkens; useful for smoke-like trails.
    Multiply,
}

/// Configuration for how the trail is drawn.
///
/// Built through the closure passed to [`Trail::with_visuals`].
///
/// [`Trail::with_visuals`]: crate::Trail::with_visuals
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Blend mode for spark rendering.
    pub blend_mode: BlendMode,
    /// Background clear color (RGB, 0.0-1.0). Ignored in overlay mode,
    /// where the background is fully transparent.
    pub background_color: Vec3,
    /// Scalar applied to velocity to compute the rendered tail's opposite
    /// endpoint: the tail reaches from `position` back to
    /// `position - velocity * tail_scale`. Faster sparks draw longer tails.
    pub tail_scale: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Additive,
            background_color: Vec3::new(0.02, 0.02, 0.05),
            tail_scale: 4.0,
        }
    }
}

impl VisualConfig {
    /// Create a visual config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blend mode.
    pub fn blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    /// Set the background clear color.
    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background_color = color;
        self
    }

    /// Set the tail-length multiplier.
    pub fn tail_scale(&mut self, scale: f32) -> &mut Self {
        self.tail_scale = scale;
        self
    }
}
