//! Decorative particle layout.
//!
//! Positions for the one-shot burst played when a widget unlocks or the
//! gate opens. This is static configuration consumed by the rendering
//! layer, not behavioral state: given the same seed the layout is
//! reproducible, which keeps the burst stable across redraws.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

/// Configuration for the particle burst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrnamentConfig {
    /// Number of particles in the burst
    pub count: usize,

    /// Maximum start delay in milliseconds, staggering the burst
    pub max_delay_ms: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for OrnamentConfig {
    fn default() -> Self {
        Self {
            count: 24,
            max_delay_ms: 600,
            seed: None,
        }
    }
}

/// One particle of the burst. Position is in the unit square; the renderer
/// scales it to its viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Hue angle in degrees, 0..360.
    pub hue: f32,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrnamentLayout {
    pub particles: Vec<Particle>,
}

impl OrnamentLayout {
    pub fn generate(config: &OrnamentConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);

        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                hue: rng.gen_range(0.0..360.0),
                delay_ms: if config.max_delay_ms == 0 {
                    0
                } else {
                    rng.gen_range(0..config.max_delay_ms)
                },
            })
            .collect();

        Self { particles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_seeds_reproduce_the_layout() {
        let config = OrnamentConfig {
            count: 16,
            max_delay_ms: 400,
            seed: Some(42),
        };
        let a = OrnamentLayout::generate(&config);
        let b = OrnamentLayout::generate(&config);
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn layout_respects_bounds() {
        let config = OrnamentConfig {
            count: 64,
            max_delay_ms: 500,
            seed: Some(7),
        };
        let layout = OrnamentLayout::generate(&config);
        assert_eq!(layout.particles.len(), 64);
        for p in &layout.particles {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert!((0.0..360.0).contains(&p.hue));
            assert!(p.delay_ms < 500);
        }
    }

    #[test]
    fn zero_delay_cap_is_allowed() {
        let config = OrnamentConfig {
            count: 4,
            max_delay_ms: 0,
            seed: Some(1),
        };
        let layout = OrnamentLayout::generate(&config);
        assert!(layout.particles.iter().all(|p| p.delay_ms == 0));
    }
}
