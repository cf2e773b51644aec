//! Decorative effects for the polished tier. Nothing here touches data.

use rand::Rng;

/// How often the particle spawner rolls.
pub const PARTICLE_INTERVAL_MS: u64 = 2_000;
/// Chance that a roll produces a particle.
pub const PARTICLE_PROBABILITY: f64 = 0.1;
pub const PARTICLE_MIN_DURATION_MS: u64 = 8_000;
pub const PARTICLE_MAX_DURATION_MS: u64 = 12_000;
/// Extra distance past the top edge so particles leave the screen.
pub const PARTICLE_OVERSHOOT_PX: f64 = 100.0;

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so cards reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HOVER_LIFT: &str = "translateY(-2px) scale(1.02)";
pub const HOVER_REST: &str = "translateY(0) scale(1)";

/// Transform for a hoverable button.
pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        HOVER_LIFT
    } else {
        HOVER_REST
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub left_px: f64,
    pub top_px: f64,
    pub rise_px: f64,
    pub duration_ms: u64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left:{:.0}px;top:{:.0}px;--rise:-{:.0}px;animation-duration:{}ms;",
            self.left_px, self.top_px, self.rise_px, self.duration_ms
        )
    }
}

/// Rolls for ambient particles on a fixed interval.
#[derive(Debug)]
pub struct ParticleSpawner<R> {
    rng: R,
    next_id: u64,
}

impl<R: Rng> ParticleSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// One interval tick. Returns a particle about one time in ten.
    pub fn tick(&mut self, viewport_width: f64, viewport_height: f64) -> Option<Particle> {
        if !self.rng.gen_bool(PARTICLE_PROBABILITY) {
            return None;
        }

        let width = viewport_width.max(1.0);
        let id = self.next_id;
        self.next_id += 1;

        Some(Particle {
            id,
            left_px: self.rng.gen_range(0.0..width),
            top_px: viewport_height,
            rise_px: viewport_height + PARTICLE_OVERSHOOT_PX,
            duration_ms: self
                .rng
                .gen_range(PARTICLE_MIN_DURATION_MS..PARTICLE_MAX_DURATION_MS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_within_bounds() {
        let mut spawner = ParticleSpawner::new(StdRng::seed_from_u64(7));
        let particles: Vec<_> = (0..2_000)
            .filter_map(|_| spawner.tick(1024.0, 768.0))
            .collect();

        assert!(!particles.is_empty());
        for p in &particles {
            assert!((0.0..1024.0).contains(&p.left_px));
            assert_eq!(p.top_px, 768.0);
            assert_eq!(p.rise_px, 868.0);
            assert!((PARTICLE_MIN_DURATION_MS..PARTICLE_MAX_DURATION_MS).contains(&p.duration_ms));
        }
    }

    #[test]
    fn spawn_rate_is_roughly_one_in_ten() {
        let mut spawner = ParticleSpawner::new(StdRng::seed_from_u64(42));
        let spawned = (0..10_000)
            .filter(|_| spawner.tick(800.0, 600.0).is_some())
            .count();
        assert!((800..1_200).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn particle_ids_are_unique() {
        let mut spawner = ParticleSpawner::new(StdRng::seed_from_u64(3));
        let ids: Vec<u64> = (0..500)
            .filter_map(|_| spawner.tick(100.0, 100.0))
            .map(|p| p.id)
            .collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn hover_toggles_between_lift_and_rest() {
        assert_eq!(hover_transform(true), HOVER_LIFT);
        assert_eq!(hover_transform(false), HOVER_REST);
    }
}
