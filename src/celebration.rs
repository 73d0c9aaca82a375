use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

const CONFETTI: [&str; 10] = ["🎉", "⭐", "🌟", "✨", "💫", "🎊", "🎈", "🎀", "💖", "🌈"];
const PARTICLE_COUNT: usize = 16;

/// One bit of confetti bursting out from where it spawned
#[derive(Debug, Clone)]
pub struct CelebrationParticle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: &'static str,
    /// Seconds before the particle shows up
    pub delay: f64,
}

impl CelebrationParticle {
    fn new<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-2.0..2.0),
            vel_y: rng.gen_range(-3.0..-0.5),
            symbol: CONFETTI.choose(rng).copied().unwrap_or("🎉"),
            delay: rng.gen_range(0.0..0.3),
        }
    }

    fn update(&mut self, dt: f64) {
        if self.delay > 0.0 {
            self.delay -= dt;
            return;
        }
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += 6.0 * dt;
    }

    pub fn is_visible(&self) -> bool {
        self.delay <= 0.0
    }
}

/// Confetti burst shown after a correct answer or a found pair
#[derive(Debug)]
pub struct CelebrationAnimation {
    pub particles: Vec<CelebrationParticle>,
    started: Option<Instant>,
    duration: Duration,
    area: (f64, f64),
}

impl CelebrationAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            particles: Vec::new(),
            started: None,
            duration,
            area: (80.0, 24.0),
        }
    }

    pub fn start(&mut self, now: Instant, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        self.area = (width as f64, height as f64);
        self.started = Some(now);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let x = rng.gen_range(0.0..self.area.0.max(1.0));
                let y = rng.gen_range(0.0..self.area.1.max(1.0));
                CelebrationParticle::new(x, y, &mut rng)
            })
            .collect();
    }

    pub fn stop(&mut self) {
        self.started = None;
        self.particles.clear();
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// Advances one frame, ending the burst once its time is up
    pub fn update(&mut self, now: Instant) {
        let Some(started) = self.started else {
            return;
        };
        if now.saturating_duration_since(started) >= self.duration {
            self.stop();
            return;
        }

        let dt = 0.1;
        let (width, height) = self.area;
        self.particles.retain_mut(|p| {
            p.update(dt);
            let buffer = 3.0;
            p.y <= height + buffer && p.x >= -buffer && p.x <= width + buffer
        });
    }
}

impl Default for CelebrationAnimation {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_falls_after_delay() {
        let mut rng = rand::thread_rng();
        let mut particle = CelebrationParticle::new(10.0, 10.0, &mut rng);
        particle.delay = 0.0;
        let initial_vel_y = particle.vel_y;

        particle.update(0.1);

        assert!(particle.vel_y > initial_vel_y);
        assert!(particle.is_visible());
    }

    #[test]
    fn test_delayed_particle_holds_still() {
        let mut rng = rand::thread_rng();
        let mut particle = CelebrationParticle::new(10.0, 10.0, &mut rng);
        particle.delay = 0.25;

        particle.update(0.1);

        assert_eq!((particle.x, particle.y), (10.0, 10.0));
        assert!(!particle.is_visible());
    }

    #[test]
    fn test_celebration_runs_for_its_duration() {
        let mut celebration = CelebrationAnimation::new(Duration::from_millis(1500));
        assert!(!celebration.is_active());

        let t0 = Instant::now();
        celebration.start(t0, 80, 24);
        assert!(celebration.is_active());
        assert_eq!(celebration.particles.len(), PARTICLE_COUNT);

        celebration.update(t0 + Duration::from_millis(1000));
        assert!(celebration.is_active());

        celebration.update(t0 + Duration::from_millis(1500));
        assert!(!celebration.is_active());
        assert!(celebration.particles.is_empty());
    }

    #[test]
    fn test_particles_removed_when_off_screen() {
        let mut celebration = CelebrationAnimation::new(Duration::from_secs(10));
        let t0 = Instant::now();
        celebration.start(t0, 20, 10);
        let mut rng = rand::thread_rng();
        celebration
            .particles
            .push(CelebrationParticle::new(100.0, 100.0, &mut rng));

        celebration.update(t0);

        assert!(celebration
            .particles
            .iter()
            .all(|p| p.x <= 23.0 && p.y <= 13.0 && p.x >= -3.0));
    }

    #[test]
    fn test_symbols_come_from_confetti() {
        let mut celebration = CelebrationAnimation::default();
        celebration.start(Instant::now(), 40, 20);
        assert!(celebration
            .particles
            .iter()
            .all(|p| CONFETTI.contains(&p.symbol)));
    }
}
