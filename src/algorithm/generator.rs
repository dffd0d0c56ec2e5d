use crate::{
    algorithm::cache::TransformCache,
    algorithm::selection::{GenerationConfig, Role, select_role},
    io::error::Result,
    math::Point,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chaos-game point sequence over the four fern transforms
///
/// Starts at the origin and, for each emitted point, draws `u` in `[0, 1)`,
/// selects a transform by cumulative threshold and applies it to the current
/// point. The fourth transform is applied to the negated current point.
/// Finite, lazy, and not restartable.
pub struct ChaosGame<R> {
    config: GenerationConfig,
    rng: R,
    current: Point,
    remaining: usize,
    cache: Option<TransformCache>,
}

impl<R: Rng> ChaosGame<R> {
    /// Create a generator emitting exactly `point_count` points
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration contains non-finite map entries
    /// or NaN thresholds. Nothing is generated in that case.
    pub fn new(point_count: usize, config: &GenerationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: *config,
            rng,
            current: Point::ORIGIN,
            remaining: point_count,
            cache: None,
        })
    }

    /// Route transform applications through a memoization cache
    ///
    /// Output is identical with or without the cache.
    #[must_use]
    pub fn with_cache(mut self, cache: TransformCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The cache in use, if any
    pub const fn cache(&self) -> Option<&TransformCache> {
        self.cache.as_ref()
    }

    /// Point the next step will transform
    pub const fn current(&self) -> Point {
        self.current
    }

    /// Advance one step, reporting which transform produced the point
    pub fn next_step(&mut self) -> Option<(Role, Point)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let role = select_role(self.rng.random::<f64>(), &self.config);
        let input = match role {
            Role::Fourth => -self.current,
            Role::First | Role::Second | Role::Third => self.current,
        };

        let spec = self.config.spec(role);
        let next = match self.cache.as_mut() {
            Some(cache) => cache.apply(spec, input),
            None => spec.map.apply(input),
        };

        self.current = next;
        Some((role, next))
    }
}

impl<R: Rng> Iterator for ChaosGame<R> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.next_step().map(|(_, point)| point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for ChaosGame<R> {}

/// Generate `point_count` points using the supplied random source
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate<R: Rng>(
    point_count: usize,
    config: &GenerationConfig,
    rng: R,
) -> Result<ChaosGame<R>> {
    ChaosGame::new(point_count, config, rng)
}

/// Generate `point_count` points from a deterministic seeded source
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate_seeded(
    point_count: usize,
    config: &GenerationConfig,
    seed: u64,
) -> Result<ChaosGame<StdRng>> {
    ChaosGame::new(point_count, config, StdRng::seed_from_u64(seed))
}
