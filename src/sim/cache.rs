//! Direct-mapped cache model: 32 sets, 32-byte lines, one way.

/// Cache shape in address bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    pub set_bits: u32,
    pub block_bits: u32,
    pub ways: usize,
}

impl CacheGeometry {
    /// 1 KiB, 32-byte lines, direct-mapped.
    pub const MODELED: CacheGeometry = CacheGeometry {
        set_bits: 5,
        block_bits: 5,
        ways: 1,
    };

    pub const fn sets(&self) -> usize {
        1 << self.set_bits
    }

    pub const fn line_bytes(&self) -> usize {
        1 << self.block_bits
    }

    pub const fn capacity(&self) -> usize {
        self.sets() * self.ways * self.line_bytes()
    }

    pub const fn set_index(&self, addr: usize) -> usize {
        (addr >> self.block_bits) & (self.sets() - 1)
    }

    pub const fn tag(&self, addr: usize) -> usize {
        addr >> (self.block_bits + self.set_bits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit,
    Miss,
    /// Miss that displaced a valid line.
    MissEvict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Loads and stores are treated alike (write-allocate): each touches one
/// line and may evict whatever else maps to its set.
#[derive(Debug, Clone)]
pub struct DirectMappedCache {
    geometry: CacheGeometry,
    tags: Vec<Option<usize>>,
    stats: CacheStats,
}

impl DirectMappedCache {
    pub fn new() -> Self {
        let geometry = CacheGeometry::MODELED;
        Self {
            geometry,
            tags: vec![None; geometry.sets()],
            stats: CacheStats::default(),
        }
    }

    pub fn geometry(&self) -> CacheGeometry {
        self.geometry
    }

    /// Touches the line holding `addr`.
    pub fn access(&mut self, addr: usize) -> AccessOutcome {
        let set = self.geometry.set_index(addr);
        let tag = self.geometry.tag(addr);

        match self.tags[set] {
            Some(resident) if resident == tag => {
                self.stats.hits += 1;
                AccessOutcome::Hit
            }
            previous => {
                self.tags[set] = Some(tag);
                self.stats.misses += 1;
                if previous.is_some() {
                    self.stats.evictions += 1;
                    AccessOutcome::MissEvict
                } else {
                    AccessOutcome::Miss
                }
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Empties every line and zeroes the counters.
    pub fn reset(&mut self) {
        self.tags.fill(None);
        self.stats = CacheStats::default();
    }
}

impl Default for DirectMappedCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modeled_geometry() {
        let g = CacheGeometry::MODELED;
        assert_eq!(g.sets(), 32);
        assert_eq!(g.line_bytes(), 32);
        assert_eq!(g.capacity(), 1024);
    }

    #[test]
    fn same_line_hits_after_first_touch() {
        let mut cache = DirectMappedCache::new();
        assert_eq!(cache.access(0), AccessOutcome::Miss);
        for addr in (4..32).step_by(4) {
            assert_eq!(cache.access(addr), AccessOutcome::Hit);
        }
        assert_eq!(cache.access(32), AccessOutcome::Miss);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 7,
                misses: 2,
                evictions: 0
            }
        );
    }

    #[test]
    fn addresses_one_capacity_apart_thrash() {
        let mut cache = DirectMappedCache::new();
        cache.access(0);
        for _ in 0..4 {
            assert_eq!(cache.access(1024), AccessOutcome::MissEvict);
            assert_eq!(cache.access(0), AccessOutcome::MissEvict);
        }
        assert_eq!(cache.stats().misses, 9);
        assert_eq!(cache.stats().evictions, 8);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut cache = DirectMappedCache::new();
        cache.access(64);
        cache.reset();
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(cache.access(64), AccessOutcome::Miss);
    }
}
