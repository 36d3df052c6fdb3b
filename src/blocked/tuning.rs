//! Shape → tuning dispatch table.

use tracing::debug;

/// How a tile's values travel from A to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staging {
    /// Copy each element straight across.
    Direct,
    /// Read a full cache line of A before writing any of it to B.
    RowBuffered,
    /// 4×4 quadrant shuffle through B for 8×8 tiles. Partial tiles fall
    /// back to `RowBuffered`.
    QuadrantSwap,
}

/// Tile side and staging for one matrix shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    pub tile: usize,
    pub staging: Staging,
}

impl Tuning {
    pub const fn new(tile: usize, staging: Staging) -> Self {
        Self { tile, staging }
    }
}

/// Used for every shape without a table entry. Wider than the tuned
/// tiles because nothing is known about which rows collide.
pub const FALLBACK_TUNING: Tuning = Tuning::new(16, Staging::Direct);

// Keyed by (M, N): M columns in A, N rows in A.
const TUNED_SHAPES: &[((usize, usize), Tuning)] = &[
    // One tile row is one 32-byte line. A and B rows at the same offset
    // share a set, so reads must finish before writes start.
    ((32, 32), Tuning::new(8, Staging::RowBuffered)),
    // Rows four apart alias (256-byte rows, 1 KiB cache), which wrecks a
    // plain 8×8 tile.
    ((64, 64), Tuning::new(8, Staging::QuadrantSwap)),
];

/// Looks up the tuning for an M×N transpose.
pub fn tuning_for(m: usize, n: usize) -> Tuning {
    let tuning = TUNED_SHAPES
        .iter()
        .find(|(shape, _)| *shape == (m, n))
        .map(|&(_, tuning)| tuning)
        .unwrap_or(FALLBACK_TUNING);
    debug!(m, n, tile = tuning.tile, staging = ?tuning.staging, "blocked tuning");
    tuning
}
