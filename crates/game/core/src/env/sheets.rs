use crate::animation::FrameGrid;
use crate::world::AppearanceId;

/// Read-only lookup from an appearance to its sliced frame grid.
///
/// Implementations own the sheet metadata (and, outside this core, the
/// decoded pixels). Unknown appearances return `None`; the caller decides
/// whether that is an error.
pub trait SheetOracle: Send + Sync {
    fn frames(&self, appearance: AppearanceId) -> Option<FrameGrid>;
}
