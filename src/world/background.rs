//! Scrolling background made of one window-sized tile repeated 2x2

use crate::rasterizer::IVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Background {
    /// World position of the reference tile
    pub anchor: IVec2,
}

impl Background {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the anchor by whole tiles so that its screen offset
    /// (`anchor - transform`) lands in `[0, tile)` on both axes.
    ///
    /// Works for any transform, including jumps of several tiles in one frame.
    pub fn wrap(&mut self, transform: IVec2, tile: IVec2) {
        let offset = self.anchor - transform;
        let wrapped = IVec2::new(offset.x.rem_euclid(tile.x), offset.y.rem_euclid(tile.y));
        self.anchor = transform + wrapped;
    }

    /// Screen-space offset of the anchor tile for the given camera transform
    pub fn screen_offset(&self, transform: IVec2) -> IVec2 {
        self.anchor - transform
    }
}

/// Top-left corners of the four tiles that cover the window, given the
/// anchor's screen offset in `[0, tile)`
pub fn tile_origins(offset: IVec2, tile: IVec2) -> [IVec2; 4] {
    [
        offset,
        IVec2::new(offset.x - tile.x, offset.y),
        IVec2::new(offset.x, offset.y - tile.y),
        IVec2::new(offset.x - tile.x, offset.y - tile.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: IVec2 = IVec2::new(960, 720);

    fn covers(origins: &[IVec2; 4], p: IVec2) -> bool {
        origins
            .iter()
            .any(|o| p.x >= o.x && p.x < o.x + TILE.x && p.y >= o.y && p.y < o.y + TILE.y)
    }

    #[test]
    fn test_offset_in_range_for_any_transform() {
        let mut bg = Background::new();
        for tx in (-5000..5000).step_by(337) {
            for ty in (-4000..4000).step_by(251) {
                let t = IVec2::new(tx, ty);
                bg.wrap(t, TILE);
                let off = bg.screen_offset(t);
                assert!(off.x >= 0 && off.x < TILE.x, "x offset {} for {:?}", off.x, t);
                assert!(off.y >= 0 && off.y < TILE.y, "y offset {} for {:?}", off.y, t);
            }
        }
    }

    #[test]
    fn test_wrap_moves_by_whole_tiles() {
        let mut bg = Background::new();
        let before = bg.anchor;
        bg.wrap(IVec2::new(2500, -1700), TILE);
        let d = bg.anchor - before;
        assert_eq!(d.x % TILE.x, 0);
        assert_eq!(d.y % TILE.y, 0);
    }

    #[test]
    fn test_wrap_is_stable() {
        let mut bg = Background::new();
        let t = IVec2::new(-123, 456);
        bg.wrap(t, TILE);
        let once = bg.anchor;
        bg.wrap(t, TILE);
        assert_eq!(bg.anchor, once);
    }

    #[test]
    fn test_tiles_cover_window() {
        for off in [IVec2::ZERO, IVec2::new(1, 1), IVec2::new(959, 719), IVec2::new(480, 10)] {
            let origins = tile_origins(off, TILE);
            for corner in [
                IVec2::new(0, 0),
                IVec2::new(TILE.x - 1, 0),
                IVec2::new(0, TILE.y - 1),
                IVec2::new(TILE.x - 1, TILE.y - 1),
                IVec2::new(TILE.x / 2, TILE.y / 2),
            ] {
                assert!(covers(&origins, corner), "{:?} not covered with offset {:?}", corner, off);
            }
        }
    }
}
