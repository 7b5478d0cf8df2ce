use delve_geom::Vec3;
use delve_physics::overlaps_block;
use delve_world::BlockPos;

/// Exit to the next level, occupying one air cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hatch {
    pub cell: BlockPos,
}

impl Hatch {
    pub fn new(cell: BlockPos) -> Self {
        Self { cell }
    }

    pub fn at(pos: Vec3) -> Self {
        Self::new(BlockPos::containing(pos))
    }

    /// Where the renderer places the hatch model.
    pub fn center(&self) -> Vec3 {
        self.cell.center()
    }

    /// True once a box of `size` centered at `pos` touches the hatch cell.
    pub fn reached_by(&self, pos: Vec3, size: Vec3) -> bool {
        overlaps_block(pos, size, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reached_only_when_overlapping() {
        let hatch = Hatch::at(Vec3::new(3.5, 2.5, 7.5));
        assert_eq!(hatch.cell, BlockPos::new(3, 2, 7));
        let size = Vec3::splat(0.8);
        assert!(hatch.reached_by(Vec3::new(3.5, 2.5, 7.5), size));
        assert!(hatch.reached_by(Vec3::new(4.3, 2.5, 7.5), size));
        assert!(!hatch.reached_by(Vec3::new(4.4, 2.5, 7.5), size));
    }
}
