use delve_geom::Vec3;

/// Cube face, in the order the shape tables are laid out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// -Z
    Forward = 0,
    /// +Z
    Backward = 1,
    /// +X
    Right = 2,
    /// -X
    Left = 3,
    /// +Y
    Up = 4,
    /// -Y
    Down = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Forward,
        Face::Backward,
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Forward => (0, 0, -1),
            Face::Backward => (0, 0, 1),
            Face::Right => (1, 0, 0),
            Face::Left => (-1, 0, 0),
            Face::Up => (0, 1, 0),
            Face::Down => (0, -1, 0),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Forward => Face::Backward,
            Face::Backward => Face::Forward,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Corner offsets of this face's quad within the unit cell.
    #[inline]
    pub fn vertices(self) -> &'static [[f32; 3]; 4] {
        &CUBE_VERTICES[self.index()]
    }

    #[inline]
    pub fn uvs(self) -> &'static [[f32; 2]; 4] {
        &CUBE_UVS[self.index()]
    }

    #[inline]
    pub fn indices(self) -> &'static [u32; 6] {
        &CUBE_INDICES[self.index()]
    }

    /// Directional base shade baked into vertex colors.
    #[inline]
    pub fn base_shade(self) -> f32 {
        CUBE_SHADES[self.index()]
    }
}

const CUBE_VERTICES: [[[f32; 3]; 4]; 6] = [
    [[0., 0., 0.], [0., 1., 0.], [1., 1., 0.], [1., 0., 0.]],
    [[0., 0., 1.], [0., 1., 1.], [1., 1., 1.], [1., 0., 1.]],
    [[1., 0., 0.], [1., 0., 1.], [1., 1., 1.], [1., 1., 0.]],
    [[0., 0., 0.], [0., 0., 1.], [0., 1., 1.], [0., 1., 0.]],
    [[0., 1., 0.], [0., 1., 1.], [1., 1., 1.], [1., 1., 0.]],
    [[0., 0., 0.], [0., 0., 1.], [1., 0., 1.], [1., 0., 0.]],
];

const CUBE_UVS: [[[f32; 2]; 4]; 6] = [
    [[1., 1.], [1., 0.], [0., 0.], [0., 1.]],
    [[0., 1.], [0., 0.], [1., 0.], [1., 1.]],
    [[1., 1.], [0., 1.], [0., 0.], [1., 0.]],
    [[0., 1.], [1., 1.], [1., 0.], [0., 0.]],
    [[0., 1.], [0., 0.], [1., 0.], [1., 1.]],
    [[0., 1.], [0., 0.], [1., 0.], [1., 1.]],
];

// Front-facing and back-facing winding differ per direction so every normal points outward.
const CUBE_INDICES: [[u32; 6]; 6] = [
    [0, 1, 2, 0, 2, 3],
    [0, 2, 1, 0, 3, 2],
    [0, 2, 1, 0, 3, 2],
    [0, 1, 2, 0, 2, 3],
    [0, 1, 2, 0, 2, 3],
    [0, 2, 1, 0, 3, 2],
];

const CUBE_SHADES: [f32; 6] = [0.9, 0.6, 0.8, 0.7, 1.0, 0.5];
