//! Billboard geometry for transparent decorations: two diagonal planes, each
//! emitted with both windings so it is visible from either side.

pub const CROSS_QUADS: usize = 4;

pub const CROSS_VERTICES: [[[f32; 3]; 4]; CROSS_QUADS] = [
    [[0., 0., 0.], [0., 1., 0.], [1., 1., 1.], [1., 0., 1.]],
    [[0., 0., 1.], [0., 1., 1.], [1., 1., 0.], [1., 0., 0.]],
    [[0., 0., 1.], [0., 1., 1.], [1., 1., 0.], [1., 0., 0.]],
    [[0., 0., 0.], [0., 1., 0.], [1., 1., 1.], [1., 0., 1.]],
];

pub const CROSS_UVS: [[[f32; 2]; 4]; CROSS_QUADS] = [
    [[1., 1.], [1., 0.], [0., 0.], [0., 1.]],
    [[1., 1.], [1., 0.], [0., 0.], [0., 1.]],
    [[0., 1.], [0., 0.], [1., 0.], [1., 1.]],
    [[0., 1.], [0., 0.], [1., 0.], [1., 1.]],
];

pub const CROSS_INDICES: [[u32; 6]; CROSS_QUADS] = [
    [0, 1, 2, 0, 2, 3],
    [0, 1, 2, 0, 2, 3],
    [0, 2, 1, 0, 3, 2],
    [0, 2, 1, 0, 3, 2],
];

pub const CROSS_SHADES: [f32; CROSS_QUADS] = [1.0; CROSS_QUADS];
