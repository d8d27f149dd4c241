//! Bi-pyramid: an equilateral triangle in the XY plane capped by one apex on
//! each side of it along Z.

const A: [f32; 3] = [0.0, 1.0, 0.0];
const B: [f32; 3] = [-0.866, -0.5, 0.0];
const C: [f32; 3] = [0.866, -0.5, 0.0];

/// Apex on +Z.
const N: [f32; 3] = [0.0, 0.0, 2.0];
/// Apex on -Z.
const S: [f32; 3] = [0.0, 0.0, -2.0];

pub const VERTEX_COUNT: usize = 18;

pub const POSITIONS: [[f32; 3]; VERTEX_COUNT] = [
    A, B, N,
    B, C, N,
    C, A, N,
    A, B, S,
    B, C, S,
    C, A, S,
];

pub const COLORS: [[f32; 3]; VERTEX_COUNT] = [
    [0.1, 0.2, 0.03], [0.0, 0.5, 0.06], [0.4, 0.8, 0.09],
    [0.1, 0.2, 0.03], [0.0, 0.5, 0.06], [0.5, 0.8, 0.09],
    [0.1, 0.2, 0.03], [0.1, 0.0, 0.06], [0.6, 0.8, 0.09],
    [0.1, 0.2, 0.03], [0.9, 0.5, 0.0],  [0.7, 0.8, 0.09],
    [0.1, 0.2, 0.03], [0.1, 0.5, 0.06], [0.8, 0.0, 0.09],
    [0.1, 0.2, 0.0],  [0.4, 0.5, 0.06], [0.9, 0.8, 0.09],
];

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::render::MeshData;

    #[test]
    fn six_triangles_with_one_color_each_vertex() {
        assert_eq!(POSITIONS.len() % 3, 0);
        assert_eq!(POSITIONS.len() / 3, 6);
        let mesh = MeshData::new(&POSITIONS).with_colors(&COLORS);
        assert_eq!(mesh.validate(), Ok(18));
    }

    #[test]
    fn halves_mirror_across_the_base_plane() {
        let (top, bottom) = POSITIONS.split_at(9);
        for (t, b) in top.iter().zip(bottom) {
            assert_eq!(t[0], b[0]);
            assert_eq!(t[1], b[1]);
            assert_eq!(t[2], -b[2]);
        }
    }

    #[test]
    fn every_triangle_touches_one_apex() {
        for tri in POSITIONS.chunks(3) {
            assert_eq!(tri[2][2].abs(), 2.0);
            assert_eq!(tri[0][2], 0.0);
            assert_eq!(tri[1][2], 0.0);
        }
    }

    #[test]
    fn colors_are_normalized() {
        assert!(COLORS.iter().flatten().all(|c| (0.0..=1.0).contains(c)));
    }
}
