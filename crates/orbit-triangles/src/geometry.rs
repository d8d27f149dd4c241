//! Two overlapping triangles in the Z = 0 plane, drawn one after the other.

pub const TRIANGLE_COUNT: usize = 2;

pub const POSITIONS: [[f32; 3]; 3 * TRIANGLE_COUNT] = [
    [1.5, 0.4, 0.0],
    [-0.3, 0.1, 0.0],
    [0.3, -0.7, 0.0],
    [1.7, -0.6, 0.0],
    [0.3, -0.5, 0.0],
    [0.9, 0.7, 0.0],
];

/// Vertex range of triangle `i` in [`POSITIONS`].
pub fn triangle_range(i: usize) -> std::ops::Range<u32> {
    let first = (3 * i) as u32;
    first..first + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::render::MeshData;

    #[test]
    fn two_triangles_positions_only() {
        let mesh = MeshData::new(&POSITIONS);
        assert_eq!(mesh.validate(), Ok(6));
        assert_eq!(mesh.vertex_layouts().len(), 1);
    }

    #[test]
    fn ranges_split_the_buffer() {
        assert_eq!(triangle_range(0), 0..3);
        assert_eq!(triangle_range(1), 3..6);
        assert_eq!(triangle_range(TRIANGLE_COUNT - 1).end as usize, POSITIONS.len());
    }

    #[test]
    fn flat_in_z() {
        assert!(POSITIONS.iter().all(|p| p[2] == 0.0));
    }
}
