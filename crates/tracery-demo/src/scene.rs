//! Fixed demo geometry: two quads left and right of center.
//!
//! Positions are in clip space, z = 0. Corners are listed top-right,
//! bottom-right, bottom-left, top-left so both quads can share one index
//! pattern.

use tracery_engine::device::MeshData;

const LEFT_QUAD: [f32; 12] = [
    -0.25, 0.75, 0.0, // top right
    -0.25, -0.25, 0.0, // bottom right
    -0.75, -0.25, 0.0, // bottom left
    -0.75, 0.75, 0.0, // top left
];

const RIGHT_QUAD: [f32; 12] = [
    0.75, 0.75, 0.0, // top right
    0.75, -0.25, 0.0, // bottom right
    0.25, -0.25, 0.0, // bottom left
    0.25, 0.75, 0.0, // top left
];

/// Two triangles covering a quad in the corner order above.
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub fn left_quad() -> MeshData<'static> {
    MeshData {
        positions: &LEFT_QUAD,
        indices: &QUAD_INDICES,
    }
}

pub fn right_quad() -> MeshData<'static> {
    MeshData {
        positions: &RIGHT_QUAD,
        indices: &QUAD_INDICES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_bounds(data: &MeshData) -> ([f32; 2], [f32; 2]) {
        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        for corner in data.positions.chunks_exact(3) {
            for axis in 0..2 {
                min[axis] = min[axis].min(corner[axis]);
                max[axis] = max[axis].max(corner[axis]);
            }
        }
        (min, max)
    }

    #[test]
    fn left_quad_covers_its_region() {
        let (min, max) = xy_bounds(&left_quad());
        assert_eq!(min, [-0.75, -0.25]);
        assert_eq!(max, [-0.25, 0.75]);
    }

    #[test]
    fn right_quad_mirrors_the_left() {
        let (min, max) = xy_bounds(&right_quad());
        assert_eq!(min, [0.25, -0.25]);
        assert_eq!(max, [0.75, 0.75]);
    }

    #[test]
    fn quads_are_two_triangles_over_four_vertices() {
        for quad in [left_quad(), right_quad()] {
            assert_eq!(quad.vertex_count(), 4);
            assert_eq!(quad.index_count(), 6);
            assert_eq!(quad.triangle_count(), 2);
        }
    }

    #[test]
    fn indices_stay_in_range() {
        for quad in [left_quad(), right_quad()] {
            let vertex_count = quad.vertex_count() as u32;
            assert!(quad.indices.iter().all(|&i| i < vertex_count));
        }
    }

    #[test]
    fn quads_lie_in_the_z_zero_plane() {
        for quad in [left_quad(), right_quad()] {
            assert!(quad.positions.chunks_exact(3).all(|corner| corner[2] == 0.0));
        }
    }
}
