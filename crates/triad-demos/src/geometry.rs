//! Fixed clip-space geometry for the demos.

use triad_engine::render::Position3;

/// √3, spelled out because `f32::sqrt` is not `const`.
const SQRT_3: f32 = 1.732_050_8;

/// One triangle: left, right, top.
pub const TRIANGLE_VERTICES: [Position3; 3] = [
    Position3::new(-0.5, -0.5, 0.0),
    Position3::new(0.5, -0.5, 0.0),
    Position3::new(0.0, 0.5, 0.0),
];

/// Equilateral triangle corners followed by its three edge midpoints.
pub const SIERPINSKI_VERTICES: [Position3; 6] = [
    Position3::new(-0.5, -0.5 * SQRT_3 / 3.0, 0.0),     // lower left
    Position3::new(0.5, -0.5 * SQRT_3 / 3.0, 0.0),      // lower right
    Position3::new(0.0, 0.5 * SQRT_3 * 2.0 / 3.0, 0.0), // top
    Position3::new(-0.5 / 2.0, 0.5 * SQRT_3 / 6.0, 0.0), // inner left
    Position3::new(0.5 / 2.0, 0.5 * SQRT_3 / 6.0, 0.0),  // inner right
    Position3::new(0.0, -0.5 * SQRT_3 / 3.0, 0.0),      // inner bottom
];

/// The three corner triangles; the middle one is left empty.
pub const SIERPINSKI_INDICES: [u32; 9] = [
    0, 3, 5, // lower left
    3, 2, 4, // top
    5, 4, 1, // lower right
];

#[cfg(test)]
mod tests {
    use super::*;
    use triad_engine::render::check_indices;

    fn midpoint(a: Position3, b: Position3) -> [f32; 3] {
        [
            (a.pos[0] + b.pos[0]) / 2.0,
            (a.pos[1] + b.pos[1]) / 2.0,
            (a.pos[2] + b.pos[2]) / 2.0,
        ]
    }

    fn approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn sqrt_3_constant_is_accurate() {
        assert!((SQRT_3 - 3f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn triangle_stays_in_clip_space() {
        for v in TRIANGLE_VERTICES.iter().chain(&SIERPINSKI_VERTICES) {
            assert!(v.pos.iter().all(|c| (-1.0..=1.0).contains(c)));
            assert_eq!(v.pos[2], 0.0);
        }
    }

    #[test]
    fn sierpinski_indices_are_in_bounds() {
        assert!(check_indices(&SIERPINSKI_INDICES, SIERPINSKI_VERTICES.len() as u32).is_ok());
    }

    #[test]
    fn sierpinski_index_triples() {
        let expected: [[u32; 3]; 3] = [[0, 3, 5], [3, 2, 4], [5, 4, 1]];
        assert_eq!(SIERPINSKI_INDICES.chunks(3).count(), expected.len());
        for (triple, want) in SIERPINSKI_INDICES.chunks(3).zip(expected) {
            assert_eq!(triple, want);
        }
    }

    #[test]
    fn inner_vertices_are_edge_midpoints() {
        let v = SIERPINSKI_VERTICES;
        assert!(approx_eq(v[3].pos, midpoint(v[0], v[2])));
        assert!(approx_eq(v[4].pos, midpoint(v[1], v[2])));
        assert!(approx_eq(v[5].pos, midpoint(v[0], v[1])));
    }

    #[test]
    fn outer_triangle_is_equilateral() {
        let v = SIERPINSKI_VERTICES;
        let d = |a: Position3, b: Position3| {
            ((a.pos[0] - b.pos[0]).powi(2) + (a.pos[1] - b.pos[1]).powi(2)).sqrt()
        };
        assert!((d(v[0], v[1]) - 1.0).abs() < 1e-5);
        assert!((d(v[1], v[2]) - 1.0).abs() < 1e-5);
        assert!((d(v[2], v[0]) - 1.0).abs() < 1e-5);
    }
}
