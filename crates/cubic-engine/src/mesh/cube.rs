use bytemuck::{Pod, Zeroable};

/// Cube vertex: homogeneous position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 4],
    pub uv: [f32; 2],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x4, // position
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Unit cube spanning [-1, 1] on every axis, two triangles per face.
///
/// Each face is listed as bottom-left, bottom-right, top-right, top-left as
/// seen from outside the cube, so triangles wind counter-clockwise from the
/// outside. UV (0, 0) is the top-left texel.
pub const CUBE_VERTICES: [CubeVertex; CUBE_VERTEX_COUNT as usize] = build_cube();

const FACES: [[[f32; 3]; 4]; 6] = [
    // +X
    [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    // -X
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    // +Y
    [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    // -Y
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // +Z
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // -Z
    [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
];

const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

// Two triangles per quad: (0, 1, 2) and (0, 2, 3).
const QUAD_CORNERS: [usize; 6] = [0, 1, 2, 0, 2, 3];

const fn build_cube() -> [CubeVertex; CUBE_VERTEX_COUNT as usize] {
    let mut out = [CubeVertex {
        position: [0.0; 4],
        uv: [0.0; 2],
    }; CUBE_VERTEX_COUNT as usize];

    let mut face = 0;
    while face < FACES.len() {
        let mut i = 0;
        while i < QUAD_CORNERS.len() {
            let corner = QUAD_CORNERS[i];
            let p = FACES[face][corner];
            out[face * 6 + i] = CubeVertex {
                position: [p[0], p[1], p[2], 1.0],
                uv: CORNER_UVS[corner],
            };
            i += 1;
        }
        face += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn pos(v: &CubeVertex) -> Vec3 {
        Vec3::new(v.position[0], v.position[1], v.position[2])
    }

    #[test]
    fn has_six_faces_of_two_triangles() {
        assert_eq!(CUBE_VERTICES.len(), 36);
        assert_eq!(CUBE_VERTICES.len() as u32, CUBE_VERTEX_COUNT);
    }

    #[test]
    fn vertex_stride_matches_layout() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 24);
        assert_eq!(CubeVertex::layout().array_stride, 24);
        assert_eq!(CubeVertex::layout().attributes[1].offset, 16);
    }

    #[test]
    fn positions_are_homogeneous_cube_corners() {
        for v in &CUBE_VERTICES {
            assert_eq!(v.position[3], 1.0);
            for c in &v.position[..3] {
                assert_eq!(c.abs(), 1.0);
            }
        }
    }

    #[test]
    fn uvs_stay_in_unit_square() {
        for v in &CUBE_VERTICES {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn each_face_lies_on_one_plane() {
        for face in CUBE_VERTICES.chunks(6) {
            let shared_axis = (0..3).find(|&axis| {
                let first = face[0].position[axis];
                face.iter().all(|v| v.position[axis] == first)
            });
            assert!(shared_axis.is_some(), "face is not axis-aligned: {face:?}");
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        for tri in CUBE_VERTICES.chunks(3) {
            let (a, b, c) = (pos(&tri[0]), pos(&tri[1]), pos(&tri[2]));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            // The cube is centred on the origin, so outward normals point away from it.
            assert!(normal.dot(centroid) > 0.0, "inward triangle: {tri:?}");
        }
    }

    #[test]
    fn every_face_uses_the_whole_texture() {
        for face in CUBE_VERTICES.chunks(6) {
            let mut corners: Vec<[f32; 2]> = face.iter().map(|v| v.uv).collect();
            corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
            corners.dedup();
            assert_eq!(corners.len(), 4);
        }
    }
}
