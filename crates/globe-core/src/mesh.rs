use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere. Triangles wind counter-clockwise seen from
/// outside; `uv` has `v = 0` at the north pole and `u` follows
/// [`crate::geo::lat_lon_to_vec3`]'s longitude offset, so an equirectangular
/// map lands where the markers say it should.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(((w + 1) * (h + 1)) as usize),
        indices: Vec::with_capacity((w * h * 6) as usize),
    };
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_polar, cos_polar) = (v * std::f32::consts::PI).sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_az, cos_az) = (u * std::f32::consts::TAU).sin_cos();
            let n = Vec3::new(-cos_az * sin_polar, cos_polar, sin_az * sin_polar);
            mesh.vertices.push(Vertex {
                position: (n * radius).to_array(),
                normal: n.normalize_or_zero().to_array(),
                uv: [u, v],
            });
        }
    }
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point; skip their degenerate halves
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Unit square in the XY plane facing +Z, for marker icons.
pub fn unit_quad() -> Mesh {
    let n = [0.0, 0.0, 1.0];
    Mesh {
        vertices: vec![
            Vertex {
                position: [-0.5, -0.5, 0.0],
                normal: n,
                uv: [0.0, 1.0],
            },
            Vertex {
                position: [0.5, -0.5, 0.0],
                normal: n,
                uv: [1.0, 1.0],
            },
            Vertex {
                position: [0.5, 0.5, 0.0],
                normal: n,
                uv: [1.0, 0.0],
            },
            Vertex {
                position: [-0.5, 0.5, 0.0],
                normal: n,
                uv: [0.0, 0.0],
            },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
