use globe_core::{lat_lon_to_vec3, unit_quad, uv_sphere, GLOBE_SEGMENTS};
use glam::{Vec2, Vec3};

#[test]
fn sphere_has_expected_counts() {
    let n = GLOBE_SEGMENTS;
    let mesh = uv_sphere(1.0, n, n);
    assert_eq!(mesh.vertices.len() as u32, (n + 1) * (n + 1));
    // pole rows contribute one triangle per segment, the rest two
    assert_eq!(mesh.indices.len() as u32, (n * (n - 2) * 2 + 2 * n) * 3);
    let max = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < max));
}

#[test]
fn sphere_vertices_lie_on_radius_with_outward_normals() {
    let mesh = uv_sphere(1.5, 16, 12);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!((p.length() - 1.5).abs() < 1e-4);
        let n = Vec3::from_array(v.normal);
        assert!((n - p.normalize()).length() < 1e-4);
    }
}

#[test]
fn sphere_triangles_face_outward() {
    let mesh = uv_sphere(1.0, 24, 16);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0);
    }
}

#[test]
fn sphere_uv_lines_up_with_projection() {
    // a vertex with u = (lon + 180) / 360 and v = (90 - lat) / 180 sits where
    // the projection puts (lat, lon)
    let mesh = uv_sphere(1.0, 8, 4);
    for v in &mesh.vertices {
        let uv = Vec2::from(v.uv);
        let lon = uv.x * 360.0 - 180.0;
        let lat = 90.0 - uv.y * 180.0;
        let p = lat_lon_to_vec3(lat, lon, 1.0);
        assert!((p - Vec3::from(v.position)).length() < 1e-4, "uv={uv:?}");
    }
}

#[test]
fn quad_faces_positive_z() {
    let q = unit_quad();
    assert_eq!(q.indices.len(), 6);
    for tri in q.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(q.vertices[i as usize].position));
        assert!((b - a).cross(c - a).z > 0.0);
    }
    // top edge samples the top row of the image
    assert_eq!(q.vertices[3].uv, [0.0, 0.0]);
}
