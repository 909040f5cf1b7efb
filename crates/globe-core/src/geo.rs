//! Geographic coordinates to globe-space positions.
//!
//! The globe is centred at the origin with +Y through the north pole. Longitude
//! is offset by 180° so that `u = (lon + 180) / 360` lines up with an
//! equirectangular texture wrapped by [`crate::mesh::uv_sphere`].

use glam::Vec3;

/// Project `(lat, lon)` in degrees onto a sphere of `radius`.
///
/// Inputs outside the usual ranges are not rejected; they still produce a
/// point on the sphere, just not a meaningful one.
#[inline]
pub fn lat_lon_to_vec3(lat: f32, lon: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Outward unit normal of the globe at `(lat, lon)`.
#[inline]
pub fn surface_normal(lat: f32, lon: f32) -> Vec3 {
    lat_lon_to_vec3(lat, lon, 1.0)
}
