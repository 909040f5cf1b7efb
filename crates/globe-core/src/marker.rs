use crate::constants::MARKER_RADIUS;
use crate::geo::lat_lon_to_vec3;
use glam::Vec3;

/// A franchise location shown on the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub name: &'static str,
    /// Degrees, -90..=90.
    pub latitude: f32,
    /// Degrees, -180..=180.
    pub longitude: f32,
    pub icon: &'static str,
}

impl Marker {
    /// Globe-space anchor of this marker, just above the surface.
    #[inline]
    pub fn anchor(&self) -> Vec3 {
        lat_lon_to_vec3(self.latitude, self.longitude, MARKER_RADIUS)
    }
}

pub const FRANCHISES: &[Marker] = &[
    Marker {
        name: "Franchise A",
        latitude: 43.7615,
        longitude: -79.4111,
        icon: "/logos/f1.png",
    },
    Marker {
        name: "Franchise B",
        latitude: 51.0447,
        longitude: -114.0719,
        icon: "/logos/f2.png",
    },
    Marker {
        name: "Franchise C",
        latitude: 40.7128,
        longitude: -74.0060,
        icon: "/logos/f3.png",
    },
    Marker {
        name: "Franchise D",
        latitude: 34.0522,
        longitude: -118.2437,
        icon: "/logos/f4.png",
    },
    Marker {
        name: "Franchise E",
        latitude: 48.8566,
        longitude: 2.3522,
        icon: "/logos/f5.png",
    },
    Marker {
        name: "Franchise F",
        latitude: 35.6895,
        longitude: 139.6917,
        icon: "/logos/f6.png",
    },
    Marker {
        name: "Franchise G",
        latitude: -33.8688,
        longitude: 151.2093,
        icon: "/logos/f7.png",
    },
    Marker {
        name: "Franchise H",
        latitude: 19.0760,
        longitude: 72.8777,
        icon: "/logos/f8.png",
    },
];

