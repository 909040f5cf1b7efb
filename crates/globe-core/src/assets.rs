use crate::error::AssetError;
use crate::marker::Marker;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// 1x1 stand-in for a missing asset.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }
}

// Fallbacks: a dark ocean blue for the globe, fully transparent for icons so a
// missing logo just leaves its name label.
pub const GLOBE_FALLBACK_RGBA: [u8; 4] = [18, 42, 84, 255];
pub const ICON_FALLBACK_RGBA: [u8; 4] = [0, 0, 0, 0];

/// Decode PNG or JPEG bytes; the format is sniffed from the data.
pub fn decode_rgba(url: &str, bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        url: url.to_string(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Which icon files to fetch and which of them each marker uses.
///
/// Every distinct path is fetched once per view, no matter how many markers
/// share it or how many frames are drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconPlan {
    pub paths: SmallVec<[&'static str; 8]>,
    /// `slots[i]` indexes `paths` for marker `i`.
    pub slots: Vec<usize>,
}

impl IconPlan {
    pub fn for_markers(markers: &[Marker]) -> Self {
        let mut seen: FnvHashMap<&'static str, usize> = FnvHashMap::default();
        let mut plan = IconPlan::default();
        for m in markers {
            let slot = *seen.entry(m.icon).or_insert_with(|| {
                plan.paths.push(m.icon);
                plan.paths.len() - 1
            });
            plan.slots.push(slot);
        }
        plan
    }
}
