use corona::{ColorRef, IconRef, ResourceProvider, SelectionItem};
use freedesktop_icons::lookup;
use gdk_pixbuf::Pixbuf;
use palette::rgb::FromHexError;
use palette::{Srgb, Srgba};
use serde_with::DeserializeFromStr;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Pixel size icons are rasterized at before cairo scales them.
const ICON_LOAD_SIZE: i32 = 128;

/// `#rrggbb` (or `#rgb`) color, opaque.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr)]
pub struct HexColor(pub Srgba<f64>);

impl FromStr for HexColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.trim().parse()?;
        let rgb: Srgb<f64> = rgb.into_format();
        Ok(Self(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)))
    }
}

pub fn find_icon_path(icon: &IconRef) -> Option<PathBuf> {
    if icon.is_empty() {
        return None;
    }

    let path = Path::new(icon.as_str());
    if path.is_absolute() && path.exists() {
        return Some(path.to_path_buf());
    }

    lookup(icon.as_str()).with_size(512).with_scale(1).find()
}

fn load_icon(icon: &IconRef) -> Option<Pixbuf> {
    let path = find_icon_path(icon)?;
    Pixbuf::from_file_at_scale(&path, ICON_LOAD_SIZE, ICON_LOAD_SIZE, true)
        .map_err(|e| log::warn!("Failed to load icon '{}': {}", icon, e))
        .ok()
}

/// Icons and colors for the current option set. Icons are loaded once per
/// option set, colors are parsed on demand.
pub struct Resources {
    icons: HashMap<IconRef, Option<Pixbuf>>,
    fallback: Srgba<f64>,
}

impl Resources {
    pub fn new(fallback: HexColor) -> Self {
        Self {
            icons: HashMap::new(),
            fallback: fallback.0,
        }
    }

    pub fn load(&mut self, items: &[SelectionItem]) {
        self.icons = items
            .iter()
            .map(|item| (item.icon.clone(), load_icon(&item.icon)))
            .collect();
    }
}

impl ResourceProvider for Resources {
    type Icon = Pixbuf;
    type Color = Srgba<f64>;

    fn icon(&self, icon: &IconRef) -> Option<Pixbuf> {
        self.icons.get(icon).cloned().flatten()
    }

    fn color(&self, color: &ColorRef) -> Srgba<f64> {
        color.parse::<HexColor>().map(|c| c.0).unwrap_or_else(|e| {
            log::warn!("Invalid color '{}': {}", color, e);
            self.fallback
        })
    }
}
