use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgba, WithAlpha};

const SELECTION_CSS: &str = "
.corona-selection {
    padding: 8px;
    font-weight: bold;
}
";

/// Colors the renderer takes from the active GTK theme rather than from the
/// option set.
pub struct ThemeColors {
    /// Stroke between adjacent wedges; always opaque.
    pub separator: Srgba<f64>,
    /// Initial drawn when an icon cannot be resolved.
    pub text: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            separator: Srgba::new(0.15, 0.15, 0.15, 1.0),
            text: Srgba::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::default();
        Self {
            separator: named_color(context, "theme_bg_color")
                .map_or(fallback.separator, |c| c.with_alpha(1.0)),
            text: named_color(context, "theme_fg_color").unwrap_or(fallback.text),
        }
    }
}

fn named_color(context: &gtk::StyleContext, name: &str) -> Option<Srgba<f64>> {
    let rgba = context.lookup_color(name)?;
    Some(Srgba::new(
        f64::from(rgba.red()),
        f64::from(rgba.green()),
        f64::from(rgba.blue()),
        f64::from(rgba.alpha()),
    ))
}

pub fn load_css() {
    let Some(display) = gdk::Display::default() else {
        log::warn!("No display, skipping selection label styling");
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_data(SELECTION_CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
