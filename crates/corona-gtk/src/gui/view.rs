use super::resources::Resources;
use super::theme::ThemeColors;
use cairo::Context;
use corona::{IconRef, Point, Rect, Renderer, ResourceProvider, SectorSpan, SelectionItem, Selector};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;

const SEPARATOR_WIDTH: f64 = 2.0;

struct CairoRenderer<'a> {
    cr: &'a Context,
    resources: &'a Resources,
    colors: &'a ThemeColors,
}

impl<'a> CairoRenderer<'a> {
    fn new(cr: &'a Context, resources: &'a Resources, colors: &'a ThemeColors) -> Self {
        Self {
            cr,
            resources,
            colors,
        }
    }

    fn draw_pixbuf(&self, pixbuf: &Pixbuf, center: Point, size: f64) -> Result<(), cairo::Error> {
        // fit the longer side into the icon box
        let longest = pixbuf.width().max(pixbuf.height()).max(1) as f64;
        let icon_scale = size / longest;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        self.cr.save()?;
        self.cr.translate(center.x - iw / 2.0, center.y - ih / 2.0);
        self.cr.scale(icon_scale, icon_scale);
        self.cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        self.cr.paint()?;
        self.cr.restore()
    }

    /// Stand-in for icons that could not be resolved: the name's initial.
    fn draw_initial(&self, icon: &IconRef, center: Point, size: f64) -> Result<(), cairo::Error> {
        let Some(initial) = icon.chars().next() else {
            return Ok(());
        };
        let text = initial.to_uppercase().to_string();

        let (r, g, b, a) = self.colors.text.into_components();
        self.cr.set_source_rgba(r, g, b, a);
        self.cr
            .select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(size * 0.75);
        if let Ok(ext) = self.cr.text_extents(&text) {
            self.cr.move_to(
                center.x - ext.width() / 2.0 - ext.x_bearing(),
                center.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            self.cr.show_text(&text)?;
        }
        Ok(())
    }
}

impl Renderer for CairoRenderer<'_> {
    type Error = cairo::Error;

    fn draw_arc(
        &mut self,
        item: &SelectionItem,
        span: SectorSpan,
        rect: Rect,
    ) -> Result<(), cairo::Error> {
        let center = rect.center();
        let (r, g, b, a) = self.resources.color(&item.color).into_components();

        self.cr.set_source_rgba(r, g, b, a);
        self.cr.move_to(center.x, center.y);
        self.cr.arc(
            center.x,
            center.y,
            rect.radius(),
            span.start.to_radians(),
            span.end().to_radians(),
        );
        self.cr.close_path();
        self.cr.fill_preserve()?;

        let (r, g, b, a) = self.colors.separator.into_components();
        self.cr.set_source_rgba(r, g, b, a);
        self.cr.set_line_width(SEPARATOR_WIDTH);
        self.cr.stroke()
    }

    fn draw_icon(&mut self, icon: &IconRef, center: Point, size: f64) -> Result<(), cairo::Error> {
        match self.resources.icon(icon) {
            Some(pixbuf) => self.draw_pixbuf(&pixbuf, center, size),
            None => self.draw_initial(icon, center, size),
        }
    }
}

pub fn draw(
    cr: &Context,
    selector: &Selector,
    resources: &Resources,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    selector.render(&mut CairoRenderer::new(cr, resources, colors))
}
