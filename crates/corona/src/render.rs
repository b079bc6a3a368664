//! Boundary traits towards the host's drawing and resource systems.

use crate::geometry::{Point, Rect};
use crate::item::{ColorRef, IconRef, SelectionItem};
use crate::layout::SectorSpan;

/// Drawing sink. The selector never touches pixels itself.
pub trait Renderer {
    type Error;

    /// Filled wedge of the circle inscribed in `rect`, from `span.start`
    /// clockwise over `span.sweep` degrees.
    fn draw_arc(
        &mut self,
        item: &SelectionItem,
        span: SectorSpan,
        rect: Rect,
    ) -> Result<(), Self::Error>;

    /// Icon centered on `center`, fitted into a `size` x `size` box.
    fn draw_icon(&mut self, icon: &IconRef, center: Point, size: f64) -> Result<(), Self::Error>;
}

/// Resolves the opaque item tokens into host drawables.
pub trait ResourceProvider {
    type Icon;
    type Color;

    fn icon(&self, icon: &IconRef) -> Option<Self::Icon>;

    fn color(&self, color: &ColorRef) -> Self::Color;
}
