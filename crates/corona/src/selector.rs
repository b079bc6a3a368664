use crate::animator::{AnimationEntry, SelectionAnimator, Tick};
use crate::error::ConfigurationError;
use crate::geometry::{Point, Rect};
use crate::hit;
use crate::item::{OptionSet, SelectionItem};
use crate::layout::{self, Sector, SectorLayout};
use crate::render::Renderer;
use crate::settings::Settings;
use std::time::Duration;

type Observer = Box<dyn FnMut(Option<&SelectionItem>)>;

/// Persisted value for "nothing selected".
pub const NO_SELECTION: i32 = -1;

/// Circular selector state: options, selection, geometry and radius
/// animations. Lives on the host's UI thread.
pub struct Selector {
    settings: Settings,
    options: Option<OptionSet>,
    selected: Option<usize>,
    content_area: Rect,
    layout: SectorLayout,
    animator: SelectionAnimator,
    observers: Vec<Observer>,
}

impl Selector {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            options: None,
            selected: None,
            content_area: Rect::default(),
            layout: SectorLayout::default(),
            animator: SelectionAnimator::new(settings.animation),
            observers: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn options(&self) -> &[SelectionItem] {
        self.options
            .as_deref()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.options().len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&SelectionItem> {
        self.selected.and_then(|i| self.options().get(i))
    }

    pub fn layout(&self) -> &SectorLayout {
        &self.layout
    }

    /// Replaces the option set. A rejected list leaves everything untouched.
    /// The selection survives when its index is still in range.
    pub fn set_options(&mut self, items: Vec<SelectionItem>) -> Result<(), ConfigurationError> {
        let options = OptionSet::new(items)?;

        if self.selected.is_some_and(|i| i >= options.len()) {
            log::debug!("Selection dropped, {} options now", options.len());
            self.selected = None;
        }
        self.options = Some(options);
        self.animator.reset();
        Ok(())
    }

    /// Host size changed; `content_area` excludes padding.
    pub fn resize(&mut self, content_area: Rect) {
        self.content_area = content_area;
        self.relayout();
    }

    fn relayout(&mut self) {
        let inset = self.settings.to_px(self.settings.animation.max_offset);
        self.layout = SectorLayout::new(self.content_area, inset);
    }

    /// Current bounding square of sector `index`, animated or resting.
    pub fn sector_rect(&self, index: usize) -> Rect {
        let count = self.item_count();
        match self.animator.expansion(index) {
            Some(expansion) => self.layout.interpolated_rect(index, count, expansion),
            None if self.selected == Some(index) => self.layout.expanded_rect(index, count),
            None => self.layout.baseline_rect(index, count),
        }
    }

    pub fn sector(&self, index: usize) -> Sector {
        Sector {
            index,
            span: layout::sector_span(index, self.item_count()),
            rect: self.sector_rect(index),
        }
    }

    pub fn animation(&self, index: usize) -> Option<AnimationEntry> {
        self.animator.entry(index)
    }

    /// Handles a pointer-down in local coordinates. Returns whether a sector
    /// was hit; every hit toggles the selection and notifies observers.
    pub fn handle_pointer_down(&mut self, pointer: Point) -> bool {
        let hit = hit::locate(
            pointer,
            self.layout.bounding_square(),
            self.item_count(),
            |i| self.sector_rect(i),
        );
        let Some(index) = hit else {
            return false;
        };

        let previous = self.selected.take();
        if let Some(previous) = previous {
            self.animator.shrink(previous);
        }
        if previous != Some(index) {
            self.selected = Some(index);
            self.animator.grow(index);
        }

        log::debug!("Selection changed: {:?} -> {:?}", previous, self.selected);
        self.notify();
        true
    }

    pub fn add_observer(&mut self, observer: impl FnMut(Option<&SelectionItem>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        let item = self
            .selected
            .and_then(|i| self.options.as_ref().and_then(|o| o.get(i)));
        for observer in &mut self.observers {
            observer(item);
        }
    }

    pub fn tick(&mut self, elapsed: Duration) -> Tick {
        self.animator.tick(elapsed)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn saved_selection(&self) -> i32 {
        self.selected
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(NO_SELECTION)
    }

    /// Restores a persisted index without animating. Anything out of range
    /// means no selection.
    pub fn restore_selection(&mut self, index: i32) {
        let restored = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.item_count());
        if restored.is_none() && index != NO_SELECTION {
            log::debug!("Ignoring out of range saved selection {}", index);
        }

        self.selected = restored;
        self.animator.reset();
        self.notify();
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let icon_size = self.settings.to_px(self.settings.icon_size);

        for (index, item) in self.options().iter().enumerate() {
            let sector = self.sector(index);
            renderer.draw_arc(item, sector.span, sector.rect)?;
            let center = layout::icon_center(sector.span.mid(), sector.rect);
            renderer.draw_icon(&item.icon, center, icon_size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::IconRef;
    use crate::layout::SectorSpan;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn items(names: &[&str]) -> Vec<SelectionItem> {
        names
            .iter()
            .map(|name| SelectionItem::new(*name, format!("color-{name}")))
            .collect()
    }

    fn selector(names: &[&str]) -> Selector {
        let mut selector = Selector::new(Settings::default());
        selector.set_options(items(names)).unwrap();
        selector.resize(Rect::from_size(400.0, 400.0));
        selector
    }

    fn recorder(selector: &mut Selector) -> Rc<RefCell<Vec<Option<String>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        selector.add_observer(move |item| {
            sink.borrow_mut().push(item.map(|i| i.icon.to_string()));
        });
        seen
    }

    fn point_at(angle: f64, distance: f64) -> Point {
        let radians = angle.to_radians();
        Point::new(
            200.0 + distance * radians.cos(),
            200.0 + distance * radians.sin(),
        )
    }

    fn settle(selector: &mut Selector) {
        while selector.tick(FRAME).is_active {}
    }

    #[test]
    fn test_tap_toggles_selection() {
        let mut selector = selector(&["A", "B", "C", "D", "E"]);
        let seen = recorder(&mut selector);
        let pointer = point_at(40.0, 100.0);

        assert!(selector.handle_pointer_down(pointer));
        assert_eq!(selector.selected_index(), Some(0));
        assert!(selector.handle_pointer_down(pointer));
        assert_eq!(selector.selected_index(), None);

        assert_eq!(*seen.borrow(), vec![Some("A".to_string()), None]);
    }

    #[test]
    fn test_switching_sector_shrinks_previous() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        let seen = recorder(&mut selector);

        selector.handle_pointer_down(point_at(45.0, 100.0));
        settle(&mut selector);
        selector.handle_pointer_down(point_at(135.0, 100.0));

        assert_eq!(selector.selected_index(), Some(1));
        assert!(selector.animation(0).is_some_and(|e| e.current_offset > 0.0));
        assert!(selector.animation(1).is_some());
        assert_eq!(
            *seen.borrow(),
            vec![Some("A".to_string()), Some("B".to_string())]
        );
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut selector = selector(&["A", "B", "C"]);
        let seen = recorder(&mut selector);

        assert!(!selector.handle_pointer_down(Point::new(5.0, 5.0)));
        assert!(!selector.handle_pointer_down(Point::new(500.0, 200.0)));
        assert_eq!(selector.selected_index(), None);
        assert!(!selector.is_animating());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unconfigured_selector_ignores_pointer() {
        let mut selector = Selector::new(Settings::default());
        selector.resize(Rect::from_size(400.0, 400.0));
        assert!(!selector.handle_pointer_down(Point::new(200.0, 200.0)));
    }

    #[test]
    fn test_selected_sector_rests_expanded() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        let baseline = selector.sector_rect(0);
        assert_eq!(baseline, Rect::new(42.0, 42.0, 358.0, 358.0));

        selector.handle_pointer_down(point_at(45.0, 100.0));
        settle(&mut selector);
        assert_eq!(selector.sector_rect(0), Rect::from_size(400.0, 400.0));
        assert_eq!(selector.sector_rect(1), baseline);

        selector.handle_pointer_down(point_at(45.0, 100.0));
        settle(&mut selector);
        assert_eq!(selector.sector_rect(0), baseline);
    }

    #[test]
    fn test_expanded_sector_accepts_outer_ring() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        // outside the baseline disc, inside the expanded one
        let outer = point_at(45.0, 180.0);
        assert!(!selector.handle_pointer_down(outer));

        selector.handle_pointer_down(point_at(45.0, 100.0));
        settle(&mut selector);
        assert!(selector.handle_pointer_down(outer));
        assert_eq!(selector.selected_index(), None);
    }

    #[test]
    fn test_deselect_mid_grow_has_no_jump() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        let pointer = point_at(45.0, 100.0);

        selector.handle_pointer_down(pointer);
        for _ in 0..5 {
            selector.tick(FRAME);
        }
        let before = selector.sector_rect(0);
        selector.handle_pointer_down(pointer);
        assert_eq!(selector.sector_rect(0), before);

        let tick = selector.tick(FRAME);
        assert!(tick.should_redraw);
        assert!(selector.sector_rect(0).width() < before.width());
    }

    #[test]
    fn test_rejected_options_keep_state() {
        let mut selector = selector(&["A", "B", "C"]);
        selector.handle_pointer_down(point_at(10.0, 100.0));

        for count in [1, 21] {
            let names: Vec<String> = (0..count).map(|i| format!("x{i}")).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            assert_eq!(
                selector.set_options(items(&names)),
                Err(ConfigurationError::OptionCount(count))
            );
        }

        assert_eq!(selector.item_count(), 3);
        assert_eq!(selector.selected_index(), Some(0));
        assert!(selector.is_animating());
    }

    #[test]
    fn test_replacing_options_keeps_valid_selection() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        let seen = recorder(&mut selector);
        selector.handle_pointer_down(point_at(135.0, 100.0));

        selector.set_options(items(&["W", "X", "Y"])).unwrap();
        assert_eq!(selector.selected_index(), Some(1));
        assert_eq!(selector.selected_item().map(|i| i.icon.as_str()), Some("X"));
        assert!(!selector.is_animating());

        assert!(selector.handle_pointer_down(point_at(270.0, 100.0)));
        assert_eq!(selector.selected_index(), Some(2));
        selector.set_options(items(&["P", "Q"])).unwrap();
        assert_eq!(selector.selected_index(), None);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_restore_selection_clamps() {
        let mut selector = selector(&["A", "B", "C"]);
        let seen = recorder(&mut selector);

        let cases = vec![(2, Some(2), 2), (3, None, -1), (-1, None, -1), (-7, None, -1)];
        for (saved, expected, persisted) in cases {
            selector.restore_selection(saved);
            assert_eq!(selector.selected_index(), expected, "saved {saved}");
            assert_eq!(selector.saved_selection(), persisted);
        }

        assert!(!selector.is_animating());
        assert_eq!(seen.borrow()[0], Some("C".to_string()));
    }

    #[test]
    fn test_resize_recenters_geometry() {
        let mut selector = selector(&["A", "B"]);
        selector.resize(Rect::new(0.0, 0.0, 600.0, 400.0));
        assert_eq!(
            selector.layout().bounding_square(),
            Rect::new(100.0, 0.0, 500.0, 400.0)
        );

    }

    #[test]
    fn test_scale_factor_widens_inset() {
        let mut selector = Selector::new(Settings {
            scale_factor: 2.0,
            ..Settings::default()
        });
        selector.set_options(items(&["A", "B"])).unwrap();
        selector.resize(Rect::new(0.0, 0.0, 600.0, 400.0));
        assert_eq!(selector.sector_rect(0), Rect::new(184.0, 84.0, 416.0, 316.0));
    }

    #[test]
    fn test_small_area_animation_stays_inside_bounds() {
        let mut selector = Selector::new(Settings::default());
        selector.set_options(items(&["A", "B", "C"])).unwrap();
        selector.resize(Rect::from_size(60.0, 60.0));
        let bounding = selector.layout().bounding_square();

        assert!(selector.handle_pointer_down(Point::new(30.0, 30.0)));
        let mut previous = selector.sector_rect(0).width();
        while selector.tick(FRAME).is_active {
            let rect = selector.sector_rect(0);
            assert!(rect.width() <= bounding.width() + 1e-9);
            assert!(rect.width() + 1e-9 >= previous);
            previous = rect.width();
        }
        assert_eq!(selector.sector_rect(0), bounding);
    }

    #[derive(Default)]
    struct RecordingRenderer {
        arcs: Vec<(String, SectorSpan, Rect)>,
        icons: Vec<(IconRef, Point, f64)>,
    }

    impl Renderer for RecordingRenderer {
        type Error = std::convert::Infallible;

        fn draw_arc(
            &mut self,
            item: &SelectionItem,
            span: SectorSpan,
            rect: Rect,
        ) -> Result<(), Self::Error> {
            self.arcs.push((item.color.to_string(), span, rect));
            Ok(())
        }

        fn draw_icon(
            &mut self,
            icon: &IconRef,
            center: Point,
            size: f64,
        ) -> Result<(), Self::Error> {
            self.icons.push((icon.clone(), center, size));
            Ok(())
        }
    }

    #[test]
    fn test_render_emits_every_sector() {
        let mut selector = selector(&["A", "B", "C", "D"]);
        selector.restore_selection(2);

        let mut renderer = RecordingRenderer::default();
        selector.render(&mut renderer).unwrap();

        assert_eq!(renderer.arcs.len(), 4);
        assert_eq!(renderer.icons.len(), 4);
        assert_eq!(renderer.arcs[1].0, "color-B");
        assert_eq!(renderer.arcs[1].1, SectorSpan { start: 90.0, sweep: 90.0 });
        assert_eq!(renderer.arcs[2].2, Rect::from_size(400.0, 400.0));
        assert_eq!(renderer.icons[0].0, IconRef::new("A"));
        assert_eq!(renderer.icons[0].2, crate::DEFAULT_ICON_SIZE);
    }
}
