use crate::config::{Config, WindowConfig};
use crate::events::AppEvent;
use crate::gui::resources::Resources;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use crate::state;
use corona::{Point, Rect, SelectionItem, Selector};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub selector: Rc<RefCell<Selector>>,
    pub resources: Rc<RefCell<Resources>>,
    pub window: WindowConfig,
    pub label: String,
    pub ticking: Rc<Cell<bool>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    PointerDown(Point),
    Selected(Option<SelectionItem>),
    ConfigReload(Box<Config>),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload(config) => AppMsg::ConfigReload(config),
        }
    }
}

fn describe(item: Option<&SelectionItem>) -> String {
    item.map_or_else(
        || "Nothing selected".to_string(),
        |item| format!("Selected: {}", item.icon),
    )
}

/// Drawing area minus padding, in widget coordinates.
fn content_area(width: i32, height: i32, padding: f64) -> Rect {
    Rect::new(
        padding,
        padding,
        (width as f64 - padding).max(padding),
        (height as f64 - padding).max(padding),
    )
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Selector,
        Resources,
        WindowConfig,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Corona"),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    set_content_width: model.window.size,
                    set_content_height: model.window.size,

                    add_controller = gtk::GestureClick {
                        connect_pressed[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::PointerDown(Point::new(x, y)));
                        }
                    }
                },

                gtk::Label {
                    add_css_class: "corona-selection",
                    #[watch]
                    set_label: &model.label,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (selector, resources, window, rx) = init;

        theme::load_css();

        let label = describe(selector.selected_item());
        let selector = Rc::new(RefCell::new(selector));
        {
            let sender = sender.clone();
            selector
                .borrow_mut()
                .add_observer(move |item| sender.input(AppMsg::Selected(item.cloned())));
        }

        let model = AppModel {
            selector: selector.clone(),
            resources: Rc::new(RefCell::new(resources)),
            window,
            label,
            ticking: Rc::new(Cell::new(false)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let (selector_draw, resources_draw) = (model.selector.clone(), model.resources.clone());
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = view::draw(
                    cr,
                    &selector_draw.borrow(),
                    &resources_draw.borrow(),
                    &colors,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let (selector_resize, padding) = (model.selector.clone(), model.window.padding);
        widgets
            .drawing_area
            .connect_resize(move |drawing_area, width, height| {
                selector_resize
                    .borrow_mut()
                    .resize(content_area(width, height, padding));
                drawing_area.queue_draw();
            });

        let selector_save = model.selector.clone();
        root.connect_close_request(move |_| {
            let index = selector_save.borrow().saved_selection();
            if let Err(e) = state::save_selection(index) {
                log::error!("Failed to save selection: {}", e);
            }
            glib::Propagation::Proceed
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::PointerDown(point) => {
                let hit = self.selector.borrow_mut().handle_pointer_down(point);
                if hit {
                    self.start_ticking();
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Selected(item) => {
                self.label = describe(item.as_ref());
            }
            AppMsg::ConfigReload(config) => {
                let mut selector = self.selector.borrow_mut();
                match selector.set_options(config.options) {
                    Ok(()) => {
                        self.resources.borrow_mut().load(selector.options());
                        self.label = describe(selector.selected_item());
                        self.drawing_area.queue_draw();
                        log::info!("Options reloaded, {} sectors", selector.item_count());
                    }
                    Err(e) => log::error!("Keeping previous options: {}", e),
                }
            }
        }
    }
}

impl AppModel {
    /// Drives the selector from the frame clock until every animation rests.
    fn start_ticking(&self) {
        if self.ticking.replace(true) {
            return;
        }

        let selector = self.selector.clone();
        let ticking = self.ticking.clone();
        let last_frame = Cell::new(None::<i64>);
        self.drawing_area.add_tick_callback(move |drawing_area, clock| {
            let now = clock.frame_time();
            let elapsed = last_frame
                .replace(Some(now))
                .and_then(|previous| u64::try_from(now - previous).ok())
                .map(Duration::from_micros)
                .unwrap_or_default();

            let tick = selector.borrow_mut().tick(elapsed);
            if tick.should_redraw {
                drawing_area.queue_draw();
            }
            if tick.is_active {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}
