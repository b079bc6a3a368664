use corona::Selector;
use corona_gtk::config;
use corona_gtk::gui::app::AppModel;
use corona_gtk::gui::resources::Resources;
use corona_gtk::state;
use corona_gtk::sys::runtime;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match config::write_default_config() {
        Ok(path) => log::debug!("Using config at {}", path.display()),
        Err(e) => log::warn!("Could not seed default config: {}", e),
    }
    let config = config::load_or_default();

    let mut selector = Selector::new(config.selector);
    if let Err(e) = selector.set_options(config.options) {
        log::error!("Invalid options in config, using demo options: {}", e);
        selector.set_options(config::demo_options())?;
    }
    selector.restore_selection(state::load_selection());

    let mut resources = Resources::new(config.window.fallback_color);
    resources.load(selector.options());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.corona.selector");

    app.run::<AppModel>((selector, resources, config.window, rx));
    Ok(())
}
