use crate::config::Config;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The config file changed and parsed; carries the freshly loaded config.
    ConfigReload(Box<Config>),
}
