use crate::config;
use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;

/// Runs the config watcher on its own thread so file IO and parsing never
/// block the GTK main loop. Events come back over `tx`.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("corona-services".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::error!("Background runtime unavailable, live reload disabled: {}", e);
                    return;
                }
            };

            if let Err(e) = runtime.block_on(config::watch_config(tx)) {
                log::error!("Config watcher stopped: {}", e);
            }
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn background services: {}", e);
    }
}
