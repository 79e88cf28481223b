use crate::backend::SimulatedBackend;
use crate::config::Config;
use crate::ui::app::{App, Services};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Run the form UI until the user quits. Submissions are spawned on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let backend = Arc::new(SimulatedBackend::from_config(&config.submission));
    let services = Services {
        auth: backend.clone(),
        profiles: backend,
    };

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(&config.forms, services, runtime, events.sender());
    info!(screen = ?app.screen(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::AuthSubmitted(result)) => app.on_auth_submitted(result),
            Ok(AppEvent::RegistrationSubmitted(result)) => app.on_registration_submitted(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("UI stopped");
    drop(guard);
    Ok(())
}
