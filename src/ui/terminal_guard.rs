use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::thread::{self, ThreadId};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal when dropped, and from the panic hook if the UI
/// thread panics first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
    owner: ThreadId,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
            owner: thread::current().id(),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        *self.cleanup.lock() = Some(Box::new(cleanup));
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let owner = self.owner;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            // Submission tasks panic on runtime workers while the UI keeps drawing.
            if thread::current().id() == owner {
                if let Some(cleanup) = cleanup.lock().take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Some(cleanup) = self.cleanup.lock().take() {
            cleanup();
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn panic_off_the_ui_thread_keeps_terminal() {
        let guard = TerminalGuard::new();
        let restored = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&restored);
        guard.set_cleanup(move || flag.store(true, Ordering::SeqCst));
        guard.install_panic_hook();

        let worker = thread::spawn(|| panic!("submission task failed"));
        assert!(worker.join().is_err());
        let restored_by_worker = restored.load(Ordering::SeqCst);

        let _ = std::panic::take_hook();
        assert!(!restored_by_worker);
        assert!(guard.cleanup.lock().is_some());

        guard.restore();
        assert!(restored.load(Ordering::SeqCst));
    }
}
