// src/ui/terminal.rs
use std::io::{self, stdout, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::frame::Frame;
use super::renderer::draw_frame;
use super::Screen;

/// The real terminal on stdout.
///
/// Holding a `CrosstermScreen` means raw mode and the alternate screen are
/// active; dropping it restores the terminal, including while unwinding
/// from a panic.
pub struct CrosstermScreen {
    out: Stdout,
    active: bool,
}

impl CrosstermScreen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the remaining setup so a failure below still
        // leaves raw mode on drop.
        let mut screen = Self {
            out: stdout(),
            active: true,
        };
        execute!(screen.out, EnterAlternateScreen, Hide)?;
        log::info!("terminal entered");
        Ok(screen)
    }

    pub fn leave(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            restore_terminal()?;
            log::info!("terminal restored");
        }
        Ok(())
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn read_event(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn present(&mut self, frame: &Frame, resync: bool) -> io::Result<()> {
        draw_frame(&mut self.out, frame, resync)
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

fn restore_terminal() -> io::Result<()> {
    restore_with(&mut stdout(), disable_raw_mode)
}

/// Leave the alternate screen on `out`, then turn raw mode off even if the
/// write failed. The first error wins.
fn restore_with<W, F>(out: &mut W, disable_raw: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let screen = execute!(out, LeaveAlternateScreen, Show);
    let raw = disable_raw();
    screen.and(raw)
}

/// Restore the terminal before the default hook prints a panic, so the
/// message lands on the normal screen instead of the discarded alternate one.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        log::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_raw_mode_disabled_when_screen_write_fails() {
        let disabled = Cell::new(false);
        let result = restore_with(&mut BrokenPipe, || {
            disabled.set(true);
            Ok(())
        });

        assert!(disabled.get());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_raw_mode_error_reported_after_clean_write() {
        let mut out = Vec::new();
        let result = restore_with(&mut out, || Err(io::Error::new(io::ErrorKind::Other, "tty")));

        assert!(!out.is_empty());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_restore_writes_leave_and_show() {
        let mut out = Vec::new();
        restore_with(&mut out, || Ok(())).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
