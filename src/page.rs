//! Page API - Behavior lifecycle and event loop.
//!
//! Entry point for attaching the page behaviors to a live terminal.
//! Mounting probes the environment, installs every controller against
//! the registered document, and turns on mouse capture; the tick loop
//! then feeds terminal input through the controllers until stopped.
//!
//! # Example
//!
//! ```ignore
//! use flourish_tui::page;
//!
//! // Register elements first, then mount
//! let mut handle = page::mount()?;
//!
//! // Option 1: Run blocking event loop
//! page::run(&mut handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while page::tick(&mut handle)? {
//!     // Your logic here
//! }
//!
//! // Clean up
//! handle.unmount();
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::behavior::{PageBehaviors, PageContext};
use crate::events::input::{self, InputEvent};
use crate::events::keys::KeyEvent;

// =============================================================================
// Page Handle
// =============================================================================

/// Handle returned by mount() that owns the installed behaviors.
///
/// Holds the behavior controllers and the running flag (set to false on
/// Ctrl+C or [`PageHandle::stop`]).
pub struct PageHandle {
    behaviors: PageBehaviors,
    running: Arc<AtomicBool>,
}

impl PageHandle {
    /// Feed one already-converted event through the behaviors.
    ///
    /// Ctrl+C is intercepted here and stops the page instead of being
    /// dispatched.
    pub fn dispatch(&mut self, event: &InputEvent) {
        if let InputEvent::Key(key) = event {
            if is_interrupt(key) {
                debug!("interrupt received, stopping page");
                self.stop();
                return;
            }
        }
        self.behaviors.handle_event(event);
    }

    /// The installed behavior controllers.
    pub fn behaviors(&self) -> &PageBehaviors {
        &self.behaviors
    }

    /// Mutable access for hosts driving behaviors directly.
    pub fn behaviors_mut(&mut self) -> &mut PageBehaviors {
        &mut self.behaviors
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the page (sets running to false).
    /// Use this to trigger graceful shutdown from custom code.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop and release the terminal.
    pub fn unmount(self) {
        self.running.store(false, Ordering::SeqCst);
        let _ = input::disable_mouse();
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        // Release mouse capture on drop (best effort)
        let _ = input::disable_mouse();
    }
}

/// Whether a key event is the Ctrl+C interrupt.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.ctrl && key.key == "c"
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the page behaviors.
///
/// This sets up:
/// 1. Environment probing (motion preference, viewport capability)
/// 2. Every behavior controller present in the document
/// 3. Mouse capture
///
/// Elements must be registered before mounting; controllers bind to
/// them at install time. Returns a [`PageHandle`] for the event loop
/// and cleanup.
pub fn mount() -> io::Result<PageHandle> {
    mount_with(PageContext::probe())
}

/// Mount with an explicit context instead of probing the environment.
pub fn mount_with(ctx: PageContext) -> io::Result<PageHandle> {
    let behaviors = PageBehaviors::install(ctx);

    input::enable_mouse()?;

    Ok(PageHandle {
        behaviors,
        running: Arc::new(AtomicBool::new(true)),
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Call this in your main loop to process input events.
///
/// # Returns
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (Ctrl+C pressed or `handle.stop()` called)
/// * `Err(e)` - I/O error while polling
pub fn tick(handle: &mut PageHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Poll with short timeout (~60fps)
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        handle.dispatch(&event);
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
///
/// Blocks until Ctrl+C is pressed or `handle.stop()` is called from a
/// handler.
pub fn run(handle: &mut PageHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
