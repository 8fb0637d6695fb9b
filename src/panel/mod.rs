// SPDX-License-Identifier: GPL-3.0-only

//! The extra keys panel component.
//!
//! [`ExtraKeysPanel`] owns the key registry, the toggle-key state and the
//! disclosure state. Every mutation repacks the rows and presents a fresh
//! frame to the render sink right away; there is no batching.
//!
//! # Example
//!
//! ```rust,ignore
//! use extra_keys::panel::{ExtraKeysPanel, PanelOptions};
//! use extra_keys::renderer::TextSink;
//!
//! let mut panel = ExtraKeysPanel::with_options(PanelOptions::default(), TextSink::new(std::io::stdout()));
//! panel.add_user_key(KeyDefinition::shortcut("|", "|", false));
//! panel.toggle_expanded();
//! ```
//!
//! # Threading
//!
//! The panel is driven from the UI thread only. Callers reloading
//! configuration from elsewhere must serialize access themselves.

// Sub-modules
pub mod state;

pub use state::{PanelMode, PanelState};

use crate::app_settings;
use crate::config::{ConfigLocator, ConfigParser, DefaultLocator};
use crate::keys::{KeyAction, KeyCode, KeyDefinition, KeyRegistry, Modifier, ModifierState};
use crate::layout::{pack_rows, Row};
use crate::renderer::{build_frame, Color, DisplayMetrics, Frame, PanelStyle, RenderSink};
use futures::channel::mpsc::UnboundedSender;
use std::path::Path;

/// Sequence sent to the terminal for Enter.
const ENTER: &str = "\r";

// ============================================================================
// Collaborators
// ============================================================================

/// Notifications posted by the panel to the rest of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The user asked to show or hide the soft keyboard.
    ToggleIme,
}

/// The application's top-level view, target of key clicks.
pub trait TerminalHost {
    /// Handles a control key such as Esc or an arrow.
    fn send_key(&mut self, code: &KeyCode);

    /// Types literal text.
    fn send_text(&mut self, text: &str);
}

/// Hardware/system keys the host forwards to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    /// Platform back/dismiss signal
    Back,
    /// Anything else
    Other,
}

/// Phase of a host key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    /// Key went down
    Down,
    /// Key went up
    Up,
}

/// Construction options for [`ExtraKeysPanel`].
pub struct PanelOptions {
    /// Display dimensions used for button sizing
    pub metrics: DisplayMetrics,
    /// Initial style
    pub style: PanelStyle,
    /// Where the default user key file lives
    pub locator: Box<dyn ConfigLocator>,
    /// Receiver side of panel notifications, if anyone listens
    pub events: Option<UnboundedSender<PanelEvent>>,
}

impl PanelOptions {
    /// Sets the display metrics.
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the initial style.
    pub fn with_style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the configuration locator.
    pub fn with_locator(mut self, locator: impl ConfigLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Sets the notification channel.
    pub fn with_events(mut self, events: UnboundedSender<PanelEvent>) -> Self {
        self.events = Some(events);
        self
    }
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            metrics: DisplayMetrics::default(),
            style: PanelStyle::default(),
            locator: Box::new(DefaultLocator),
            events: None,
        }
    }
}

// ============================================================================
// Panel
// ============================================================================

/// Strip of auxiliary terminal keys shown above the soft keyboard.
pub struct ExtraKeysPanel<S: RenderSink> {
    registry: KeyRegistry,
    modifiers: ModifierState,
    state: PanelState,
    rows: Vec<Row>,
    style: PanelStyle,
    metrics: DisplayMetrics,
    locator: Box<dyn ConfigLocator>,
    events: Option<UnboundedSender<PanelEvent>>,
    sink: S,
}

impl<S: RenderSink> ExtraKeysPanel<S> {
    /// Creates a panel with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(PanelOptions::default(), sink)
    }

    /// Creates a panel, loads the default user keys and presents the first frame.
    ///
    /// The panel starts collapsed.
    pub fn with_options(options: PanelOptions, sink: S) -> Self {
        let mut panel = Self {
            registry: KeyRegistry::with_builtin_keys(),
            modifiers: ModifierState::new(),
            state: PanelState::default(),
            rows: Vec::new(),
            style: options.style,
            metrics: options.metrics,
            locator: options.locator,
            events: options.events,
            sink,
        };

        panel.reload_user_keys();
        panel.update_buttons();
        panel.set_expanded(false);
        panel
    }

    // ------------------------------------------------------------------------
    // Key registry
    // ------------------------------------------------------------------------

    /// Adds a builtin key unless one with the same code exists.
    pub fn add_builtin_key(&mut self, key: KeyDefinition) -> bool {
        let added = self.registry.add_builtin(key);
        if added {
            self.update_buttons();
        }
        added
    }

    /// Adds a user key unless one with the same code exists.
    pub fn add_user_key(&mut self, key: KeyDefinition) -> bool {
        let added = self.registry.add_user(key);
        if added {
            self.update_buttons();
        }
        added
    }

    /// Removes every user key.
    pub fn clear_user_keys(&mut self) {
        self.registry.clear_user();
        self.update_buttons();
    }

    /// Reloads the user keys from the default configuration file.
    ///
    /// On any failure the user keys stay empty and the panel keeps working
    /// with its builtin keys. Returns `true` if the file was loaded.
    pub fn load_default_user_keys(&mut self) -> bool {
        let loaded = self.reload_user_keys();
        self.update_buttons();
        loaded
    }

    /// Reloads the user keys from `path`, with the same failure policy as
    /// [`load_default_user_keys`](Self::load_default_user_keys).
    pub fn load_user_keys_from(&mut self, path: &Path) -> bool {
        let loaded = self.replace_user_keys_from(path);
        self.update_buttons();
        loaded
    }

    fn reload_user_keys(&mut self) -> bool {
        match self.locator.locate() {
            Ok(path) => self.replace_user_keys_from(&path),
            Err(e) => {
                tracing::warn!("Ignoring user keys: {}", e);
                self.registry.clear_user();
                false
            }
        }
    }

    fn replace_user_keys_from(&mut self, path: &Path) -> bool {
        self.registry.clear_user();

        let mut parser = ConfigParser::new();
        parser.set_input(path);
        match parser.parse() {
            Ok(config) => {
                tracing::info!(
                    "Loaded {} user key(s) from {}",
                    config.shortcut_keys.len(),
                    path.display()
                );
                self.registry.replace_user(config.shortcut_keys);
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring user keys: {}", e);
                false
            }
        }
    }

    /// Keys currently registered.
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Repacks the rows and presents a new frame.
    pub fn update_buttons(&mut self) {
        self.rows = pack_rows(self.registry.effective(), app_settings::MAX_KEYS_PER_ROW);
        self.state.set_row_count(self.rows.len());
        tracing::debug!(
            "Packed {} key(s) into {} row(s)",
            self.registry.len(),
            self.rows.len()
        );
        self.present();
    }

    fn present(&mut self) {
        let frame = self.frame();
        self.sink.present(&frame);
    }

    /// Builds the frame for the current state without presenting it.
    pub fn frame(&self) -> Frame {
        build_frame(
            &self.rows,
            &self.state,
            &self.modifiers,
            &self.style,
            &self.metrics,
        )
    }

    /// Rows from the last repack, bottom row first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Sets the label color and re-renders.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.update_buttons();
    }

    /// Sets the label typeface and re-renders.
    pub fn set_typeface(&mut self, typeface: Option<String>) {
        self.style.typeface = typeface;
        self.update_buttons();
    }

    /// Sets the display metrics and re-renders.
    pub fn set_display_metrics(&mut self, metrics: DisplayMetrics) {
        self.metrics = metrics;
        self.update_buttons();
    }

    /// Current style.
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The render sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ------------------------------------------------------------------------
    // Disclosure state
    // ------------------------------------------------------------------------

    /// Disclosure state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Flips between collapsed and expanded. No-op with two rows or fewer.
    pub fn toggle_expanded(&mut self) -> bool {
        let changed = self.state.toggle();
        if changed {
            self.present();
        }
        changed
    }

    /// Expands or collapses the panel. No-op with two rows or fewer.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.state.set_expanded(expanded);
        if changed {
            self.present();
        }
        changed
    }

    /// Handles a host key event.
    ///
    /// Returns `true` if the event was consumed: only a back press while
    /// expanded is, and it collapses the panel.
    pub fn on_host_key(&mut self, key: HostKey, phase: KeyPhase) -> bool {
        if key != HostKey::Back || phase != KeyPhase::Down {
            return false;
        }
        let consumed = self.state.handle_back();
        if consumed {
            self.present();
        }
        consumed
    }

    // ------------------------------------------------------------------------
    // Toggle keys
    // ------------------------------------------------------------------------

    /// Reads and releases the Ctrl toggle key.
    pub fn read_ctrl(&mut self) -> bool {
        self.read_modifier(Modifier::Ctrl)
    }

    /// Reads and releases the Alt toggle key.
    pub fn read_alt(&mut self) -> bool {
        self.read_modifier(Modifier::Alt)
    }

    fn read_modifier(&mut self, modifier: Modifier) -> bool {
        let pressed = self.modifiers.read(modifier);
        if pressed {
            self.present();
        }
        pressed
    }

    /// Toggle-key state without releasing anything.
    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    // ------------------------------------------------------------------------
    // Clicks
    // ------------------------------------------------------------------------

    /// Activates the button for `code` against the application view `host`.
    ///
    /// Pulses haptic feedback first, then runs the key's action. Returns
    /// `false` if no key with that code is registered.
    pub fn click(&mut self, code: &KeyCode, host: &mut dyn TerminalHost) -> bool {
        let Some(action) = self.registry.find(code).map(|key| key.action().clone()) else {
            tracing::debug!("Click on unknown key {}", code);
            return false;
        };

        self.sink.haptic_tap();

        match action {
            KeyAction::Control(code) => host.send_key(&code),
            KeyAction::Text { text, with_enter } => {
                if with_enter {
                    host.send_text(&format!("{}{}", text, ENTER));
                } else {
                    host.send_text(&text);
                }
            }
            KeyAction::Stated(modifier) => {
                let pressed = self.modifiers.toggle(modifier);
                tracing::debug!("{:?} toggled to {}", modifier, pressed);
                self.present();
            }
            KeyAction::ToggleIme => self.post_event(PanelEvent::ToggleIme),
            KeyAction::ExpandPanel => {
                self.toggle_expanded();
            }
        }
        true
    }

    fn post_event(&self, event: PanelEvent) {
        match &self.events {
            Some(events) => {
                if let Err(e) = events.unbounded_send(event) {
                    tracing::debug!("Dropped {:?}: {}", event, e);
                }
            }
            None => tracing::debug!("No listener for {:?}", event),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
