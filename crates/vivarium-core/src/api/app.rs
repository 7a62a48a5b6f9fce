use glam::Mat4;

use crate::api::types::{NodeId, UiEvent};
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::viewer::lighting::LightRig;
use crate::viewer::scene::SceneGraph;

/// Configuration for the viewer runtime, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial canvas width in CSS pixels.
    pub viewport_width: f32,
    /// Initial canvas height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of scene nodes in the frame buffer (default: 64).
    pub max_nodes: usize,
    /// Maximum number of lights in the frame buffer (default: 8).
    pub max_lights: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_ui_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_nodes: 64,
            max_lights: 8,
            max_ui_events: 32,
        }
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return runtime configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: spawn model nodes, configure lights.
    fn init(&mut self, ctx: &mut AppContext);

    /// The per-frame tick. Handle input, advance timers, update the
    /// camera matrix and UI snapshot. Frame delta is on `ctx.clock`.
    fn update(&mut self, ctx: &mut AppContext, input: &InputQueue);
}

/// Snapshot of the UI-visible controller state, rewritten every frame and
/// mirrored into the frame buffer header for the paint layer.
#[derive(Debug, Clone, Default)]
pub struct UiSnapshot {
    /// Index of the active tab.
    pub tab_active: u32,
    /// Selected component index, if any.
    pub component_selected: Option<u32>,
    /// Selected dose index, if any.
    pub dose_selected: Option<u32>,
    /// Whether the inject action is currently permitted.
    pub inject_enabled: bool,
    /// Whether the status message is showing.
    pub message_visible: bool,
    /// Current status message text (read via a string accessor, not the
    /// float buffer).
    pub message_text: String,
}

/// Mutable access to runtime state, passed to App::init and App::update.
pub struct AppContext {
    pub scene: SceneGraph,
    pub lights: LightRig,
    pub clock: FrameClock,
    pub ui: UiSnapshot,
    pub ui_events: Vec<UiEvent>,
    /// View-projection matrix for the frame, set by the app each update.
    pub view_proj: Mat4,
    next_id: u32,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            lights: LightRig::new(),
            clock: FrameClock::new(),
            ui: UiSnapshot::default(),
            ui_events: Vec::new(),
            view_proj: Mat4::IDENTITY,
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to TypeScript.
    pub fn emit_ui(&mut self, event: UiEvent) {
        self.ui_events.push(event);
    }

    /// Clear per-frame transient data (UI events).
    pub fn clear_frame_data(&mut self) {
        self.ui_events.clear();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
