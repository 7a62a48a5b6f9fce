//! Inject Lab app - thin controller layer.
//!
//! Routes input to the dosing panel and the orbit camera, and keeps the
//! UI snapshot and frame state in sync.

use glam::Vec2;
use vivarium_core::viewer::lighting::DirectionalLight;
use vivarium_core::{
    button_style, tab_style, App, AppConfig, AppContext, Catalog, ClipPlayer, InjectPanel,
    InputEvent, InputQueue, ModelManifest, NodeId, OrbitCamera, PanelChange, TabId, UiEvent,
};

const VIEW_W: f32 = 800.0;
const VIEW_H: f32 = 600.0;

/// Radians of idle sway applied to the model root.
const SWAY_AMPLITUDE: f32 = 0.08;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const MODEL_JSON: &str = include_str!("../data/mouse-model.json");

/// Custom event kinds from the DOM UI.
mod events {
    pub const SELECT_COMPONENT: u32 = 1; // a = option index
    pub const SELECT_DOSE: u32 = 2; // a = option index
    pub const SET_TAB: u32 = 3; // a = tab index
    pub const INJECT: u32 = 4;
    pub const RESET_CAMERA: u32 = 5;
}

/// UI event kinds to the DOM paint layer.
mod ui_events {
    pub const TAB_CHANGED: f32 = 1.0; // a = tab index
    pub const COMPONENT_SELECTED: f32 = 2.0; // a = option index
    pub const DOSE_SELECTED: f32 = 3.0; // a = option index
    pub const INJECT_ENABLED: f32 = 4.0; // a = 0/1
    pub const MESSAGE_SHOWN: f32 = 5.0;
    pub const MESSAGE_HIDDEN: f32 = 6.0;
}

/// The injection simulator app.
pub struct InjectLab {
    panel: InjectPanel,
    camera: OrbitCamera,
    manifest: ModelManifest,
    player: Option<ClipPlayer>,
    model_root: Option<NodeId>,
    dragging: bool,
    last_pointer: Vec2,
}

impl InjectLab {
    pub fn new() -> Self {
        let catalog = Catalog::from_json(CATALOG_JSON)
            .expect("Failed to parse injection catalog");
        let panel = InjectPanel::new(&catalog)
            .expect("Injection catalog must have components and doses");
        let manifest = ModelManifest::from_json(MODEL_JSON)
            .expect("Failed to parse model manifest");

        Self {
            panel,
            camera: OrbitCamera::new(VIEW_W, VIEW_H),
            manifest,
            player: None,
            model_root: None,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Handle custom events from the DOM UI.
    fn handle_custom_event(&mut self, ctx: &mut AppContext, kind: u32, a: f32) {
        let changes = match kind {
            events::SELECT_COMPONENT => self.panel.select_component(a as usize),
            events::SELECT_DOSE => self.panel.select_dose(a as usize),
            events::SET_TAB => match TabId::from_index(a as u32) {
                Some(tab) => self.panel.set_active_tab(tab),
                None => {
                    log::warn!("unknown tab index {}", a);
                    Vec::new()
                }
            },
            events::INJECT => self.panel.trigger_inject(),
            events::RESET_CAMERA => {
                self.camera.reset();
                Vec::new()
            }
            _ => Vec::new(),
        };
        self.report(ctx, changes);
    }

    /// Forward panel changes to the paint layer as UI events.
    /// `b` carries the paint token for the element named by `a`; the DOM
    /// layer resets that element's siblings to the opposite token.
    fn report(&self, ctx: &mut AppContext, changes: Vec<PanelChange>) {
        for change in changes {
            let (kind, a, b) = match change {
                PanelChange::TabChanged(tab) => (
                    ui_events::TAB_CHANGED,
                    tab.index() as f32,
                    tab_style(true).token(),
                ),
                PanelChange::ComponentSelected(i) => (
                    ui_events::COMPONENT_SELECTED,
                    i as f32,
                    button_style(true).token(),
                ),
                PanelChange::DoseSelected(i) => (
                    ui_events::DOSE_SELECTED,
                    i as f32,
                    button_style(true).token(),
                ),
                PanelChange::EnablementChanged(on) => {
                    (ui_events::INJECT_ENABLED, if on { 1.0 } else { 0.0 }, 0.0)
                }
                PanelChange::MessageShown => (ui_events::MESSAGE_SHOWN, 0.0, 0.0),
                PanelChange::MessageHidden => (ui_events::MESSAGE_HIDDEN, 0.0, 0.0),
            };
            ctx.emit_ui(UiEvent { kind, a, b, c: 0.0 });
        }
    }

    /// Mirror panel state into the per-frame UI snapshot.
    fn sync_snapshot(&self, ctx: &mut AppContext) {
        ctx.ui.tab_active = self.panel.active_tab().index();
        ctx.ui.component_selected = self.panel.components().selected().map(|i| i as u32);
        ctx.ui.dose_selected = self.panel.doses().selected().map(|i| i as u32);
        ctx.ui.inject_enabled = self.panel.inject_enabled();
        ctx.ui.message_visible = self.panel.message_visible();
        if ctx.ui.message_text != self.panel.message_text() {
            ctx.ui.message_text = self.panel.message_text().to_string();
        }
    }
}

impl App for InjectLab {
    fn config(&self) -> AppConfig {
        AppConfig {
            viewport_width: VIEW_W,
            viewport_height: VIEW_H,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut AppContext) {
        self.model_root = Some(self.manifest.instantiate(ctx));

        // Lighting per the reference scene: soft white ambient plus one
        // directional key light from the upper front.
        ctx.lights.set_ambient([1.0, 1.0, 1.0], 0.6);
        ctx.lights.add_directional(DirectionalLight::new(
            glam::Vec3::new(2.0, 2.0, 5.0),
            [1.0, 1.0, 1.0],
            0.8,
        ));

        // Play the model's clip from the start, if it has one.
        self.player = self.manifest.clip.clone().map(ClipPlayer::new);

        self.sync_snapshot(ctx);
        ctx.view_proj = self.camera.view_proj();
    }

    fn update(&mut self, ctx: &mut AppContext, input: &InputQueue) {
        let dt = ctx.clock.dt();

        // Process input events
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = Vec2::new(x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let pos = Vec2::new(x, y);
                        let delta = pos - self.last_pointer;
                        self.camera.orbit(delta.x, delta.y);
                        self.last_pointer = pos;
                    }
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::Wheel { delta } => {
                    self.camera.zoom(delta);
                }
                InputEvent::Resize { width, height } => {
                    self.camera.set_viewport(width, height);
                }
                InputEvent::Custom { kind, a, .. } => {
                    self.handle_custom_event(ctx, kind, a);
                }
            }
        }

        // Advance the message auto-hide
        let hidden = self.panel.tick(dt);
        self.report(ctx, hidden);

        // Camera inertia
        self.camera.tick(dt);

        // Idle animation sways the model root
        if let (Some(player), Some(root)) = (self.player.as_mut(), self.model_root) {
            player.tick(dt);
            if let Some(node) = ctx.scene.get_mut(root) {
                node.rotation = player.sway_rotation(SWAY_AMPLITUDE);
            }
        }

        self.sync_snapshot(ctx);
        ctx.view_proj = self.camera.view_proj();
    }
}

impl Default for InjectLab {
    fn default() -> Self {
        Self::new()
    }
}
