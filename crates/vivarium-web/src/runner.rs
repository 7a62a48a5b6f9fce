use vivarium_core::bridge::protocol::{
    self, FrameLayout, CAMERA_FLOATS, EVENT_FLOATS, LIGHT_FLOATS, NODE_FLOATS,
};
use vivarium_core::{App, AppConfig, AppContext, InputEvent, InputQueue, NodeId};

/// Generic app runner that wires up the frame loop.
///
/// Each concrete app (e.g., `inject-lab`) creates a `thread_local!`
/// AppRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: AppContext,
    input: InputQueue,
    config: AppConfig,
    layout: FrameLayout,
    /// Flat frame buffer for SharedArrayBuffer reads.
    frame: Vec<f32>,
    frame_counter: f32,
    viewport: (f32, f32),
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = FrameLayout::from_config(&config);
        let frame = vec![0.0; layout.buffer_total_floats];
        let viewport = (config.viewport_width, config.viewport_height);

        Self {
            app,
            ctx: AppContext::new(),
            input: InputQueue::new(),
            config,
            layout,
            frame,
            frame_counter: 0.0,
            viewport,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = FrameLayout::from_config(&self.config);
        self.frame = vec![0.0; self.layout.buffer_total_floats];
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.viewport = (width, height);
        }
        self.input.push(event);
    }

    /// Run one frame tick: update the app, then pack the frame buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.clock.advance(dt);

        self.app.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.frame_counter += 1.0;
        self.pack_frame();
    }

    /// Serialize header, camera, nodes, lights, and UI events into the
    /// flat float buffer TypeScript reads.
    fn pack_frame(&mut self) {
        let layout = &self.layout;
        let frame = &mut self.frame;

        // -- Nodes --
        // Slot order is iteration order; parents are referenced by slot.
        let slots: Vec<NodeId> = self.ctx.scene.iter().map(|n| n.id).collect();
        let node_count = slots.len().min(layout.max_nodes);
        if slots.len() > layout.max_nodes {
            log::warn!(
                "scene has {} nodes, buffer holds {}; truncating",
                slots.len(),
                layout.max_nodes
            );
        }
        for (slot, node) in self.ctx.scene.iter().take(node_count).enumerate() {
            let parent_slot = node
                .parent
                .and_then(|p| slots.iter().position(|&id| id == p))
                .map(|i| i as f32)
                .unwrap_or(-1.0);
            let mesh = node.mesh.map(|m| m as f32).unwrap_or(-1.0);
            let base = layout.node_data_offset + slot * NODE_FLOATS;
            let (t, q, s) = (node.translation, node.rotation, node.scale);
            frame[base..base + NODE_FLOATS].copy_from_slice(&[
                parent_slot,
                mesh,
                t.x,
                t.y,
                t.z,
                q.x,
                q.y,
                q.z,
                q.w,
                s.x,
                s.y,
                s.z,
            ]);
        }

        // -- Lights (slot 0 is the ambient term) --
        let mut light_count = 0;
        if layout.max_lights > 0 {
            let base = layout.light_data_offset;
            frame[base..base + LIGHT_FLOATS].copy_from_slice(&self.ctx.lights.ambient_record());
            light_count = 1;
            for light in self
                .ctx
                .lights
                .directionals()
                .iter()
                .take(layout.max_lights - 1)
            {
                let base = layout.light_data_offset + light_count * LIGHT_FLOATS;
                frame[base..base + LIGHT_FLOATS].copy_from_slice(&light.to_floats());
                light_count += 1;
            }
        }

        // -- Camera --
        let cam = self.ctx.view_proj.to_cols_array();
        frame[layout.camera_offset..layout.camera_offset + CAMERA_FLOATS].copy_from_slice(&cam);

        // -- UI events --
        let event_count = self.ctx.ui_events.len().min(layout.max_ui_events);
        for (i, event) in self.ctx.ui_events.iter().take(event_count).enumerate() {
            let base = layout.event_data_offset + i * EVENT_FLOATS;
            frame[base..base + EVENT_FLOATS]
                .copy_from_slice(&[event.kind, event.a, event.b, event.c]);
        }

        // -- Header --
        frame[protocol::HEADER_PROTOCOL_VERSION] = protocol::PROTOCOL_VERSION;
        frame[protocol::HEADER_FRAME_COUNTER] = self.frame_counter;
        frame[protocol::HEADER_NODE_COUNT] = node_count as f32;
        frame[protocol::HEADER_MAX_NODES] = layout.max_nodes as f32;
        frame[protocol::HEADER_LIGHT_COUNT] = light_count as f32;
        frame[protocol::HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        frame[protocol::HEADER_EVENT_COUNT] = event_count as f32;
        frame[protocol::HEADER_MAX_EVENTS] = layout.max_ui_events as f32;
        frame[protocol::HEADER_VIEWPORT_WIDTH] = self.viewport.0;
        frame[protocol::HEADER_VIEWPORT_HEIGHT] = self.viewport.1;
        frame[protocol::HEADER_TAB_ACTIVE] = self.ctx.ui.tab_active as f32;
        frame[protocol::HEADER_INJECT_ENABLED] = if self.ctx.ui.inject_enabled { 1.0 } else { 0.0 };
        frame[protocol::HEADER_MESSAGE_VISIBLE] =
            if self.ctx.ui.message_visible { 1.0 } else { 0.0 };
        frame[protocol::HEADER_COMPONENT_SELECTED] = self
            .ctx
            .ui
            .component_selected
            .map(|i| i as f32)
            .unwrap_or(-1.0);
        frame[protocol::HEADER_DOSE_SELECTED] = self
            .ctx
            .ui
            .dose_selected
            .map(|i| i as f32)
            .unwrap_or(-1.0);
    }

    // ---- Accessors for SharedArrayBuffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn node_count(&self) -> u32 {
        self.frame[protocol::HEADER_NODE_COUNT] as u32
    }

    pub fn light_count(&self) -> u32 {
        self.frame[protocol::HEADER_LIGHT_COUNT] as u32
    }

    pub fn ui_event_count(&self) -> u32 {
        self.frame[protocol::HEADER_EVENT_COUNT] as u32
    }

    pub fn max_nodes(&self) -> u32 {
        self.layout.max_nodes as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_ui_events(&self) -> u32 {
        self.layout.max_ui_events as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport.0
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.1
    }

    /// Current status message text (crosses the boundary as a JS string,
    /// not through the float buffer).
    pub fn message_text(&self) -> &str {
        &self.ctx.ui.message_text
    }

    /// Selected component index, or -1 while unset.
    pub fn component_selected(&self) -> i32 {
        self.ctx.ui.component_selected.map(|i| i as i32).unwrap_or(-1)
    }

    /// Selected dose index, or -1 while unset.
    pub fn dose_selected(&self) -> i32 {
        self.ctx.ui.dose_selected.map(|i| i as i32).unwrap_or(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use vivarium_core::viewer::lighting::DirectionalLight;
    use vivarium_core::{Node, UiEvent};

    /// Minimal app: one mesh node under a root, one light, a UI snapshot.
    struct TestApp;

    impl App for TestApp {
        fn config(&self) -> AppConfig {
            AppConfig {
                max_nodes: 4,
                max_lights: 2,
                max_ui_events: 4,
                ..AppConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut AppContext) {
            let root = ctx.next_id();
            ctx.scene.spawn(Node::new(root).with_name("root"));
            let child = ctx.next_id();
            ctx.scene.spawn(
                Node::new(child)
                    .with_parent(root)
                    .with_mesh(0)
                    .with_translation(Vec3::new(0.0, -0.5, 0.0)),
            );
            ctx.lights.set_ambient([1.0, 1.0, 1.0], 0.6);
            ctx.lights.add_directional(DirectionalLight::new(
                Vec3::new(2.0, 2.0, 5.0),
                [1.0, 1.0, 1.0],
                0.8,
            ));
        }

        fn update(&mut self, ctx: &mut AppContext, _input: &InputQueue) {
            ctx.ui.tab_active = 1;
            ctx.ui.inject_enabled = true;
            ctx.ui.message_visible = false;
            ctx.emit_ui(UiEvent {
                kind: 4.0,
                a: 1.0,
                b: 0.0,
                c: 0.0,
            });
        }
    }

    #[test]
    fn tick_packs_header_and_sections() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        runner.tick(1.0 / 60.0);

        assert_eq!(runner.node_count(), 2);
        assert_eq!(runner.light_count(), 2); // ambient + directional
        assert_eq!(runner.ui_event_count(), 1);

        let frame = &runner.frame;
        assert_eq!(frame[protocol::HEADER_PROTOCOL_VERSION], 1.0);
        assert_eq!(frame[protocol::HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(frame[protocol::HEADER_TAB_ACTIVE], 1.0);
        assert_eq!(frame[protocol::HEADER_INJECT_ENABLED], 1.0);
        assert_eq!(frame[protocol::HEADER_MESSAGE_VISIBLE], 0.0);
        // No selections in the test app
        assert_eq!(frame[protocol::HEADER_COMPONENT_SELECTED], -1.0);
        assert_eq!(frame[protocol::HEADER_DOSE_SELECTED], -1.0);
        assert_eq!(runner.component_selected(), -1);
    }

    #[test]
    fn child_references_parent_slot() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        runner.tick(1.0 / 60.0);

        let layout = FrameLayout::from_config(&TestApp.config());
        // Slot 0 is the root (no parent), slot 1 the child.
        let root_base = layout.node_data_offset;
        let child_base = layout.node_data_offset + NODE_FLOATS;
        assert_eq!(runner.frame[root_base], -1.0);
        assert_eq!(runner.frame[root_base + 1], -1.0); // no mesh
        assert_eq!(runner.frame[child_base], 0.0); // parent slot
        assert_eq!(runner.frame[child_base + 1], 0.0); // mesh 0
        assert_eq!(runner.frame[child_base + 3], -0.5); // ty
    }

    #[test]
    fn resize_updates_viewport_header() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        runner.push_input(InputEvent::Resize {
            width: 1024.0,
            height: 768.0,
        });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.frame[protocol::HEADER_VIEWPORT_WIDTH], 1024.0);
        assert_eq!(runner.frame[protocol::HEADER_VIEWPORT_HEIGHT], 768.0);
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = AppRunner::new(TestApp);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.node_count(), 0);
    }
}
