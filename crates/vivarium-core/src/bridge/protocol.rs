/// Frame buffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 16 floats — column-major view-projection matrix]
/// [Nodes: max_nodes × 12 floats]
/// [Lights: max_lights × 8 floats — slot 0 is the ambient term]
/// [UI events: max_ui_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_NODE_COUNT: usize = 2;
pub const HEADER_MAX_NODES: usize = 3;
pub const HEADER_LIGHT_COUNT: usize = 4;
pub const HEADER_MAX_LIGHTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_VIEWPORT_WIDTH: usize = 8;
pub const HEADER_VIEWPORT_HEIGHT: usize = 9;
pub const HEADER_TAB_ACTIVE: usize = 10;
pub const HEADER_INJECT_ENABLED: usize = 11;
pub const HEADER_MESSAGE_VISIBLE: usize = 12;
/// Selected option indices, -1 while unset.
pub const HEADER_COMPONENT_SELECTED: usize = 13;
pub const HEADER_DOSE_SELECTED: usize = 14;
// 15 reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per camera section: one column-major Mat4 (wire format — never changes).
pub const CAMERA_FLOATS: usize = 16;

/// Floats per scene node (wire format — never changes):
/// `[parent_slot, mesh, tx, ty, tz, qx, qy, qz, qw, sx, sy, sz]`
/// with -1 for "no parent" / "no mesh".
pub const NODE_FLOATS: usize = 12;

/// Floats per light record: kind, x, y, z, r, g, b, intensity.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per UI event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Maximum scene nodes.
    pub max_nodes: usize,
    /// Maximum light records.
    pub max_lights: usize,
    /// Maximum UI events per frame.
    pub max_ui_events: usize,

    /// Size of the node section in floats.
    pub node_data_floats: usize,
    /// Size of the light section in floats.
    pub light_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where the camera matrix begins.
    pub camera_offset: usize,
    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_nodes: usize, max_lights: usize, max_ui_events: usize) -> Self {
        let node_data_floats = max_nodes * NODE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_ui_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let node_data_offset = camera_offset + CAMERA_FLOATS;
        let light_data_offset = node_data_offset + node_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_nodes,
            max_lights,
            max_ui_events,
            node_data_floats,
            light_data_floats,
            event_data_floats,
            camera_offset,
            node_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_nodes, config.max_lights, config.max_ui_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = FrameLayout::from_config(&AppConfig::default());

        assert_eq!(layout.max_nodes, 64);
        assert_eq!(layout.max_lights, 8);
        assert_eq!(layout.max_ui_events, 32);

        assert_eq!(layout.node_data_floats, 64 * 12);
        assert_eq!(layout.light_data_floats, 8 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);

        let expected_total = HEADER_FLOATS + CAMERA_FLOATS + 64 * 12 + 8 * 8 + 32 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = FrameLayout::new(10, 3, 5);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.node_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(
            layout.light_data_offset,
            layout.node_data_offset + layout.node_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.light_data_offset + layout.light_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }

    #[test]
    fn header_fields_fit_in_header() {
        assert!(HEADER_MESSAGE_VISIBLE < HEADER_FLOATS);
    }
}
