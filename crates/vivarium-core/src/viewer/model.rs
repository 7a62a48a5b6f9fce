//! Model manifest: where the original page hands a binary asset to a
//! loader, the headless side works from a JSON description of the model's
//! node layout. The paint layer loads the matching mesh data itself; the
//! two sides agree on mesh indices.

use glam::Vec3;
use serde::Deserialize;

use crate::api::app::AppContext;
use crate::api::types::NodeId;
use crate::viewer::animation::ClipDescriptor;
use crate::viewer::scene::Node;

/// One mesh node in the model.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    /// Mesh index the paint layer resolves.
    pub mesh: u32,
    /// Translation relative to the model root.
    #[serde(default)]
    pub translation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Describes a model: root transform, mesh nodes, optional animation clip.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelManifest {
    pub name: String,
    /// Uniform scale applied at the root (default: 1).
    #[serde(default = "default_root_scale")]
    pub scale: f32,
    /// Root offset in world space.
    #[serde(default)]
    pub offset: [f32; 3],
    pub nodes: Vec<NodeDescriptor>,
    /// Animation clip to play on load, if the model has one.
    #[serde(default)]
    pub clip: Option<ClipDescriptor>,
}

fn default_root_scale() -> f32 {
    1.0
}

impl ModelManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn the model into the scene: one root grouping node carrying
    /// the manifest transform, mesh nodes parented under it.
    /// Returns the root node's ID.
    pub fn instantiate(&self, ctx: &mut AppContext) -> NodeId {
        let root_id = ctx.next_id();
        let root = Node::new(root_id)
            .with_name(&self.name)
            .with_translation(Vec3::from_array(self.offset))
            .with_scale(Vec3::splat(self.scale));
        ctx.scene.spawn(root);

        for desc in &self.nodes {
            let id = ctx.next_id();
            let node = Node::new(id)
                .with_name(&desc.name)
                .with_parent(root_id)
                .with_translation(Vec3::from_array(desc.translation))
                .with_scale(Vec3::from_array(desc.scale))
                .with_mesh(desc.mesh);
            ctx.scene.spawn(node);
        }

        log::info!(
            "model '{}': {} mesh nodes, clip: {}",
            self.name,
            self.nodes.len(),
            self.clip.as_ref().map(|c| c.name.as_str()).unwrap_or("none")
        );
        root_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "name": "mouse",
        "scale": 0.25,
        "offset": [0.0, -0.5, 0.0],
        "nodes": [
            { "name": "body", "mesh": 0 },
            { "name": "head", "mesh": 1, "translation": [0.0, 0.4, 0.9] }
        ],
        "clip": { "name": "Idle", "duration": 2.4 }
    }"#;

    #[test]
    fn parse_manifest() {
        let m = ModelManifest::from_json(MANIFEST).unwrap();
        assert_eq!(m.name, "mouse");
        assert_eq!(m.scale, 0.25);
        assert_eq!(m.nodes.len(), 2);
        let clip = m.clip.as_ref().unwrap();
        assert_eq!(clip.name, "Idle");
        assert!(clip.looping); // defaulted
    }

    #[test]
    fn parse_minimal_manifest() {
        let m = ModelManifest::from_json(r#"{ "name": "cube", "nodes": [] }"#).unwrap();
        assert_eq!(m.scale, 1.0);
        assert_eq!(m.offset, [0.0, 0.0, 0.0]);
        assert!(m.clip.is_none());
    }

    #[test]
    fn instantiate_spawns_root_and_children() {
        let m = ModelManifest::from_json(MANIFEST).unwrap();
        let mut ctx = AppContext::new();
        let root = m.instantiate(&mut ctx);

        assert_eq!(ctx.scene.len(), 3);
        let root_node = ctx.scene.get(root).unwrap();
        assert_eq!(root_node.mesh, None);
        assert_eq!(root_node.scale, Vec3::splat(0.25));
        assert_eq!(root_node.translation, Vec3::new(0.0, -0.5, 0.0));

        let head = ctx.scene.find_by_name("head").unwrap();
        assert_eq!(head.parent, Some(root));
        assert_eq!(head.mesh, Some(1));
    }
}
