/// Fixed lighting rig for the viewer: one ambient term plus any number of
/// directional lights. Lights are persistent — set up once at init, then
/// serialized into the frame buffer every frame for the shading pass.

use glam::Vec3;

/// Light kinds in the wire format.
/// The ambient term travels as the first light record, kind 0.
pub const LIGHT_KIND_AMBIENT: f32 = 0.0;
pub const LIGHT_KIND_DIRECTIONAL: f32 = 1.0;

/// A directional light.
///
/// Wire format (8 floats / 32 bytes):
/// `[kind, x, y, z, r, g, b, intensity]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Position the light shines from, toward the origin.
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(position: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Serialize to the 8-float wire record.
    pub fn to_floats(&self) -> [f32; 8] {
        [
            LIGHT_KIND_DIRECTIONAL,
            self.position.x,
            self.position.y,
            self.position.z,
            self.color[0],
            self.color[1],
            self.color[2],
            self.intensity,
        ]
    }
}

/// Ambient color plus directional lights for the scene.
pub struct LightRig {
    directionals: Vec<DirectionalLight>,
    ambient_color: [f32; 3],
    ambient_intensity: f32,
}

impl LightRig {
    pub fn new() -> Self {
        Self {
            directionals: Vec::new(),
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 1.0,
        }
    }

    /// Set the ambient term.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
    }

    /// Add a directional light. Returns its index.
    pub fn add_directional(&mut self, light: DirectionalLight) -> usize {
        self.directionals.push(light);
        self.directionals.len() - 1
    }

    pub fn directionals(&self) -> &[DirectionalLight] {
        &self.directionals
    }

    pub fn ambient_color(&self) -> [f32; 3] {
        self.ambient_color
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    pub fn len(&self) -> usize {
        self.directionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directionals.is_empty()
    }

    pub fn clear(&mut self) {
        self.directionals.clear();
    }

    /// Ambient wire record: `[kind, 0, 0, 0, r, g, b, intensity]`.
    pub fn ambient_record(&self) -> [f32; 8] {
        [
            LIGHT_KIND_AMBIENT,
            0.0,
            0.0,
            0.0,
            self.ambient_color[0],
            self.ambient_color[1],
            self.ambient_color[2],
            self.ambient_intensity,
        ]
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_wire_record() {
        let light = DirectionalLight::new(Vec3::new(2.0, 2.0, 5.0), [1.0, 1.0, 1.0], 0.8);
        let rec = light.to_floats();
        assert_eq!(rec[0], LIGHT_KIND_DIRECTIONAL);
        assert_eq!(&rec[1..4], &[2.0, 2.0, 5.0]);
        assert_eq!(rec[7], 0.8);
    }

    #[test]
    fn rig_holds_lights_and_ambient() {
        let mut rig = LightRig::new();
        rig.set_ambient([1.0, 1.0, 1.0], 0.6);
        rig.add_directional(DirectionalLight::new(
            Vec3::new(2.0, 2.0, 5.0),
            [1.0, 1.0, 1.0],
            0.8,
        ));
        assert_eq!(rig.len(), 1);
        assert_eq!(rig.ambient_intensity(), 0.6);
    }
}
