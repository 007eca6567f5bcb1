//! Options for mesh building

/// Editor units are inches, meshes are in metres.
pub const INCHES_PER_METRE: f32 = 39.3701;

/// The most vertices a single buffer can address with 16 bit indices.
pub const MAX_BUFFER_VERTICES: usize = u16::MAX as usize + 1;

/// Configuration for building meshes from faces.
#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(public)]
pub struct MeshConfig {
    /// Multiplier applied to every vertex position.
    #[builder(default = "1.0 / INCHES_PER_METRE")]
    pub unit_scale: f32,

    /// Once a buffer would grow past this, faces go into a new buffer.
    /// Values above `MAX_BUFFER_VERTICES` are treated as `MAX_BUFFER_VERTICES`.
    #[builder(default = "MAX_BUFFER_VERTICES")]
    pub max_vertices_per_buffer: usize,
}

impl MeshConfig {
    /// The vertex limit actually used, always in `1..=MAX_BUFFER_VERTICES`.
    pub fn buffer_limit(&self) -> usize {
        self.max_vertices_per_buffer.clamp(1, MAX_BUFFER_VERTICES)
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        MeshConfig {
            unit_scale: 1.0 / INCHES_PER_METRE,
            max_vertices_per_buffer: MAX_BUFFER_VERTICES,
        }
    }
}

#[test]
fn builder_defaults_match_default() {
    let built = MeshConfigBuilder::default().build().unwrap();
    assert_eq!(built, MeshConfig::default());
}

#[test]
fn buffer_limit_clamped() {
    let config = MeshConfigBuilder::default()
        .max_vertices_per_buffer(1 << 20)
        .build()
        .unwrap();
    assert_eq!(config.buffer_limit(), MAX_BUFFER_VERTICES);

    let config = MeshConfigBuilder::default()
        .max_vertices_per_buffer(0)
        .build()
        .unwrap();
    assert_eq!(config.buffer_limit(), 1);
}
