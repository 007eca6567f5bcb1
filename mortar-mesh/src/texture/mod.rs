//! Finding out how big textures are

mod resolver;

pub use self::resolver::FsTextureProvider;

/// Width and height of the placeholder used when a texture can't be found.
pub const FALLBACK_SIZE: u32 = 64;

/// A texture that has been looked up, and how big it is in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTexture<H> {
    pub width: u32,
    pub height: u32,
    pub handle: H,
}

/// An object that can be used to look up textures by name.
///
/// Lookup never fails: if a texture can't be found, a placeholder of a known,
/// non-zero size should be returned instead.
pub trait TextureProvider {
    type Handle;

    fn resolve(&mut self, name: &str) -> ResolvedTexture<Self::Handle>;
}

/// Resolves every name to the same size, with no handle.
/// Useful when only geometry is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizeProvider {
    pub width: u32,
    pub height: u32,
}

impl Default for FixedSizeProvider {
    fn default() -> Self {
        FixedSizeProvider {
            width: FALLBACK_SIZE,
            height: FALLBACK_SIZE,
        }
    }
}

impl TextureProvider for FixedSizeProvider {
    type Handle = ();

    fn resolve(&mut self, _name: &str) -> ResolvedTexture<()> {
        ResolvedTexture {
            width: self.width,
            height: self.height,
            handle: (),
        }
    }
}
