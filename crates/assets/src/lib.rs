//! Texture decoding and background loading.
//!
//! Textures are created empty on the GPU and filled whenever their decode
//! finishes. This crate owns the decode half: it turns image files into
//! tightly packed RGBA8 and hands them back over a channel.
//!
//! # Invariants
//! - A decoded cubemap always has six square faces of one size.
//! - The loader never blocks the caller unless asked to via [`TextureLoader::wait`].

mod decode;
mod loader;

pub use decode::{
    AssetError, DecodedCubemap, DecodedImage, DecodedTexture, decode_cubemap, decode_image,
    decode_source,
};
pub use loader::{LoadEvent, TextureLoader};

pub fn crate_info() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().starts_with("lagoon-"));
    }
}
