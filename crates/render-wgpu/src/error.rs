use lagoon_common::TextureSlot;
use lagoon_render::MeshError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("texture slot {slot} expects {expected} data, got {actual}")]
    TextureKind {
        slot: TextureSlot,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("texture {slot} is {width}x{height}, device limit is {max}")]
    TextureTooLarge {
        slot: TextureSlot,
        width: u32,
        height: u32,
        max: u32,
    },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
