use image::GenericImageView;
use lagoon_common::TextureSource;
use std::path::{Path, PathBuf};

/// Errors from decoding texture sources.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cubemap face {} is {width}x{height}, faces must be square", path.display())]
    CubemapNotSquare {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("cubemap face {} is {actual}px wide, expected {expected}px", path.display())]
    CubemapFaceMismatch {
        path: PathBuf,
        expected: u32,
        actual: u32,
    },
    #[error("failed to spawn decode thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// A 1x1 image of a single color, used while the real texture loads.
    pub fn solid(color: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: color.to_vec(),
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Six square faces of equal size in +X, -X, +Y, -Y, +Z, -Z order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCubemap {
    size: u32,
    faces: Vec<DecodedImage>,
}

impl DecodedCubemap {
    pub fn solid(color: [u8; 4]) -> Self {
        Self {
            size: 1,
            faces: vec![DecodedImage::solid(color); 6],
        }
    }

    /// Edge length of every face, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn faces(&self) -> &[DecodedImage] {
        &self.faces
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedTexture {
    Image(DecodedImage),
    Cubemap(DecodedCubemap),
}

impl DecodedTexture {
    /// Width and height of the image, or of one cubemap face.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            DecodedTexture::Image(image) => (image.width, image.height),
            DecodedTexture::Cubemap(cube) => (cube.size, cube.size),
        }
    }
}

/// Decode an image file into RGBA8.
pub fn decode_image(path: &Path) -> Result<DecodedImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    Ok(DecodedImage {
        width,
        height,
        pixels: img.to_rgba8().into_raw(),
    })
}

/// Decode six cubemap faces, checking they are square and equally sized.
pub fn decode_cubemap(paths: &[PathBuf; 6]) -> Result<DecodedCubemap, AssetError> {
    let mut faces = Vec::with_capacity(6);
    let mut size = 0;
    for (i, path) in paths.iter().enumerate() {
        let face = decode_image(path)?;
        if face.width != face.height {
            return Err(AssetError::CubemapNotSquare {
                path: path.clone(),
                width: face.width,
                height: face.height,
            });
        }
        if i == 0 {
            size = face.width;
        } else if face.width != size {
            return Err(AssetError::CubemapFaceMismatch {
                path: path.clone(),
                expected: size,
                actual: face.width,
            });
        }
        faces.push(face);
    }
    Ok(DecodedCubemap { size, faces })
}

pub fn decode_source(source: &TextureSource) -> Result<DecodedTexture, AssetError> {
    match source {
        TextureSource::Image(path) => decode_image(path).map(DecodedTexture::Image),
        TextureSource::Cubemap(paths) => decode_cubemap(paths).map(DecodedTexture::Cubemap),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    pub(crate) fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba(color))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn decodes_png_to_rgba8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "sand.png", 4, 2, [200, 180, 120, 255]);

        let image = decode_image(&path).unwrap();
        assert_eq!((image.width, image.height), (4, 2));
        assert_eq!(image.pixels.len(), 4 * 2 * 4);
        assert_eq!(&image.pixels[..4], &[200, 180, 120, 255]);
        assert_eq!(image.bytes_per_row(), 16);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = decode_image(Path::new("/nonexistent/Heightmap.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("Heightmap.png"));
    }

    #[test]
    fn decodes_six_equal_faces() {
        let dir = tempfile::tempdir().unwrap();
        let faces = ["right", "left", "top", "bottom", "front", "back"]
            .map(|name| write_png(dir.path(), &format!("{name}.png"), 8, 8, [10, 20, 30, 255]));

        let cube = decode_cubemap(&faces).unwrap();
        assert_eq!(cube.size(), 8);
        assert_eq!(cube.faces().len(), 6);
    }

    #[test]
    fn rejects_mismatched_faces() {
        let dir = tempfile::tempdir().unwrap();
        let mut faces = ["right", "left", "top", "bottom", "front", "back"]
            .map(|name| write_png(dir.path(), &format!("{name}.png"), 8, 8, [0, 0, 0, 255]));
        faces[3] = write_png(dir.path(), "small.png", 4, 4, [0, 0, 0, 255]);

        let err = decode_cubemap(&faces).unwrap_err();
        assert!(matches!(
            err,
            AssetError::CubemapFaceMismatch {
                expected: 8,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_square_face() {
        let dir = tempfile::tempdir().unwrap();
        let faces = ["right", "left", "top", "bottom", "front", "back"]
            .map(|name| write_png(dir.path(), &format!("{name}.png"), 8, 4, [0, 0, 0, 255]));

        let err = decode_cubemap(&faces).unwrap_err();
        assert!(matches!(err, AssetError::CubemapNotSquare { width: 8, height: 4, .. }));
    }

    #[test]
    fn solid_placeholders_are_one_pixel() {
        let image = DecodedImage::solid([0, 0, 0, 255]);
        assert_eq!((image.width, image.height), (1, 1));
        let cube = DecodedCubemap::solid([0, 0, 0, 255]);
        assert_eq!(cube.size(), 1);
        assert_eq!(cube.faces().len(), 6);
    }
}
