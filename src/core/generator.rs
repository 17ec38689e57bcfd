use crate::core::{IconSpec, Storage, FILL};
use crate::utils::error::{IconError, Result};
use crate::utils::validation::{validate_non_empty, validate_positive_number, Validate};
use image::RgbImage;
use std::io::{Cursor, Write};

impl Validate for IconSpec {
    fn validate(&self) -> Result<()> {
        validate_positive_number("size", self.size, 1)?;
        validate_non_empty("filename", &self.filename)?;
        Ok(())
    }
}

/// Allocates a `size`x`size` RGB buffer with every pixel set to [`FILL`].
pub fn render_icon(spec: &IconSpec) -> RgbImage {
    RgbImage::from_pixel(spec.size, spec.size, FILL)
}

/// Encodes `image` in the format implied by the extension of `filename`.
pub fn encode_icon(image: &RgbImage, filename: &str) -> Result<Vec<u8>> {
    let format =
        image::ImageFormat::from_path(filename).map_err(|e| IconError::image(filename, e))?;

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|e| IconError::image(filename, e))?;

    Ok(buffer.into_inner())
}

pub struct IconGenerator<S: Storage> {
    storage: S,
}

impl<S: Storage> IconGenerator<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn generate(&self, spec: &IconSpec) -> Result<()> {
        spec.validate()?;

        let image = render_icon(spec);
        let data = encode_icon(&image, &spec.filename)?;
        tracing::debug!(
            "Encoded {} ({}x{}, {} bytes)",
            spec.filename,
            spec.size,
            spec.size,
            data.len()
        );

        self.storage.write_file(&spec.filename, &data)
    }

    /// Generates each icon in order, writing `created <filename>` to `out`
    /// after each one. Stops at the first failure.
    pub fn run<W: Write>(&self, specs: &[IconSpec], out: &mut W) -> Result<Vec<String>> {
        let mut created = Vec::with_capacity(specs.len());

        for spec in specs {
            self.generate(spec)?;
            writeln!(out, "created {}", spec.filename)
                .map_err(|e| IconError::io("<stdout>", e))?;
            tracing::info!("Created {}", spec.filename);
            created.push(spec.filename.clone());
        }

        Ok(created)
    }
}
