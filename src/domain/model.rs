use image::Rgb;

/// Every generated icon is filled with this colour.
pub const FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// A square icon to generate: edge length in pixels and output filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }

    /// The fixed icon set, in creation order.
    pub fn defaults() -> Vec<IconSpec> {
        vec![
            IconSpec::new(192, "icon-192.png"),
            IconSpec::new(512, "icon-512.png"),
        ]
    }
}
