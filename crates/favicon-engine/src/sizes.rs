//! Output file names and edge lengths for generated favicons.

/// One favicon output: file name and square edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaviconSize {
    pub file_name: &'static str,
    pub edge: u32,
}

/// Favicon outputs in generation order.
pub const FAVICON_SIZES: [FaviconSize; 3] = [
    FaviconSize {
        file_name: "favicon.png",
        edge: 64,
    },
    FaviconSize {
        file_name: "favicon-32x32.png",
        edge: 32,
    },
    FaviconSize {
        file_name: "favicon-16x16.png",
        edge: 16,
    },
];
