//! Filename rules for compression output.
//!
//! Input names decide two things: whether a file is accepted for compression
//! at all (by extension), and the name its JPEG gets inside the archive.

use std::collections::HashSet;

/// Extensions accepted by the compressor, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Name used when an input has no usable stem/extension split.
pub const DEFAULT_OUTPUT_FILENAME: &str = "compressed_image.jpg";

const OUTPUT_SUFFIX: &str = "_compressed";

/// Whether `filename` ends in `.png`, `.jpg` or `.jpeg`, ignoring case.
pub fn has_supported_extension(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Derive the archive entry name for an input file.
///
/// The last extension is replaced: `photo.png` becomes
/// `photo_compressed.jpg` and `a.b.jpeg` becomes `a.b_compressed.jpg`.
/// Empty names and names without a dot fall back to
/// [`DEFAULT_OUTPUT_FILENAME`].
pub fn output_filename(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}{OUTPUT_SUFFIX}.jpg"),
        None => DEFAULT_OUTPUT_FILENAME.to_string(),
    }
}

/// Hands out unique archive entry names.
///
/// The first request for a name returns it unchanged; later requests for the
/// same name get `_1`, `_2`, ... inserted before the `.jpg` extension.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, or the first free numbered variant of it.
    pub fn claim(&mut self, name: String) -> String {
        if self.taken.insert(name.clone()) {
            return name;
        }

        let (stem, ext) = match name.rsplit_once('.') {
            Some((stem, ext)) => (stem.to_string(), format!(".{ext}")),
            None => (name.clone(), String::new()),
        };

        let mut n = 1usize;
        loop {
            let candidate = format!("{stem}_{n}{ext}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
