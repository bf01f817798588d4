/// Extensions accepted by the image chooser.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Get filter pattern for image formats with multiple options
///
/// Returns a multi-line filter string where each line is a separate filter option.
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
/// Note: FLTK automatically adds "All Files (*)" option, so we don't include it
pub fn get_image_files_filter_multiline() -> String {
    [
        format!("Images\t*.{{{}}}", IMAGE_EXTENSIONS.join(",")),
        "PNG Images\t*.png".to_string(),
        "JPEG Images\t*.{jpg,jpeg}".to_string(),
    ]
    .join("\n")
}
