use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::infrastructure::file_filters::get_image_files_filter_multiline;

pub fn native_image_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Choose Image");
    nfc.set_filter(&get_image_files_filter_multiline());
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
