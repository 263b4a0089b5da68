//! Pure path composition and decomposition. Nothing here touches the host
//! file tree; the rules are those of `std::path` for the build target.

use std::path::Path;

use crate::host::{path_to_text, text_to_path};
use crate::text::Text;

/// Join two paths under host rules. An absolute `rhs` replaces `lhs`.
pub fn join(lhs: impl AsRef<[u8]>, rhs: impl AsRef<[u8]>) -> Text {
    let lhs = text_to_path(lhs.as_ref());
    path_to_text(&lhs.join(text_to_path(rhs.as_ref())))
}

/// Join every part left to right. No parts gives empty text.
pub fn join_all<P: AsRef<[u8]>>(parts: &[P]) -> Text {
    let mut buf = std::path::PathBuf::new();
    for part in parts {
        buf.push(text_to_path(part.as_ref()));
    }
    path_to_text(&buf)
}

/// The extension including its dot (`"a/b.tar.gz"` gives `".gz"`); empty
/// when there is none. Leading-dot names such as `".profile"` have none.
pub fn extension(path: impl AsRef<[u8]>) -> Text {
    let path = text_to_path(path.as_ref());
    match path.extension() {
        Some(ext) => {
            let ext = path_to_text(Path::new(ext));
            Text::concat_many(&[&b"."[..], ext.as_bytes()])
        }
        None => Text::new(),
    }
}

/// The final component, empty for roots and for paths ending in `..`.
pub fn filename(path: impl AsRef<[u8]>) -> Text {
    let path = text_to_path(path.as_ref());
    path.file_name()
        .map(|name| path_to_text(Path::new(name)))
        .unwrap_or_default()
}

/// Everything before the final component, empty for roots and bare names.
pub fn parent(path: impl AsRef<[u8]>) -> Text {
    let path = text_to_path(path.as_ref());
    path.parent().map(path_to_text).unwrap_or_default()
}

/// The file name without its extension.
pub fn stem(path: impl AsRef<[u8]>) -> Text {
    let path = text_to_path(path.as_ref());
    path.file_stem()
        .map(|name| path_to_text(Path::new(name)))
        .unwrap_or_default()
}

pub fn is_absolute(path: impl AsRef<[u8]>) -> bool {
    text_to_path(path.as_ref()).is_absolute()
}
