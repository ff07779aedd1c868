//! Theme Handling
//!
//! Reads the OS color-scheme preference and flips the `dark` class on `<html>`.

/// `prefers-color-scheme: dark`, false when it cannot be asked
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(e) = result {
        log::warn!("Could not switch theme class: {:?}", e);
    }
}
