use recipe_shared::Theme;

/// 把主题同步到 `<html>` 根元素
///
/// 同时设置 `dark` class（Tailwind）和 `data-theme` 属性（DaisyUI）。
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if root
        .class_list()
        .toggle_with_force("dark", theme.is_dark())
        .is_err()
    {
        web_sys::console::warn_1(&"[Theme] Could not update root class.".into());
    }
    if root.set_attribute("data-theme", theme.as_str()).is_err() {
        web_sys::console::warn_1(&"[Theme] Could not update data-theme.".into());
    }
}
