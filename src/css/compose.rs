//! Stylesheet composer: the authoritative full render.

use tracing::warn;

use crate::css::format::render_block;
use crate::css::store::DeclarationStore;
use crate::screen::ScreenRegistry;

/// Compose the full stylesheet from every screen that has declarations.
///
/// Screens are visited in registry sort order. Declarations stored under a
/// screen the registry does not know are left out. Pure: the same
/// registry and store always produce the same text.
pub fn compose(screens: &ScreenRegistry, declarations: &DeclarationStore) -> String {
    for name in declarations.screens() {
        if !screens.contains(name) {
            warn!(screen = name, "declarations on unregistered screen are not composed");
        }
    }

    screens
        .sorted()
        .into_iter()
        .filter(|screen| declarations.has_declarations(&screen.name))
        .map(|screen| {
            render_block(
                Some(screen),
                declarations.styles_for(&screen.name),
                declarations.custom_properties_for(&screen.name),
            )
        })
        .collect()
}

/// Compose the stylesheet wrapped in a `<style>` element.
///
/// The id, when given, is attribute-escaped.
pub fn styleblock(screens: &ScreenRegistry, declarations: &DeclarationStore, id: Option<&str>) -> String {
    let css = compose(screens, declarations);
    match id {
        Some(id) if !id.is_empty() => format!(
            "<style id=\"{}\">{css}</style>",
            html_escape::encode_double_quoted_attribute(id)
        ),
        _ => format!("<style>{css}</style>"),
    }
}
