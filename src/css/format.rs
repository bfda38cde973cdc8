//! Shared serialization for both rendering contexts.
//!
//! [`render_block`] is the one routine that turns declarations into CSS text
//! and wraps it in a screen's media query. The composer calls it with every
//! declaration of a screen; the fragment renderer calls it with a
//! one-element slice. Keeping a single code path is what makes a patched
//! fragment byte-identical to the same declaration inside a full render.

use std::fmt::Write;

use crate::css::model::{CustomPropertyDeclaration, StyleDeclaration};
use crate::screen::Screen;

/// Serialize one style rule: `selector{prop:value;...}`.
///
/// Pairs with an empty property or value are dropped; a rule with no
/// surviving pairs still renders as `selector{}`.
pub fn write_style(out: &mut String, style: &StyleDeclaration) {
    out.push_str(&style.selector);
    out.push('{');
    for (property, value) in style.properties.emitted() {
        let _ = write!(out, "{property}:{value};");
    }
    out.push('}');
}

fn write_custom_property(out: &mut String, property: &CustomPropertyDeclaration) {
    let _ = write!(out, "{}:{};", property.property_name(), property.value);
}

/// Serialize custom properties: one merged `:root{...}` for the root-scoped
/// ones, then each contextual one as `selector{--name:value;}`.
///
/// Properties with an empty value contribute nothing.
pub fn write_custom_properties(out: &mut String, properties: &[CustomPropertyDeclaration]) {
    let live = || properties.iter().filter(|p| !p.is_delete());

    let mut root = live().filter(|p| p.is_root_scoped()).peekable();
    if root.peek().is_some() {
        out.push_str(":root{");
        for property in root {
            write_custom_property(out, property);
        }
        out.push('}');
    }

    for property in live() {
        if let Some(selector) = &property.selector {
            out.push_str(selector);
            out.push('{');
            write_custom_property(out, property);
            out.push('}');
        }
    }
}

/// Wrap `content` in the screen's media query, if it has one.
///
/// Empty content stays empty; the default screen and screens without
/// bounds are never wrapped.
pub fn wrap_media_query(screen: Option<&Screen>, content: String) -> String {
    if content.is_empty() {
        return content;
    }
    match screen.and_then(Screen::media_query) {
        Some(query) => format!("{query}{{{content}}}"),
        None => content,
    }
}

/// Render a screen block: styles, then custom properties, wrapped in the
/// screen's media query.
///
/// `screen` is `None` when the declarations name a screen the registry does
/// not know; such content renders unwrapped.
pub fn render_block(
    screen: Option<&Screen>,
    styles: &[StyleDeclaration],
    custom_properties: &[CustomPropertyDeclaration],
) -> String {
    let mut content = String::new();
    for style in styles {
        write_style(&mut content, style);
    }
    write_custom_properties(&mut content, custom_properties);
    wrap_media_query(screen, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::model::Properties;
    use crate::screen::{Width, DEFAULT_SCREEN};
    use pretty_assertions::assert_eq;

    fn prop(name: &str, value: &str) -> CustomPropertyDeclaration {
        CustomPropertyDeclaration::new(name, value).unwrap()
    }

    #[test]
    fn style_rule_format() {
        let style = StyleDeclaration::new(
            "body",
            Properties::new().with("color", "red").with("margin", "0"),
        )
        .unwrap();
        let mut out = String::new();
        write_style(&mut out, &style);
        assert_eq!(out, "body{color:red;margin:0;}");
    }

    #[test]
    fn style_rule_all_empty_renders_braces() {
        let style =
            StyleDeclaration::new(".x", Properties::new().with("color", "").with("top", ""))
                .unwrap();
        let mut out = String::new();
        write_style(&mut out, &style);
        assert_eq!(out, ".x{}");
    }

    #[test]
    fn root_properties_merge() {
        let props = vec![
            prop("a", "1"),
            prop("b", "2").with_selector(".card"),
            prop("c", "3"),
        ];
        let mut out = String::new();
        write_custom_properties(&mut out, &props);
        assert_eq!(out, ":root{--a:1;--c:3;}.card{--b:2;}");
    }

    #[test]
    fn contextual_properties_not_merged() {
        let props = vec![
            prop("a", "1").with_selector(".card"),
            prop("b", "2").with_selector(".card"),
        ];
        let mut out = String::new();
        write_custom_properties(&mut out, &props);
        assert_eq!(out, ".card{--a:1;}.card{--b:2;}");
    }

    #[test]
    fn empty_values_contribute_nothing() {
        let props = vec![prop("a", ""), prop("b", "").with_selector(".x")];
        let mut out = String::new();
        write_custom_properties(&mut out, &props);
        assert_eq!(out, "");
    }

    #[test]
    fn wrap_respects_screen() {
        let tablet = Screen::new("tablet")
            .with_min(Width::px(600.0))
            .with_max(Width::px(1199.0));
        assert_eq!(
            wrap_media_query(Some(&tablet), "a{}".into()),
            "@media (min-width: 600px) and (max-width: 1199px){a{}}"
        );
        assert_eq!(wrap_media_query(Some(&tablet), String::new()), "");
        let default = Screen::new(DEFAULT_SCREEN);
        assert_eq!(wrap_media_query(Some(&default), "a{}".into()), "a{}");
        assert_eq!(wrap_media_query(None, "a{}".into()), "a{}");
    }

    #[test]
    fn block_orders_styles_before_properties() {
        let mobile = Screen::new("mobile").with_max(Width::px(600.0));
        let styles =
            vec![StyleDeclaration::new("h1", Properties::new().with("font-size", "2rem")).unwrap()];
        let props = vec![prop("gap", "8px")];
        assert_eq!(
            render_block(Some(&mobile), &styles, &props),
            "@media (max-width: 600px){h1{font-size:2rem;}:root{--gap:8px;}}"
        );
    }
}
