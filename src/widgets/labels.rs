use dioxus::prelude::*;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum TextStyle {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl TextStyle {
    fn as_css(&self) -> &'static str {
        match self {
            TextStyle::Primary => "label-primary",
            TextStyle::Secondary => "label-secondary",
            TextStyle::Tertiary => "label-tertiary",
        }
    }
}

#[inline_props]
pub fn Paragraph<'a>(
    cx: Scope<'a>,
    style: Option<TextStyle>,
    class: Option<&'static str>,
    children: Element<'a>,
) -> Element<'a> {
    let style_class = style.unwrap_or_default().as_css();
    let class = class.unwrap_or_default();

    cx.render(rsx!(p {
        class: "{style_class} {class}",
        children
    }))
}

#[inline_props]
pub fn Label<'a>(
    cx: Scope<'a>,
    style: Option<TextStyle>,
    class: Option<&'static str>,
    children: Element<'a>,
) -> Element<'a> {
    let style_class = style.unwrap_or_default().as_css();
    let class = class.unwrap_or_default();

    cx.render(rsx!(span {
        class: "{style_class} {class}",
        children
    }))
}
