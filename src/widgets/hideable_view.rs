use dioxus::prelude::*;

#[derive(Props)]
pub struct HideableViewProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub hidden: bool,
    pub children: Element<'a>,
}

/// Keeps its children mounted and toggles `is-hidden`
pub fn HideableView<'a>(cx: Scope<'a, HideableViewProps<'a>>) -> Element {
    let custom_cls = cx.props.class.unwrap_or_default();
    let hidden = if cx.props.hidden { "is-hidden" } else { "" };
    render! {
        div {
            class: "{custom_cls} {hidden}",
            &cx.props.children
        }
    }
}
