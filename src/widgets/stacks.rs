use dioxus::prelude::*;

#[derive(Props)]
pub struct VStackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    /// One of the `gap-*` helper classes
    #[props(optional)]
    pub gap: Option<&'static str>,
    pub children: Element<'a>,
}

pub fn VStack<'a>(cx: Scope<'a, VStackProps<'a>>) -> Element {
    let custom_cls = cx.props.class.unwrap_or_default();
    let gap = cx.props.gap.unwrap_or_default();
    cx.render(rsx!(
        div { class: "vstack {gap} {custom_cls}", &cx.props.children }
    ))
}
