use dioxus::prelude::*;

#[derive(Props)]
pub struct CardProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

pub fn Card<'a>(cx: Scope<'a, CardProps<'a>>) -> Element {
    let custom_cls = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "card {custom_cls}", &cx.props.children }
    ))
}
