use dioxus::prelude::*;

#[derive(Props)]
pub struct TextButtonProps<'a, S: AsRef<str>> {
    pub text: S,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn TextButton<'a, S: AsRef<str>>(cx: Scope<'a, TextButtonProps<'a, S>>) -> Element {
    let class = cx.props.class.unwrap_or("");
    cx.render(rsx!(
        button {
            class: "button {class}",
            r#type: "button",
            onclick: move |e| cx.props.onclick.call(e),
            "{cx.props.text.as_ref()}"
        }
    ))
}
