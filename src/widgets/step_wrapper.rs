use dioxus::prelude::*;

use super::{Label, Paragraph, TextButton, TextStyle, VStack};
use crate::environment::types::SignupProgress;
use crate::loc;

#[derive(Props)]
pub struct StepWrapperProps<'a> {
    pub flow_name: &'a str,
    pub step_name: &'a str,
    pub position_in_flow: usize,
    pub header_text: &'a str,
    pub sub_header_text: &'a str,
    pub signup_progress: &'a SignupProgress,
    pub should_hide_nav_buttons: bool,
    #[props(optional)]
    pub onprevious: Option<EventHandler<'a, ()>>,
    pub children: Element<'a>,
}

/// Frame shared by all signup steps: headers, progress and navigation
pub fn StepWrapper<'a>(cx: Scope<'a, StepWrapperProps<'a>>) -> Element<'a> {
    let props = cx.props;
    let step = props.position_in_flow + 1;
    let answered = props.signup_progress.len();
    let header = props.header_text;
    let sub_header = props.sub_header_text;
    let progress = format!("{} {step} · {answered} {}", loc!("Step"), loc!("answered"));
    let show_back = shows_back_button(props.position_in_flow, props.should_hide_nav_buttons);

    cx.render(rsx!(
        div {
            class: "step-wrapper is-{props.flow_name}",
            id: "{props.step_name}",
            VStack {
                div { class: "step-wrapper__progress",
                    Label { style: TextStyle::Tertiary, "{progress}" }
                }
                div { class: "step-wrapper__header",
                    h1 { "{header}" }
                    Paragraph { style: TextStyle::Secondary, "{sub_header}" }
                }
                div { class: "step-wrapper__content", &props.children }
                show_back.then(|| rsx!(
                    div { class: "step-wrapper__buttons",
                        TextButton {
                            text: loc!("Back"),
                            class: "is-borderless",
                            onclick: move |_| {
                                if let Some(ref handler) = props.onprevious {
                                    handler.call(())
                                }
                            }
                        }
                    }
                ))
            }
        }
    ))
}

/// The first step has nowhere to go back to
pub fn shows_back_button(position_in_flow: usize, should_hide_nav_buttons: bool) -> bool {
    !should_hide_nav_buttons && position_in_flow > 0
}
