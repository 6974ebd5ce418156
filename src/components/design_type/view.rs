use dioxus::prelude::*;

use super::reducer::{choices, Action, Choice, State, ViewStore};
use crate::components::store_partner::StorePartnerStep;
use crate::environment::types::{DesignType, SignupProgress};
use crate::environment::Environment;
use crate::widgets::*;

#[inline_props]
pub fn DesignTypeStep<'a>(
    cx: Scope<'a>,
    environment: &'a UseState<Environment>,
    flow_name: String,
    step_name: String,
    position_in_flow: usize,
    signup_progress: SignupProgress,
    go_to_next_step: EventHandler<'a, DesignType>,
) -> Element<'a> {
    log::trace!("rerender design type step");

    let view_store: ViewStore = navicula::root(cx, &[], environment.get(), || {
        State::new(
            flow_name.clone(),
            step_name.clone(),
            *position_in_flow,
            environment.get().abtests.store_benchmark(),
        )
    });

    let did_advance = use_state(cx, || false);
    if let Some(design_type) = view_store.submitted {
        if !*did_advance.get() {
            did_advance.set(true);
            go_to_next_step.call(design_type);
        }
    }

    let header_text = view_store.header_text();
    let sub_header_text = view_store.sub_header_text();
    let hide_nav_buttons = view_store.should_hide_nav_buttons();

    cx.render(rsx!(
        StepWrapper {
            flow_name: flow_name,
            step_name: step_name,
            position_in_flow: *position_in_flow,
            header_text: header_text,
            sub_header_text: sub_header_text,
            signup_progress: signup_progress,
            should_hide_nav_buttons: hide_nav_buttons,
            SubstepView { store: view_store }
        }
    ))
}

#[inline_props]
fn SubstepView<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let partner = store.partner();
    let choices = choices();
    cx.render(rsx!(
        div { class: "design-type-with-store__substep-wrapper",
            HideableView {
                class: "design-type-with-store__store-wrapper",
                hidden: !store.show_store,
                StorePartnerStep {
                    partner: partner,
                    onget_started: move |url| store.send(Action::PartnerGetStarted(url)),
                    onback: move |_| store.send(Action::StoreBackClicked)
                }
            }
            HideableView {
                class: "design-type-with-store__list",
                hidden: store.show_store,
                choices.into_iter().map(|choice| rsx!(ChoiceCard {
                    key: "{choice.design_type}",
                    choice: choice,
                    onclick: move |design_type| store.send(Action::ChoiceClicked(design_type))
                }))
            }
        }
    ))
}

#[inline_props]
fn ChoiceCard<'a>(
    cx: Scope<'a>,
    choice: Choice,
    onclick: EventHandler<'a, DesignType>,
) -> Element<'a> {
    let design_type = choice.design_type;
    cx.render(rsx!(
        Card { class: "design-type-with-store__choice",
            a {
                class: "design-type-with-store__choice-link",
                href: "#",
                prevent_default: "onclick",
                onclick: move |event| {
                    event.stop_propagation();
                    onclick.call(design_type)
                },
                span { dangerous_inner_html: choice.image }
                h2 { "{choice.label}" }
            }
        }
    ))
}
