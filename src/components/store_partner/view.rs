use dioxus::prelude::*;

use super::StorePartner;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn StorePartnerStep<'a>(
    cx: Scope<'a>,
    partner: StorePartner,
    onget_started: EventHandler<'a, &'static str>,
    onback: EventHandler<'a, ()>,
) -> Element<'a> {
    let name = partner.name();
    let pitch = partner.pitch();
    let url = partner.signup_url();
    // only the focusable partner gets an id, the others can't be targeted
    let id = partner.focus_target().unwrap_or_default();

    cx.render(rsx!(
        Card { class: "store-partner",
            VStack { gap: "gap-2",
                h2 { class: "store-partner__title", "{name}" }
                Paragraph { style: TextStyle::Secondary, "{pitch}" }
                div { class: "store-partner__buttons",
                    button {
                        id: "{id}",
                        class: "button is-primary",
                        r#type: "button",
                        onclick: move |_| onget_started.call(url),
                        loc!("Get started")
                    }
                    button {
                        class: "button is-borderless",
                        r#type: "button",
                        onclick: move |_| onback.call(()),
                        loc!("Back")
                    }
                }
            }
        }
    ))
}
