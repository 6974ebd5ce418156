#![allow(non_snake_case)]

use crate::components::design_type::DesignTypeStep;
use crate::environment::types::SignupProgress;
use crate::environment::{Environment, Repository};
use crate::loc;
use crate::style::STYLE;
use crate::widgets::*;
use dioxus::prelude::*;

use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

const DEFAULT_FLOW_NAME: &str = "store-nux";
const DESIGN_TYPE_STEP: &str = "design-type-with-store";

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let style = STYLE;
    let window = WindowBuilder::new()
        .with_title("Site Setup")
        .with_inner_size(LogicalSize::new(1024.0, 768.0));
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Site Setup</title>
        <style>{style}</style>
        "#
        ))
        .with_window(window);

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment = use_state(cx, || Environment::new(Repository::new()));
    let flow_name = environment
        .flow_name()
        .unwrap_or_else(|| DEFAULT_FLOW_NAME.to_string());

    let progress = environment.signup.progress();
    let position = use_state(cx, || initial_position(&progress));

    cx.render(rsx!(
        (*position.get() == 0).then(|| rsx!(DesignTypeStep {
            environment: environment,
            flow_name: flow_name.clone(),
            step_name: DESIGN_TYPE_STEP.to_string(),
            position_in_flow: 0,
            signup_progress: progress.clone(),
            go_to_next_step: move |_| position.set(*position.get() + 1)
        })),
        (*position.get() > 0).then(|| rsx!(SetupComplete {
            flow_name: flow_name.clone(),
            position_in_flow: *position.get(),
            signup_progress: progress.clone(),
            onprevious: move |_| position.set(0)
        }))
    ))
}

/// Resume after the design step if it was answered in an earlier session
fn initial_position(progress: &SignupProgress) -> usize {
    usize::from(progress.step(DESIGN_TYPE_STEP).is_some())
}

#[inline_props]
fn SetupComplete<'a>(
    cx: Scope<'a>,
    flow_name: String,
    position_in_flow: usize,
    signup_progress: SignupProgress,
    onprevious: EventHandler<'a, ()>,
) -> Element<'a> {
    cx.render(rsx!(
        StepWrapper {
            flow_name: flow_name,
            step_name: "complete",
            position_in_flow: *position_in_flow,
            header_text: loc!("Your site is almost ready"),
            sub_header_text: loc!("Here is what you picked."),
            signup_progress: signup_progress,
            should_hide_nav_buttons: false,
            onprevious: move |_| onprevious.call(()),
            Card { class: "setup-complete",
                ul {
                    signup_progress.steps.iter().map(|step| {
                        let step_name = &step.step_name;
                        let design_type = step.payload.design_type;
                        rsx!(li { key: "{step_name}", "{step_name}: {design_type}" })
                    })
                }
            }
        }
    ))
}
