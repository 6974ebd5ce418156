use crate::components::store_partner::StorePartner;
use crate::environment::types::{DesignType, StepPayload, StoreBenchmark};
use crate::environment::Environment;
use crate::loc;
use navicula::effect::Effect;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::DesignTypeReducer>;

const SCROLL_TO_TOP: &str = "window.scrollTo(0, 0);";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Choice {
    pub design_type: DesignType,
    pub label: &'static str,
    pub image: &'static str,
}

pub fn choices() -> [Choice; 4] {
    [
        Choice {
            design_type: DesignType::Blog,
            label: loc!("A list of my latest posts"),
            image: crate::icons::ICON_BLOG,
        },
        Choice {
            design_type: DesignType::Page,
            label: loc!("A welcome page for my site"),
            image: crate::icons::ICON_PAGE,
        },
        Choice {
            design_type: DesignType::Grid,
            label: loc!("A grid of my latest posts"),
            image: crate::icons::ICON_GRID,
        },
        Choice {
            design_type: DesignType::Store,
            label: loc!("An online store"),
            image: crate::icons::ICON_STORE,
        },
    ]
}

#[derive(Clone, Debug)]
pub enum Action {
    ChoiceClicked(DesignType),
    StoreBackClicked,
    PartnerGetStarted(&'static str),
}

/// Side effects a handled action asks the view layer for
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UiCommand {
    Script(String),
    OpenUrl(&'static str),
    Nothing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChoiceOutcome {
    ShowStore,
    Submit(DesignType),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub flow_name: String,
    pub step_name: String,
    pub position_in_flow: usize,
    pub show_store: bool,
    pub bucket: StoreBenchmark,
    /// Set once a non-store design was chosen. The wizard moves on after this.
    pub submitted: Option<DesignType>,
}

impl State {
    pub fn new(
        flow_name: String,
        step_name: String,
        position_in_flow: usize,
        bucket: StoreBenchmark,
    ) -> Self {
        Self {
            flow_name,
            step_name,
            position_in_flow,
            show_store: false,
            bucket,
            submitted: None,
        }
    }

    pub fn partner(&self) -> StorePartner {
        StorePartner::for_bucket(self.bucket)
    }

    pub fn choose(&mut self, design_type: DesignType) -> ChoiceOutcome {
        if design_type == DesignType::Store {
            self.show_store = true;
            ChoiceOutcome::ShowStore
        } else {
            self.submitted = Some(design_type);
            ChoiceOutcome::Submit(design_type)
        }
    }

    pub fn back_from_store(&mut self) {
        self.show_store = false;
    }

    pub fn header_text(&self) -> &'static str {
        if self.show_store {
            loc!("Create your WordPress Store")
        } else {
            loc!("What would you like your homepage to look like?")
        }
    }

    pub fn sub_header_text(&self) -> &'static str {
        if !self.show_store {
            return loc!("This will help us figure out what kinds of designs to show you.");
        }
        match self.bucket {
            StoreBenchmark::Bluehost => loc!("Our partners at BlueHost are here for you."),
            StoreBenchmark::BluehostWithWoo => {
                loc!("Our partners at BlueHost and WooCommerce are here for you.")
            }
            StoreBenchmark::Siteground => {
                loc!("Our partners at SiteGround and WooCommerce are here for you.")
            }
            StoreBenchmark::Pressable => {
                loc!("Our partners at Pressable and WooCommerce are here for you.")
            }
        }
    }

    pub fn should_hide_nav_buttons(&self) -> bool {
        self.show_store
    }
}

fn enter_store_script(partner: StorePartner) -> String {
    let Some(id) = partner.focus_target() else {
        return SCROLL_TO_TOP.to_string();
    };
    // the partner step is only visible after the next render
    format!(
        r#"
        {SCROLL_TO_TOP}
        setTimeout(() => {{
            document.getElementById("{id}")?.focus();
        }}, 0);
        "#
    )
}

/// Tracks the choice, then either opens the store flow or submits the step
fn select_design(
    state: &mut State,
    environment: &Environment,
    design_type: DesignType,
) -> ChoiceOutcome {
    environment.analytics.record_select_design(design_type);
    let outcome = state.choose(design_type);
    if let ChoiceOutcome::Submit(design_type) = outcome {
        if let Err(e) =
            environment
                .signup
                .submit_signup_step(&state.step_name, &[], StepPayload { design_type })
        {
            log::error!("Could not submit {}: {e:?}", state.step_name);
        }
    }
    outcome
}

fn handle(action: Action, state: &mut State, environment: &Environment) -> UiCommand {
    match action {
        Action::ChoiceClicked(design_type) => match select_design(state, environment, design_type) {
            ChoiceOutcome::ShowStore => UiCommand::Script(enter_store_script(state.partner())),
            // the view advances the wizard once `submitted` is set
            ChoiceOutcome::Submit(_) => UiCommand::Nothing,
        },
        Action::StoreBackClicked => {
            state.back_from_store();
            UiCommand::Script(SCROLL_TO_TOP.to_string())
        }
        Action::PartnerGetStarted(url) => UiCommand::OpenUrl(url),
    }
}

pub fn reduce<'a>(
    _context: &'a impl navicula::types::MessageContext<Action, Action, ()>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    match handle(action, state, environment) {
        UiCommand::Script(js) => Effect::ui(js),
        UiCommand::OpenUrl(url) => {
            environment.open_url(url);
            Effect::NONE
        }
        UiCommand::Nothing => Effect::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::SetupConfig;
    use crate::environment::Repository;

    fn environment() -> Environment {
        Environment::new(Repository::in_memory(SetupConfig::default()))
    }

    fn state(bucket: StoreBenchmark) -> State {
        State::new(
            "store-nux".to_string(),
            "design-type-with-store".to_string(),
            0,
            bucket,
        )
    }

    #[test]
    fn store_choice_shows_partner_flow() {
        let mut state = state(StoreBenchmark::Pressable);
        assert_eq!(state.choose(DesignType::Store), ChoiceOutcome::ShowStore);
        assert!(state.show_store);
        assert_eq!(state.submitted, None);
        assert!(state.should_hide_nav_buttons());
    }

    #[test]
    fn other_choices_submit() {
        for design_type in [DesignType::Blog, DesignType::Page, DesignType::Grid] {
            let mut state = state(StoreBenchmark::Pressable);
            assert_eq!(state.choose(design_type), ChoiceOutcome::Submit(design_type));
            assert!(!state.show_store);
            assert_eq!(state.submitted, Some(design_type));
        }
    }

    #[test]
    fn back_returns_to_choices() {
        let mut state = state(StoreBenchmark::Siteground);
        state.choose(DesignType::Store);
        state.back_from_store();
        assert!(!state.show_store);
        assert!(!state.should_hide_nav_buttons());
        assert_eq!(
            state.header_text(),
            "What would you like your homepage to look like?"
        );
    }

    #[test]
    fn headers_follow_bucket_in_store_flow() {
        let cases = [
            (
                StoreBenchmark::Bluehost,
                "Our partners at BlueHost are here for you.",
            ),
            (
                StoreBenchmark::BluehostWithWoo,
                "Our partners at BlueHost and WooCommerce are here for you.",
            ),
            (
                StoreBenchmark::Siteground,
                "Our partners at SiteGround and WooCommerce are here for you.",
            ),
            (
                StoreBenchmark::Pressable,
                "Our partners at Pressable and WooCommerce are here for you.",
            ),
        ];
        for (bucket, expected) in cases {
            let mut state = state(bucket);
            assert_eq!(
                state.sub_header_text(),
                "This will help us figure out what kinds of designs to show you."
            );
            state.choose(DesignType::Store);
            assert_eq!(state.header_text(), "Create your WordPress Store");
            assert_eq!(state.sub_header_text(), expected);
        }
    }

    #[test]
    fn choices_cover_every_design() {
        let types: Vec<_> = choices().iter().map(|c| c.design_type).collect();
        assert_eq!(
            types,
            vec![
                DesignType::Blog,
                DesignType::Page,
                DesignType::Grid,
                DesignType::Store
            ]
        );
    }

    #[test]
    fn focus_only_for_focusable_partner() {
        assert!(enter_store_script(StorePartner::Pressable).contains("focus()"));
        assert_eq!(
            enter_store_script(StorePartner::Siteground),
            SCROLL_TO_TOP.to_string()
        );
    }

    #[test]
    fn selecting_blog_submits_step() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Pressable);
        let outcome = select_design(&mut state, &environment, DesignType::Blog);
        assert_eq!(outcome, ChoiceOutcome::Submit(DesignType::Blog));
        assert!(!state.show_store);

        let progress = environment.signup.progress();
        let step = progress.step("design-type-with-store").unwrap();
        assert_eq!(step.payload.design_type, DesignType::Blog);
        assert!(step.provided_dependencies.is_empty());
        assert_eq!(
            serde_json::to_value(&step.payload).unwrap(),
            serde_json::json!({ "designType": "blog" })
        );

        let events = environment.analytics.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].properties.get("category").map(String::as_str),
            Some("blog")
        );
    }

    #[test]
    fn selecting_store_does_not_submit() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Bluehost);
        let outcome = select_design(&mut state, &environment, DesignType::Store);
        assert_eq!(outcome, ChoiceOutcome::ShowStore);
        assert!(state.show_store);
        assert!(environment.signup.progress().is_empty());
        // tracked before branching, also for the store
        assert_eq!(environment.analytics.events().len(), 1);
    }

    #[test]
    fn store_click_focuses_partner() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Pressable);
        let command = handle(
            Action::ChoiceClicked(DesignType::Store),
            &mut state,
            &environment,
        );
        assert_eq!(
            command,
            UiCommand::Script(enter_store_script(StorePartner::Pressable))
        );
        assert!(state.show_store);
    }

    #[test]
    fn back_from_store_scrolls_to_top() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Bluehost);
        handle(
            Action::ChoiceClicked(DesignType::Store),
            &mut state,
            &environment,
        );
        let command = handle(Action::StoreBackClicked, &mut state, &environment);
        assert_eq!(command, UiCommand::Script(SCROLL_TO_TOP.to_string()));
        assert!(!state.show_store);
        assert!(environment.signup.progress().is_empty());
    }

    #[test]
    fn non_store_click_has_no_ui_effect() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Siteground);
        let command = handle(
            Action::ChoiceClicked(DesignType::Grid),
            &mut state,
            &environment,
        );
        assert_eq!(command, UiCommand::Nothing);
        assert_eq!(state.submitted, Some(DesignType::Grid));
    }

    #[test]
    fn get_started_opens_partner_signup() {
        let environment = environment();
        let mut state = state(StoreBenchmark::Siteground);
        let url = state.partner().signup_url();
        let command = handle(Action::PartnerGetStarted(url), &mut state, &environment);
        assert_eq!(command, UiCommand::OpenUrl(url));
        assert!(environment.analytics.events().is_empty());
    }
}
