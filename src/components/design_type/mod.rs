mod reducer;
mod view;

use crate::environment::Environment;
use navicula::reducer::Reducer;

use reducer::{reduce, Action, State};

pub use view::DesignTypeStep;

pub struct DesignTypeReducer;

impl Reducer for DesignTypeReducer {
    type Message = ();

    type DelegateMessage = Action;

    type Action = Action;

    type State = State;

    type Environment = Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        None
    }
}
