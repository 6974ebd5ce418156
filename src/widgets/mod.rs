mod labels;
pub use labels::*;

mod stacks;
pub use stacks::*;

mod buttons;
pub use buttons::*;

mod card;
pub use card::*;

mod hideable_view;
pub use hideable_view::*;

mod step_wrapper;
pub use step_wrapper::*;
