#![allow(non_snake_case)]

mod app;
mod components;
pub mod environment;
mod icons;
pub mod reader;
mod style;
mod widgets;

pub use app::run;
pub use environment::Environment;

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}
