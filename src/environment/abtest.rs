use strum::IntoEnumIterator;

use super::repository::Repository;
use super::types::StoreBenchmark;

pub const SIGNUP_STORE_BENCHMARKING: &str = "signupStoreBenchmarking";

struct Experiment {
    name: &'static str,
    variants: fn() -> Vec<&'static str>,
    default_variant: fn() -> &'static str,
}

/// Variant names come from the enum of each experiment
fn variants_of<E: IntoEnumIterator + Into<&'static str>>() -> Vec<&'static str> {
    E::iter().map(Into::into).collect()
}

fn default_of<E: Default + Into<&'static str>>() -> &'static str {
    E::default().into()
}

const EXPERIMENTS: &[Experiment] = &[Experiment {
    name: SIGNUP_STORE_BENCHMARKING,
    variants: variants_of::<StoreBenchmark>,
    default_variant: default_of::<StoreBenchmark>,
}];

/// Resolves experiment variants. Assignments come from the user config,
/// anything unknown resolves to the experiment's default.
#[derive(Clone)]
pub struct AbTests {
    repository: Repository,
}

impl AbTests {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The variant for the named experiment, or an empty string for an
    /// experiment we don't know about
    pub fn variant(&self, name: &str) -> String {
        let Some(experiment) = EXPERIMENTS.iter().find(|e| e.name == name) else {
            log::warn!("Unknown experiment {name}");
            return String::new();
        };

        let assigned = self
            .repository
            .config()
            .ok()
            .and_then(|config| config.abtests.get(name).cloned());

        match assigned {
            Some(variant) if (experiment.variants)().contains(&variant.as_str()) => variant,
            Some(variant) => {
                log::warn!("Ignoring unknown variant {variant} for {name}");
                (experiment.default_variant)().to_string()
            }
            None => (experiment.default_variant)().to_string(),
        }
    }

    pub fn store_benchmark(&self) -> StoreBenchmark {
        StoreBenchmark::from_variant(&self.variant(SIGNUP_STORE_BENCHMARKING))
    }
}
