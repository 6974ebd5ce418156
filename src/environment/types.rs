use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

// Repository Types

#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct SetupConfig {
    /// Experiment name -> assigned variant
    #[serde(default)]
    pub abtests: HashMap<String, String>,
    #[serde(default)]
    pub flow_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct StepSubmission {
    pub step_name: String,
    pub provided_dependencies: Vec<String>,
    pub payload: StepPayload,
    pub submitted: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepPayload {
    pub design_type: DesignType,
}

/// The answers the wizard collected so far, in submission order
#[derive(Default, Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct SignupProgress {
    pub steps: Vec<StepSubmission>,
}

impl SignupProgress {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, step_name: &str) -> Option<&StepSubmission> {
        self.steps.iter().rev().find(|s| s.step_name == step_name)
    }
}

// Signup Types

#[derive(
    IntoStaticStr,
    EnumIter,
    Display,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DesignType {
    Blog,
    Page,
    Grid,
    Store,
}

/// Variants of the `signupStoreBenchmarking` experiment
#[derive(
    IntoStaticStr, EnumIter, EnumString, Display, Debug, Clone, Copy, Eq, PartialEq, Default,
)]
pub enum StoreBenchmark {
    #[strum(serialize = "bluehost")]
    Bluehost,
    #[strum(serialize = "bluehostWithWoo")]
    BluehostWithWoo,
    #[strum(serialize = "siteground")]
    Siteground,
    #[default]
    #[strum(serialize = "pressable")]
    Pressable,
}

impl StoreBenchmark {
    /// Unknown variants fall back to the default bucket
    pub fn from_variant(variant: &str) -> Self {
        variant.parse().unwrap_or_default()
    }
}

// Analytics

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct TracksEvent {
    pub name: String,
    pub properties: BTreeMap<String, String>,
    pub recorded: DateTime<Utc>,
}

// Window Events

#[derive(Clone, Debug)]
pub enum AppEvent {
    ClosingWindow,
}
