use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::types::{DesignType, TracksEvent};

pub const SELECT_DESIGN_EVENT: &str = "calypso_triforce_select_design";

#[derive(Clone, Default)]
pub struct Analytics {
    events: Arc<Mutex<Vec<TracksEvent>>>,
}

impl Analytics {
    pub fn record_tracks_event<'a>(
        &self,
        name: &str,
        properties: impl IntoIterator<Item = (&'a str, String)>,
    ) {
        let event = TracksEvent {
            name: name.to_string(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<BTreeMap<_, _>>(),
            recorded: Utc::now(),
        };
        log::info!("tracks: {} {:?}", event.name, event.properties);
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(e) => log::error!("Could not record event: {e:?}"),
        }
    }

    pub fn record_select_design(&self, design_type: DesignType) {
        self.record_tracks_event(
            SELECT_DESIGN_EVENT,
            [("category", design_type.to_string())],
        );
    }

    pub fn events(&self) -> Vec<TracksEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}
