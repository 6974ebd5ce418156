use serde::{Deserialize, Serialize};

use super::ReaderAction;

pub type TagId = u64;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "ID")]
    pub id: TagId,
    #[serde(rename = "URL")]
    pub url: String,
    pub title: String,
    pub display_name: String,
}

pub type Tags = im::HashMap<TagId, Tag>;

/// The API always returns the full, unpaginated list of tags (both for the
/// followed tags and for a tag listing), so a receive replaces the
/// collection instead of merging into it.
pub fn items(state: &Tags, action: &ReaderAction) -> Tags {
    log::trace!("{action:?}");
    match action {
        ReaderAction::TagsReceived(tags) => tags
            .iter()
            .map(|tag| (tag.id, tag.clone()))
            .collect(),
        ReaderAction::UnfollowTagReceived { error: true, .. } => state.clone(),
        ReaderAction::UnfollowTagReceived { id, error: false } => {
            if state.contains_key(id) {
                state.without(id)
            } else {
                state.clone()
            }
        }
        _ => state.clone(),
    }
}
