pub mod tags;

pub use tags::{Tag, TagId, Tags};

/// Reader events coming back from the API layer
#[derive(Clone, Debug)]
pub enum ReaderAction {
    TagsRequest { slug: Option<String> },
    TagsReceived(Vec<Tag>),
    FollowTagRequest(String),
    FollowTagReceived { tag: Tag, error: bool },
    UnfollowTagRequest(TagId),
    UnfollowTagReceived { id: TagId, error: bool },
}
