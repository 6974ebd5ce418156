use crate::reader::{tags, ReaderAction, Tags};

/// Client side state shared between components
#[derive(Clone, Default)]
pub struct Data {
    pub reader_tags: Tags,
}

impl Data {
    pub fn handle_reader_action(&mut self, action: &ReaderAction) {
        self.reader_tags = tags::items(&self.reader_tags, action);
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("reader_tags", &self.reader_tags.len())
            .finish()
    }
}
