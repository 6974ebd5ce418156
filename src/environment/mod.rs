pub mod abtest;
pub mod analytics;
pub mod repository;
pub mod signup;
pub mod storage;
pub mod types;

pub use abtest::AbTests;
pub use analytics::Analytics;
pub use repository::Repository;
pub use signup::SignupActions;

use navicula::publisher::RefPublisher;
use navicula::types::EnvironmentType;

use crate::reader::ReaderAction;
use storage::Data;

#[derive(Clone)]
pub struct Environment {
    pub repository: Repository,
    pub abtests: AbTests,
    pub analytics: Analytics,
    pub signup: SignupActions,
    pub storage: RefPublisher<Data>,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(repository: Repository) -> Self {
        Self {
            abtests: AbTests::new(repository.clone()),
            analytics: Analytics::default(),
            signup: SignupActions::new(repository.clone()),
            storage: RefPublisher::default(),
            repository,
        }
    }

    pub fn flow_name(&self) -> Option<String> {
        self.repository.config().ok().and_then(|c| c.flow_name)
    }

    pub fn dispatch_reader(&self, action: ReaderAction) {
        self.storage
            .with_mutation(|mut data| data.handle_reader_action(&action));
    }

    pub fn open_url(&self, url: &str) {
        if let Err(e) = webbrowser::open(url) {
            log::error!("Could not open {url}: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Tag;
    use types::SetupConfig;

    fn tag(id: u64, title: &str) -> Tag {
        Tag {
            id,
            url: format!("https://example.com/tag/{title}"),
            title: title.to_string(),
            display_name: title.to_string(),
        }
    }

    #[test]
    fn reader_actions_reach_shared_storage() {
        let environment = Environment::new(Repository::in_memory(SetupConfig::default()));
        environment.dispatch_reader(ReaderAction::TagsReceived(vec![
            tag(1, "rust"),
            tag(2, "design"),
        ]));
        environment.dispatch_reader(ReaderAction::UnfollowTagReceived { id: 1, error: false });

        let ids: Vec<u64> = environment
            .storage
            .with(|data| data.reader_tags.keys().copied().collect());
        assert_eq!(ids, vec![2]);

        // clones share the same storage
        let cloned = environment.clone();
        cloned.dispatch_reader(ReaderAction::UnfollowTagReceived { id: 2, error: false });
        assert!(environment.storage.with(|data| data.reader_tags.is_empty()));
    }
}
