use super::types::{SetupConfig, SignupProgress, StepSubmission};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const CONFIG_PATH: &str = "config.json";
const PROGRESS_PATH: &str = "progress.json";

#[derive(Clone)]
pub struct Repository {
    config: Arc<Mutex<SetupConfig>>,
    progress: Arc<Mutex<SignupProgress>>,
    persist: bool,
}

impl Repository {
    pub fn new() -> Self {
        let config = read(CONFIG_PATH).ok().flatten().unwrap_or_default();
        let progress = read(PROGRESS_PATH).ok().flatten().unwrap_or_default();

        Self {
            config: Arc::new(Mutex::new(config)),
            progress: Arc::new(Mutex::new(progress)),
            persist: true,
        }
    }

    /// A repository that never touches the disk
    pub fn in_memory(config: SetupConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            progress: Arc::default(),
            persist: false,
        }
    }

    pub fn config(&self) -> Result<SetupConfig, String> {
        Ok(self
            .config
            .lock()
            .map_err(|e| format!("Config Data Error: {e:?}"))?
            .clone())
    }

    pub fn progress(&self) -> Result<SignupProgress, String> {
        Ok(self
            .progress
            .lock()
            .map_err(|e| format!("Progress Data Error: {e:?}"))?
            .clone())
    }

    /// Store a step answer. A step that is submitted again replaces its
    /// earlier answer.
    pub fn insert_submission(&self, submission: StepSubmission) -> Result<(), String> {
        let mut progress = self
            .progress
            .lock()
            .map_err(|e| format!("Progress Data Error: {e:?}"))?;
        progress
            .steps
            .retain(|step| step.step_name != submission.step_name);
        progress.steps.push(submission);

        if self.persist {
            if let Err(e) = write(PROGRESS_PATH, progress.deref()) {
                log::error!("Could not save progress: {e:?}");
            }
        }
        Ok(())
    }
}

fn read<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    let data_path = data_directory()?.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(name: &str, value: &T) -> Result<(), String> {
    let data_path = data_directory()?.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    let Some(proj_dirs) = ProjectDirs::from("com", "sitesetup", "sitesetup") else {
        return Err("Couldn't find a folder to save data".to_string());
    };
    let dirs = proj_dirs.config_dir().to_path_buf();
    if !dirs.exists() {
        std::fs::create_dir_all(&dirs)
            .map_err(|e| format!("Could not create directory {}: {e:?}", dirs.display()))?;
    }
    Ok(dirs)
}
