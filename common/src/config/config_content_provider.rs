use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.file_path.display(), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_write_then_read() {
        let mut path = std::env::temp_dir();
        path.push(format!("tictactoe_provider_test_{}.yaml", std::process::id()));
        let provider = FileContentConfigProvider::new(path.clone());

        provider.set_config_content("mode: two_player\n").unwrap();
        assert_eq!(
            provider.get_config_content(),
            Ok(Some("mode: two_player\n".to_string()))
        );

        let _ = std::fs::remove_file(path);
    }
}
