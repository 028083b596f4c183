//! # Application
//!
//! The application is built in one explicit step, [`Application::init`], which
//! loads the config and README resources through a [`ResourceLocator`] and
//! freezes them into an [`AppContext`]. After that every operation is a pure
//! function of the context and its arguments.
//!
//! Like the rest of the library, nothing here prints. Rendering belongs to the
//! binary.

use crate::error::Result;
use crate::locator::ResourceLocator;
use crate::model::{ProcessResult, WordStats};
use crate::processor::JsonProcessor;
use crate::settings::Settings;
use crate::strings;
use tracing::{debug, info};

/// Text loaded once at startup. Read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub config: String,
    pub readme: String,
}

impl AppContext {
    pub fn new(config: impl Into<String>, readme: impl Into<String>) -> Self {
        Self {
            config: config.into(),
            readme: readme.into(),
        }
    }

    /// The first line of the config, or empty when there is no config text.
    pub fn config_headline(&self) -> &str {
        self.config.lines().next().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct Application {
    context: AppContext,
    processor: JsonProcessor,
}

impl Application {
    /// Loads the config and README resources named in `settings`.
    ///
    /// # Errors
    /// Fails with `ResourceNotFound` / `ResourceUnreadable` naming the resource
    /// that could not be loaded.
    pub fn init<L: ResourceLocator>(locator: &L, settings: &Settings) -> Result<Self> {
        let config = load_text(locator, &settings.config_resource)?;
        let readme = load_text(locator, &settings.readme_resource)?;
        Ok(Self::with_context(AppContext::new(config, readme)))
    }

    pub fn with_context(context: AppContext) -> Self {
        Self {
            context,
            processor: JsonProcessor::new(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn processor(&self) -> &JsonProcessor {
        &self.processor
    }

    /// Splits `message` into words and computes word-length statistics,
    /// optionally reversing the word order first.
    pub fn process_message(&self, message: &str, reverse: bool) -> ProcessResult {
        let message = if reverse {
            strings::reverse_words(message)
        } else {
            message.to_string()
        };

        let words = strings::split_words(&message);
        let word_stats = WordStats::from_words(&words);
        debug!(word_count = words.len(), ?word_stats, "processed message");

        ProcessResult {
            word_count: words.len(),
            config: self.context.config_headline().to_string(),
            message,
            words,
            word_stats,
        }
    }
}

fn load_text<L: ResourceLocator>(locator: &L, name: &str) -> Result<String> {
    let resource = locator.resolve(name)?;
    info!(resource = %resource.name, origin = %resource.origin, "loaded resource");
    Ok(resource.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::locator::InMemoryLocator;

    fn test_locator() -> InMemoryLocator {
        InMemoryLocator::new()
            .with_resource("_main/config/app.config", "\n  app.name=demo\napp.mode=test\n")
            .with_resource("_main/resources/README.txt", "  Read me.  \n")
    }

    fn test_app() -> Application {
        Application::init(&test_locator(), &Settings::default()).unwrap()
    }

    #[test]
    fn test_init_trims_resources() {
        let app = test_app();
        assert_eq!(app.context().config, "app.name=demo\napp.mode=test");
        assert_eq!(app.context().readme, "Read me.");
    }

    #[test]
    fn test_init_missing_config() {
        let locator = InMemoryLocator::new().with_resource("_main/resources/README.txt", "r");
        let err = Application::init(&locator, &Settings::default()).unwrap_err();

        match err {
            AppError::ResourceNotFound { name, .. } => assert_eq!(name, "_main/config/app.config"),
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_init_missing_readme() {
        let locator = InMemoryLocator::new().with_resource("_main/config/app.config", "c");
        let err = Application::init(&locator, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("_main/resources/README.txt"));
    }

    #[test]
    fn test_init_uses_configured_names() {
        let locator = InMemoryLocator::new()
            .with_resource("custom/cfg", "alt")
            .with_resource("custom/readme", "doc");
        let settings = Settings {
            config_resource: "custom/cfg".into(),
            readme_resource: "custom/readme".into(),
            ..Settings::default()
        };

        let app = Application::init(&locator, &settings).unwrap();

        assert_eq!(app.context().config_headline(), "alt");
    }

    #[test]
    fn test_process_message_stats() {
        let result = test_app().process_message("a bb ccc", false);

        assert_eq!(result.words, vec!["a", "bb", "ccc"]);
        assert_eq!(result.word_count, 3);
        assert_eq!(result.word_stats.mean_length, 2.0);
        assert_eq!(result.word_stats.max_length, 3);
        assert_eq!(result.word_stats.min_length, 1);
        assert_eq!(result.config, "app.name=demo");
    }

    #[test]
    fn test_process_empty_message() {
        let result = test_app().process_message("", false);

        assert_eq!(result.message, "");
        assert!(result.words.is_empty());
        assert_eq!(result.word_count, 0);
        assert_eq!(result.word_stats, WordStats::default());
    }

    #[test]
    fn test_process_message_reverse() {
        let result = test_app().process_message("One  Two Three!", true);

        assert_eq!(result.message, "Three! Two One");
        assert_eq!(result.words, vec!["Three", "Two", "One"]);
    }

    #[test]
    fn test_process_message_punctuation() {
        let result = test_app().process_message("Hello, World!", false);
        assert_eq!(result.message, "Hello, World!");
        assert_eq!(result.words, vec!["Hello", "World"]);
        assert_eq!(result.word_stats.mean_length, 5.0);
    }

    #[test]
    fn test_empty_config_headline() {
        let app = Application::with_context(AppContext::new("", "readme"));
        assert_eq!(app.process_message("x", false).config, "");
    }

    #[test]
    fn test_result_json_keys() {
        let app = test_app();
        let result = app.process_message("a bb", false);

        let json = app.processor().to_json(&result).unwrap();
        let value: serde_json::Value = app.processor().from_json(&json).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(
            keys,
            vec!["config", "message", "word_count", "word_stats", "words"]
        );
    }

    #[test]
    fn test_result_roundtrips_through_json_and_yaml() {
        let app = test_app();
        let result = app.process_message("round trip me", false);
        let processor = app.processor();

        let from_json: ProcessResult = processor
            .from_json(&processor.to_json(&result).unwrap())
            .unwrap();
        let from_yaml: ProcessResult = processor
            .from_yaml(&processor.to_yaml(&result).unwrap())
            .unwrap();

        assert_eq!(from_json, result);
        assert_eq!(from_yaml, result);
    }
}
