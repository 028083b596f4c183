use super::{Resource, ResourceLocator};
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

const ORIGIN_PREFIX: &str = "memory:";

#[derive(Debug, Default, Clone)]
pub struct InMemoryLocator {
    resources: HashMap<String, String>,
}

impl InMemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.resources.insert(name.into(), content.into());
    }
}

impl ResourceLocator for InMemoryLocator {
    fn resolve(&self, name: &str) -> Result<Resource> {
        let content = self
            .resources
            .get(name)
            .ok_or_else(|| AppError::ResourceNotFound {
                name: name.to_string(),
                path: PathBuf::from(format!("{}{}", ORIGIN_PREFIX, name)),
            })?;

        Ok(Resource {
            name: name.to_string(),
            origin: format!("{}{}", ORIGIN_PREFIX, name),
            content: content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        let locator = InMemoryLocator::new().with_resource("_main/a.txt", "hello");
        let res = locator.resolve("_main/a.txt").unwrap();
        assert_eq!(res.content, "hello");
        assert_eq!(res.origin, "memory:_main/a.txt");
    }

    #[test]
    fn test_resolve_missing() {
        let locator = InMemoryLocator::new();
        let err = locator.resolve("_main/nope").unwrap_err();
        assert!(matches!(err, AppError::ResourceNotFound { ref name, .. } if name == "_main/nope"));
    }
}
