use anyhow::Result;
use std::path::Path;

use awssume_core::fs::FileSystem;
use awssume_infrastructure::ConfigStore;

pub fn run<F: FileSystem>(store: &ConfigStore<F>, path: &Path, alias: &str) -> Result<()> {
    let mut config = store.load(path)?;
    let removed = config.roles.remove_by_alias(alias)?;
    store.save(&config)?;

    tracing::info!(alias, arn = %removed.arn(), "role removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awssume_core::AwssumeError;
    use awssume_infrastructure::MemoryFileSystem;

    #[test]
    fn test_remove_role() {
        let fs = MemoryFileSystem::with_files([(
            "cfg.json",
            r#"{"roles":[{"alias":"skunk","arn":"arn:aws:iam::000000000000:role/skunk","session_name":"sess"}]}"#,
        )]);
        let store = ConfigStore::new(&fs);

        run(&store, Path::new("cfg"), "skunk").unwrap();

        assert!(store.load("cfg").unwrap().roles.is_empty());
    }

    #[test]
    fn test_remove_unknown_alias() {
        let fs = MemoryFileSystem::new();
        let store = ConfigStore::new(&fs);

        let err = run(&store, Path::new("cfg"), "missing").unwrap_err();
        assert_eq!(err.to_string(), "no role with alias missing found");
        assert!(err.downcast_ref::<AwssumeError>().unwrap().is_role_not_found());
    }
}
