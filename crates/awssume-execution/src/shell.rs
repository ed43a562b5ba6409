//! Default shell resolution for `exec` without a command.

use std::path::Path;

use awssume_core::{AwssumeError, Result};

const FALLBACK_SHELLS: [&str; 2] = ["/bin/bash", "/bin/sh"];

/// Returns `$SHELL`, else the first of `/bin/bash`, `/bin/sh` that exists.
pub fn default_shell() -> Result<String> {
    resolve_shell(std::env::var("SHELL").ok(), &FALLBACK_SHELLS)
}

fn resolve_shell(configured: Option<String>, fallbacks: &[&str]) -> Result<String> {
    if let Some(shell) = configured.filter(|s| !s.is_empty()) {
        return Ok(shell);
    }

    fallbacks
        .iter()
        .find(|candidate| Path::new(candidate).is_file())
        .map(|candidate| candidate.to_string())
        .ok_or(AwssumeError::NoShellFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_shell_wins() {
        let shell = resolve_shell(Some("/usr/bin/fish".to_string()), &[]).unwrap();
        assert_eq!(shell, "/usr/bin/fish");
    }

    #[test]
    fn test_empty_shell_falls_back() {
        let shell = resolve_shell(Some(String::new()), &["/nonexistent/shell", "/bin/sh"]);
        #[cfg(unix)]
        assert_eq!(shell.unwrap(), "/bin/sh");
        #[cfg(not(unix))]
        assert!(shell.is_err());
    }

    #[test]
    fn test_no_shell_found() {
        let err = resolve_shell(None, &["/nonexistent/shell"]).unwrap_err();
        assert!(matches!(err, AwssumeError::NoShellFound));
    }
}
