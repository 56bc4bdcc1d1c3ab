//! 静态缓存同步
//!
//! 通过 git 浅克隆 + sparse-checkout 只取 `cache` 子目录。

use crate::errors::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

const REPO_DIR: &str = "static";
const SPARSE_DIR: &str = "cache";

fn run_git(args: &[&str], cwd: &Path) -> Result<()> {
    debug!("git {} (cwd: {})", args.join(" "), cwd.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| CatalogError::external_command(format!("无法执行 git {}: {e}", args.join(" "))))?;

    if !output.status.success() {
        return Err(CatalogError::external_command(format!(
            "git {} 退出码 {:?}: {}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}

/// 克隆或更新静态数据仓库，返回缓存根目录 `<target_dir>/static/cache`
pub fn fetch_static_cache(target_dir: &Path, repository: &str, branch: &str) -> Result<PathBuf> {
    let repo_dir = target_dir.join(REPO_DIR);

    if repo_dir.join(".git").exists() {
        info!("更新静态数据仓库: {}", repo_dir.display());
        let remote_branch = format!("origin/{branch}");
        run_git(&["remote", "set-url", "origin", repository], &repo_dir)?;
        run_git(&["fetch", "--depth", "1", "origin", branch], &repo_dir)?;
        run_git(&["checkout", "-B", branch], &repo_dir)?;
        run_git(&["reset", "--hard", &remote_branch], &repo_dir)?;
    } else {
        info!("克隆静态数据仓库 {} 到 {}", repository, repo_dir.display());
        fs::create_dir_all(target_dir)?;
        run_git(
            &[
                "clone",
                "--no-checkout",
                "--depth",
                "1",
                "--branch",
                branch,
                repository,
                REPO_DIR,
            ],
            target_dir,
        )?;
    }

    run_git(&["sparse-checkout", "init", "--cone"], &repo_dir)?;
    run_git(&["sparse-checkout", "set", SPARSE_DIR], &repo_dir)?;
    run_git(&["checkout"], &repo_dir)?;

    Ok(repo_dir.join(SPARSE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_failure_is_external_command_error() {
        let missing = std::env::temp_dir().join("ustc-catalog-missing-cwd-for-git");
        let err = run_git(&["status"], &missing).unwrap_err();
        assert_eq!(err.code(), "E009");
    }
}
