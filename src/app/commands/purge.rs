use crate::domain::{AppError, ItemFailure, RepoId, StageReport};
use crate::ports::HostPort;

/// Delete every release; per-item failures are recorded and skipped over.
pub fn releases(
    host: &impl HostPort,
    repo: &RepoId,
    dry_run: bool,
) -> Result<StageReport, AppError> {
    let names = host.list_releases(repo)?;
    Ok(purge_each(names, dry_run, |tag| host.delete_release(repo, tag)))
}

/// Delete every tag reference, whether or not a release was attached.
pub fn tags(host: &impl HostPort, repo: &RepoId, dry_run: bool) -> Result<StageReport, AppError> {
    let names = host.list_tags(repo)?;
    Ok(purge_each(names, dry_run, |tag| host.delete_tag_ref(repo, tag)))
}

/// Delete every branch except `default_branch`.
///
/// Exclusion is by exact name equality only; a branch whose name merely
/// contains or extends the default is still deleted.
pub fn branches(
    host: &impl HostPort,
    repo: &RepoId,
    default_branch: &str,
    dry_run: bool,
) -> Result<StageReport, AppError> {
    let names: Vec<String> = host
        .list_branches(repo)?
        .into_iter()
        .filter(|name| name != default_branch)
        .collect();
    Ok(purge_each(names, dry_run, |branch| host.delete_branch_ref(repo, branch)))
}

fn purge_each(
    names: Vec<String>,
    dry_run: bool,
    mut delete: impl FnMut(&str) -> Result<(), AppError>,
) -> StageReport {
    let mut report = StageReport::default();
    for name in names {
        if dry_run {
            report.deleted.push(name);
            continue;
        }
        match delete(&name) {
            Ok(()) => report.deleted.push(name),
            Err(err) => report.failed.push(ItemFailure { name, error: err.to_string() }),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::testing::FakeHost;

    fn repo() -> RepoId {
        RepoId::from_str("acme/widgets").unwrap()
    }

    #[test]
    fn deletes_every_release_in_listing_order() {
        let host = FakeHost::new("main").with_releases(&["v1", "v2", "v3"]);

        let report = releases(&host, &repo(), false).unwrap();

        assert_eq!(report.deleted, vec!["v1", "v2", "v3"]);
        assert!(report.is_clean());
        assert!(host.releases.lock().unwrap().is_empty());
    }

    #[test]
    fn deletes_tags_without_releases() {
        let host = FakeHost::new("main").with_tags(&["v1", "untagged-build"]);

        let report = tags(&host, &repo(), false).unwrap();

        assert_eq!(report.deleted, vec!["v1", "untagged-build"]);
        assert!(host.tags.lock().unwrap().is_empty());
    }

    #[test]
    fn keeps_the_default_branch() {
        let host = FakeHost::new("main").with_branches(&["main", "dev", "feature/x"]);

        let report = branches(&host, &repo(), "main", false).unwrap();

        assert_eq!(report.deleted, vec!["dev", "feature/x"]);
        assert_eq!(*host.branches.lock().unwrap(), vec!["main"]);
    }

    #[test]
    fn default_branch_exclusion_is_exact() {
        let host = FakeHost::new("main").with_branches(&["main", "main-backup", "ma"]);

        let report = branches(&host, &repo(), "main", false).unwrap();

        assert_eq!(report.deleted, vec!["main-backup", "ma"]);
        assert_eq!(*host.branches.lock().unwrap(), vec!["main"]);
    }

    #[test]
    fn failed_delete_is_recorded_and_the_loop_continues() {
        let host = FakeHost::new("main").with_tags(&["v1", "v2", "v3"]);
        host.fail_on("v2");

        let report = tags(&host, &repo(), false).unwrap();

        assert_eq!(report.deleted, vec!["v1", "v3"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "v2");
        assert!(!report.is_clean());
    }

    #[test]
    fn dry_run_enumerates_without_deleting() {
        let host = FakeHost::new("main").with_tags(&["v1", "v2"]);

        let report = tags(&host, &repo(), true).unwrap();

        assert_eq!(report.deleted, vec!["v1", "v2"]);
        assert_eq!(*host.tags.lock().unwrap(), vec!["v1", "v2"]);
        assert!(host.deleted.lock().unwrap().is_empty());
    }

    #[test]
    fn second_run_finds_nothing_to_delete() {
        let host = FakeHost::new("main").with_releases(&["v1"]);

        releases(&host, &repo(), false).unwrap();
        let report = releases(&host, &repo(), false).unwrap();

        assert!(report.deleted.is_empty());
        assert!(report.failed.is_empty());
    }
}
