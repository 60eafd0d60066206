#![allow(dead_code)]

use starter_answers::{Answers, LocalFilesystem};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory and the path of an answers file inside it.
///
/// The file itself is not created.
pub fn answers_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".starter-kit-answers");
    (dir, path)
}

/// Fills every field with a non-default value.
pub fn fill_every_field(answers: &mut Answers<LocalFilesystem>) {
    answers.author_email = Some("ben@example.com".into());
    answers.author_holds_copyright = false;
    answers.author_name = Some("Ben Ramsey".into());
    answers.author_url = Some("https://benramsey.com".into());
    answers.code_of_conduct = Some("Contributor-2.1".into());
    answers.code_of_conduct_committee = Some("Conduct Committee".into());
    answers.code_of_conduct_email = Some("conduct@example.com".into());
    answers.code_of_conduct_policies_url = Some("https://example.com/policies".into());
    answers.code_of_conduct_reporting_url = Some("https://example.com/report".into());
    answers.copyright_email = Some("legal@example.com".into());
    answers.copyright_holder = Some("Acme, Inc.".into());
    answers.copyright_url = Some("https://example.com/".into());
    answers.copyright_year = Some("2026".into());
    answers.github_username = Some("acme".into());
    answers.license = Some("MIT".into());
    answers.package_description = Some("Widgets, with ümlauts".into());
    answers.package_keywords = vec!["library".into(), "starter".into()];
    answers.package_name = Some("acme/widgets".into());
    answers.package_namespace = Some("Acme\\Widgets".into());
    answers.project_name = Some("Widgets".into());
    answers.security_policy = false;
    answers.security_policy_contact_email = Some("security@example.com".into());
    answers.security_policy_contact_form_url = Some("https://example.com/security".into());
    answers.skip_prompts = true;
    answers.vendor_name = Some("Acme".into());
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
