// Tests for the built-in record, file loading, and validation.
use std::fs;
use std::path::PathBuf;
use vitae::data;
use vitae::model::CvData;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vitae-data-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn builtin_record_parses_and_validates() {
    let cv = data::builtin();
    cv.validate().unwrap();

    // The shipped record is fully populated.
    assert!(!cv.profile.email.is_empty());
    assert!(!cv.about.is_empty());
    assert!(!cv.education.is_empty());
    assert!(!cv.experience.is_empty());
    assert!(!cv.languages.is_empty());
    assert!(!cv.skills.is_empty());
    assert!(cv.profile.links.iter().all(|l| !l.url.is_empty()));
}

#[test]
fn record_round_trips_through_toml() {
    let cv = data::builtin().clone();
    let serialized = toml::to_string(&cv).unwrap();
    let reparsed: CvData = toml::from_str(&serialized).unwrap();
    assert_eq!(cv, reparsed);
}

#[test]
fn load_from_file_accepts_a_minimal_record() {
    let path = temp_file(
        "minimal.toml",
        r#"
[profile]
firstname = "Ada"
surname = "Lovelace"
city = "London"
email = "ada@example.org"
birth_date = "10/12/1815"
phone = "+44 1234"
"#,
    );

    let cv = data::load_from_file(&path).unwrap();
    assert_eq!(cv.profile.firstname, "Ada");
    // Omitted sections default to empty lists.
    assert!(cv.about.is_empty());
    assert!(cv.education.is_empty());
    assert!(cv.profile.links.is_empty());
}

#[test]
fn load_from_file_rejects_an_empty_email() {
    let path = temp_file(
        "no_email.toml",
        r#"
[profile]
firstname = "Ada"
surname = "Lovelace"
city = "London"
email = ""
birth_date = ""
phone = ""
"#,
    );

    let err = data::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("email"));
}

#[test]
fn load_from_file_reports_missing_files() {
    let err = data::load_from_file(std::path::Path::new("/nonexistent/cv.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn load_from_file_reports_syntax_errors() {
    let path = temp_file("broken.toml", "[[profile]\nnot toml at all");
    let err = data::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn resolve_prefers_the_cli_path() {
    let cli = temp_file(
        "cli.toml",
        r#"
[profile]
firstname = "Cli"
surname = "Record"
city = ""
email = "cli@example.org"
birth_date = ""
phone = ""
"#,
    );
    let cfg = temp_file(
        "cfg.toml",
        r#"
[profile]
firstname = "Config"
surname = "Record"
city = ""
email = "cfg@example.org"
birth_date = ""
phone = ""
"#,
    );

    let cv = data::resolve(Some(&cli), Some(&cfg)).unwrap();
    assert_eq!(cv.profile.firstname, "Cli");

    let cv = data::resolve(None, Some(&cfg)).unwrap();
    assert_eq!(cv.profile.firstname, "Config");

    let cv = data::resolve(None, None).unwrap();
    assert_eq!(&cv, data::builtin());
}
