// File: src/data.rs
// The built-in CV record plus loading of user-supplied records.
use crate::model::CvData;
use anyhow::Result;
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;

// Parsed once on first access. If the embedded record fails to parse this is
// an authoring error in the shipped asset; fail fast at startup.
static BUILTIN: Lazy<CvData> = Lazy::new(|| {
    toml::from_str(include_str!("../assets/cv.toml"))
        .expect("embedded CV record (assets/cv.toml) must be valid")
});

/// The record shipped inside the binary.
pub fn builtin() -> &'static CvData {
    &BUILTIN
}

/// Load a CV record from a user-supplied TOML file (the `--cv` flag or the
/// `cv_path` config field). Same format as the embedded record.
pub fn load_from_file(path: &Path) -> Result<CvData> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read CV file '{}': {}", path.display(), e))?;

    let cv: CvData = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse CV file '{}': {}", path.display(), e))?;

    cv.validate()?;
    Ok(cv)
}

/// Pick the record for this run: the `--cv` flag wins, then the config's
/// `cv_path`, then the built-in record.
pub fn resolve(cli_path: Option<&Path>, config_path: Option<&Path>) -> Result<CvData> {
    match cli_path.or(config_path) {
        Some(path) => load_from_file(path),
        None => {
            let cv = builtin().clone();
            cv.validate()?;
            Ok(cv)
        }
    }
}
