use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Extensions tried, in order, when resolving an image identifier
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Maps image identifiers ("49ersLogo", "49ersschedule", ...) to files
/// in the assets directory.
///
/// Views resolve on every redraw, so each missing identifier is only
/// logged the first time it is looked up.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    dir: PathBuf,
    reported_missing: RefCell<BTreeSet<String>>,
}

impl AssetResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            reported_missing: RefCell::new(BTreeSet::new()),
        }
    }

    /// First existing `<dir>/<id>.<ext>`, or None if the asset is missing
    pub fn resolve(&self, id: &str) -> Option<PathBuf> {
        let found = IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", id, ext)))
            .find(|path| path.is_file());

        if found.is_none() && self.reported_missing.borrow_mut().insert(id.to_string()) {
            tracing::debug!(id, dir = %self.dir.display(), "image asset missing");
        }

        found
    }

    /// Identifiers that failed to resolve so far, in sorted order
    pub fn missing_assets(&self) -> Vec<String> {
        self.reported_missing.borrow().iter().cloned().collect()
    }
}
