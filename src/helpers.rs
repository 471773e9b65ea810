use std::path::Path;

pub trait PathRefExt {
    fn str(&self) -> &str;
    fn filestem(&self) -> String;
    fn ext_is(&self, ext: &str) -> bool;
}

impl<T: AsRef<Path>> PathRefExt for T {
    fn str(&self) -> &str {
        self.as_ref().to_str().unwrap_or("<non-utf8 path>")
    }

    fn filestem(&self) -> String {
        self.as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn ext_is(&self, ext: &str) -> bool {
        self.as_ref().extension().and_then(|e| e.to_str()) == Some(ext)
    }
}
