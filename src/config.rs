use std::collections::HashSet;

use image::imageops::FilterType;

use crate::error::{IconError, Result};

/// Square edge lengths (px) expected by a typical PWA manifest.
pub const PWA_ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

pub const DEFAULT_PREFIX: &str = "icon";

#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub sizes: Vec<u32>,
    pub prefix: String,
    pub filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: PWA_ICON_SIZES.to_vec(),
            prefix: DEFAULT_PREFIX.to_string(),
            // windowed sinc
            filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    pub fn with_sizes(sizes: &[u32]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            ..Self::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// File name for one size, e.g. `icon-192x192.png`.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{}x{}.png", self.prefix, size, size)
    }

    /// Every size must be positive and unique so each output gets its own file.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.trim().is_empty() {
            return Err(IconError::Config("file prefix must not be empty".into()));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(IconError::Config(format!(
                "file prefix must not contain path separators: {}",
                self.prefix
            )));
        }
        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(IconError::Config("icon size must be greater than 0".into()));
            }
            if !seen.insert(size) {
                return Err(IconError::Config(format!("duplicate icon size {}", size)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes_and_names() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.sizes, vec![72, 96, 128, 144, 152, 192, 384, 512]);
        assert_eq!(cfg.filter, FilterType::Lanczos3);
        assert_eq!(cfg.file_name(72), "icon-72x72.png");
        assert_eq!(cfg.file_name(512), "icon-512x512.png");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_custom_prefix_and_filter() {
        let cfg = IconConfig::with_sizes(&[16, 32])
            .prefix("favicon")
            .filter(FilterType::CatmullRom);
        assert_eq!(cfg.file_name(32), "favicon-32x32.png");
        assert_eq!(cfg.filter, FilterType::CatmullRom);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_configs() {
        let bad = [
            IconConfig::with_sizes(&[0, 16]),
            IconConfig::with_sizes(&[16, 32, 16]),
            IconConfig::default().prefix("  "),
            IconConfig::default().prefix("a/b"),
        ];
        for cfg in &bad {
            assert!(matches!(cfg.validate(), Err(IconError::Config(_))), "{:?}", cfg);
        }
    }
}
