// ============================================================================
// albumart-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoverConfig
//
// This module implements the builder pattern for the CoverConfig structure,
// providing a fluent API for creating and configuring CoverConfig instances.
// Unset fields keep the defaults from `CoverConfig::default()`.
//
// KEY COMPONENTS:
// - CoverConfigBuilder: Builder struct for creating CoverConfig instances

// ---- Internal crate imports ----
use super::CoverConfig;

/// Builder for creating CoverConfig instances.
///
/// # Examples
///
/// ```rust
/// use albumart_core::config::CoverConfigBuilder;
///
/// let config = CoverConfigBuilder::new()
///     .copy_cover_name("folder")
///     .save_extension("png")
///     .build();
/// assert_eq!(config.default_cover_filename(), "folder.png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoverConfigBuilder {
    config: CoverConfig,
}

impl CoverConfigBuilder {
    /// Creates a new CoverConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list of base names tried during lookup.
    pub fn base_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.base_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the list of extensions tried during lookup.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the base name of the canonical cover file.
    ///
    /// # Arguments
    ///
    /// * `name` - Base name without extension, e.g. "cover"
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn copy_cover_name(mut self, name: impl Into<String>) -> Self {
        self.config.copy_cover_name = name.into();
        self
    }

    /// Sets the extension used for saved covers. A leading dot is dropped.
    pub fn save_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.config.save_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets the base name of the resized cover file.
    pub fn resize_name(mut self, name: impl Into<String>) -> Self {
        self.config.resize_name = name.into();
        self
    }

    /// Sets the resize bounding box in pixels.
    pub fn resize_dimension(mut self, dimension: u32) -> Self {
        self.config.resize_dimension = dimension;
        self
    }

    /// Sets the size limit in megabytes above which art is resized.
    pub fn max_cover_size_mb(mut self, megabytes: f64) -> Self {
        self.config.max_cover_size_mb = Some(megabytes);
        self
    }

    pub fn edit_all(mut self, enable: bool) -> Self {
        self.config.edit_all = enable;
        self
    }

    pub fn copy_cover(mut self, enable: bool) -> Self {
        self.config.copy_cover = enable;
        self
    }

    /// Builds the configuration. Call [`CoverConfig::validate`] before use.
    pub fn build(self) -> CoverConfig {
        self.config
    }
}
