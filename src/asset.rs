use std::fmt;
use std::str::FromStr;

use crate::error::DeckError;

/// A background image reference such as `harbor.jpg`, kept split so a
/// device suffix can be slotted in before the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub name: String,
    pub extension: String,
}

impl AssetReference {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self { name: name.into(), extension: extension.into() }
    }
}

impl FromStr for AssetReference {
    type Err = DeckError;

    /// Splits on the first dot: `a.b.c` is name `a`, extension `b`.
    fn from_str(reference: &str) -> Result<Self, Self::Err> {
        let mut parts = reference.split('.');
        let name = parts.next().unwrap_or_default();
        match parts.next() {
            Some(extension) if !name.is_empty() && !extension.is_empty() => {
                Ok(Self::new(name, extension))
            }
            _ => Err(DeckError::MalformedAssetReference(reference.to_string())),
        }
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.extension)
    }
}

/// Turns asset references into paths the host can load.
pub trait AssetResolver {
    fn resolve_background(&self, root: &str, asset: &AssetReference, suffix: &str) -> String;
    fn resolve_inline(&self, root: &str, filename: &str) -> String;
}

/// Plain string concatenation; never checks that the file exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl AssetResolver for PathResolver {
    fn resolve_background(&self, root: &str, asset: &AssetReference, suffix: &str) -> String {
        format!("{}{}{}.{}", root, asset.name, suffix, asset.extension)
    }

    fn resolve_inline(&self, root: &str, filename: &str) -> String {
        format!("{}{}", root, filename)
    }
}
