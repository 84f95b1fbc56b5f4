use crate::error::{GraniteError, Result};

/// Ordered, non-empty list of image locators shown by one viewer session.
///
/// Locators are opaque (URLs or file paths); the viewer never inspects them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageList {
    locators: Vec<String>,
}

impl ImageList {
    pub fn new<I, S>(locators: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locators: Vec<String> = locators.into_iter().map(Into::into).collect();
        if locators.is_empty() {
            return Err(GraniteError::EmptyImageList);
        }
        Ok(Self { locators })
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.locators.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locators.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locators
    }
}
