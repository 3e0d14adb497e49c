use crate::syntax;
use std::collections::HashMap;

/// Mapping from region name to region body text.
///
/// Built fresh by [`extract`] for every top-level render and read-only while
/// the render runs. Callers doing partial rendering may also assemble one by
/// hand with the builder methods.
#[derive(Debug, Default, PartialEq)]
pub struct Regions {
    data: HashMap<String, String>,
}

impl Regions {
    /// Create a new, empty Regions map.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert a region body under the given name.
    ///
    /// If the name is already present, the new body overwrites the old one.
    #[inline]
    pub fn insert<S, T>(&mut self, name: S, body: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.data.insert(name.into(), body.into());
    }

    /// Insert a region body under the given name.
    ///
    /// Returns the Regions map, so additional methods may be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Regions;
    ///
    /// let regions = Regions::new().with("Row", r#"<field name="V"/>"#);
    /// assert_eq!(regions.get("Row"), Some(r#"<field name="V"/>"#));
    /// ```
    #[inline]
    pub fn with<S, T>(mut self, name: S, body: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.insert(name, body);
        self
    }

    /// Get the body of the given region, if any.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(|body| body.as_str())
    }

    /// Return true if no regions are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of stored regions.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Remove every region block from the template and collect their bodies.
///
/// Returns the region-free template together with the name-to-body map.
/// If the same name is defined twice, the later body wins; both blocks are
/// still removed from the template. A template without region blocks comes
/// back unchanged, with an empty map.
///
/// # Examples
///
/// ```
/// use folio::extract;
///
/// let (body, regions) = extract(r#"<region name="Row">x</region><item name="Row"/>"#);
///
/// assert_eq!(body, r#"<item name="Row"/>"#);
/// assert_eq!(regions.get("Row"), Some("x"));
/// ```
pub fn extract(source: &str) -> (String, Regions) {
    let mut remaining = source.to_owned();
    let mut regions = Regions::new();

    for block in syntax::region_blocks(source) {
        remaining = remaining.replace(block.text, "");
        regions.insert(block.name, block.body);
    }

    (remaining, regions)
}
