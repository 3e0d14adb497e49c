use crate::{
    delegate::Delegate,
    extract::Regions,
    log::{error_excessive_depth, Error},
    syntax,
};

/// Greatest number of nested region instantiations a render may reach
/// before erroring. Only a cyclic region graph gets anywhere near it.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Render a template fragment against the given delegate.
///
/// Provides a shortcut to quickly render a fragment at index 0 when no
/// configuration is needed. Use [`Renderer`] to set an explicit index or
/// recursion limit.
///
/// # Errors
///
/// Returns an [`Error`] when the render exceeds the recursion limit, which
/// means a region (directly or indirectly) contains an item marker referring
/// back to itself.
///
/// # Examples
///
/// ```
/// use folio::{render, Regions, Store};
///
/// let regions = Regions::new();
/// let store = Store::new().with_must("Name", "taylor");
/// let result = render(r#"hello, <field name="Name"/>!"#, &store, &regions);
///
/// assert_eq!(result.unwrap(), "hello, taylor!");
/// ```
pub fn render(fragment: &str, delegate: &dyn Delegate, regions: &Regions) -> Result<String, Error> {
    Renderer::new(fragment, delegate, regions).render()
}

/// Substitutes field and item markers in a template fragment, recursing
/// into region bodies for every item repetition.
pub struct Renderer<'source, 'data> {
    /// The fragment being rendered.
    fragment: &'source str,
    /// The data source that markers are resolved against.
    delegate: &'data dyn Delegate,
    /// Bodies for every region an item marker may instantiate.
    regions: &'source Regions,
    /// Repetition index of the fragment, 0 at the top level.
    index: usize,
    /// Recursion guard for cyclic region graphs.
    max_depth: usize,
}

impl<'source, 'data> Renderer<'source, 'data> {
    /// Create a new Renderer over the given fragment.
    pub fn new(
        fragment: &'source str,
        delegate: &'data dyn Delegate,
        regions: &'source Regions,
    ) -> Self {
        Renderer {
            fragment,
            delegate,
            regions,
            index: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the repetition index the fragment is rendered at.
    ///
    /// Useful for partial rendering; [`Renderer::new`] defaults to 0.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;

        self
    }

    /// Set the recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;

        self
    }

    /// Render the fragment stored inside the Renderer.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the recursion limit is exceeded.
    pub fn render(&self) -> Result<String, Error> {
        self.render_fragment(self.fragment, self.delegate, self.index, 0)
    }

    /// Render one fragment: every field marker is resolved first, then every
    /// item marker expands into renderings of its region body, one per child
    /// delegate.
    fn render_fragment(
        &self,
        fragment: &str,
        delegate: &dyn Delegate,
        index: usize,
        depth: usize,
    ) -> Result<String, Error> {
        if depth > self.max_depth {
            return Err(error_excessive_depth(self.max_depth));
        }

        let result = self.substitute_fields(fragment, delegate, index);
        self.substitute_items(&result, delegate, index, depth)
    }

    /// Replace every field marker with the delegate's value for its name.
    ///
    /// Substitution is literal: each occurrence of the full matched marker
    /// text is replaced by the returned string, which is not re-scanned for
    /// markers. Markers that fail to match, such as a field missing its
    /// closing `/>`, pass through untouched.
    fn substitute_fields(&self, fragment: &str, delegate: &dyn Delegate, index: usize) -> String {
        let mut result = fragment.to_owned();

        for marker in syntax::field_markers(fragment) {
            let value = delegate.value_for_parameter(marker.name, index);
            result = result.replace(marker.text, &value);
        }

        result
    }

    /// Replace every item marker with the concatenated renderings of its
    /// region body, one per child delegate, each at its own 0-based index.
    ///
    /// A name with no extracted region contributes nothing, regardless of
    /// how many children the delegate reports.
    fn substitute_items(
        &self,
        fragment: &str,
        delegate: &dyn Delegate,
        index: usize,
        depth: usize,
    ) -> Result<String, Error> {
        let mut result = fragment.to_owned();

        for marker in syntax::item_markers(fragment) {
            let children = delegate.items_for_parameter(marker.name, index);
            let mut expansion = String::new();

            for (position, child) in children.iter().enumerate() {
                let body = match self.regions.get(marker.name) {
                    Some(body) => body,
                    None => continue,
                };
                expansion.push_str(&self.render_fragment(
                    body,
                    child.as_ref(),
                    position,
                    depth + 1,
                )?);
            }

            result = result.replace(marker.text, &expansion);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extract::extract, store::Store};
    use serde_json::json;

    #[test]
    fn test_literal_passthrough() {
        let source = "<p>no markers <b>here</b></p>";
        let result = render(source, &Store::new(), &Regions::new());

        assert_eq!(result.unwrap(), source);
    }

    #[test]
    fn test_field_substitution() {
        let store = Store::new().with_must("X", "42");
        let result = render(r#"<field name="X"/>"#, &store, &Regions::new());

        assert_eq!(result.unwrap(), "42");
    }

    #[test]
    fn test_field_case_insensitive_tag() {
        let store = Store::new().with_must("X", "1");
        let result = render(r#"<FIELD name="X"/>"#, &store, &Regions::new());

        assert_eq!(result.unwrap(), "1");
    }

    #[test]
    fn test_field_name_verbatim() {
        // The stored key is lowercase; the marker name must not be folded.
        let store = Store::new().with_must("x", "1");
        let result = render(r#"<field name="X"/>"#, &store, &Regions::new());

        assert_eq!(result.unwrap(), "X");
    }

    #[test]
    fn test_malformed_marker_passthrough() {
        let store = Store::new().with_must("X", "42");
        let source = r#"<field name="X"> and <item name="Y" />"#;
        let result = render(source, &store, &Regions::new());

        assert_eq!(result.unwrap(), source);
    }

    #[test]
    fn test_item_expansion() {
        let source = r#"<region name="R"><field name="V"/></region><item name="R"/>"#;
        let (body, regions) = extract(source);
        let store = Store::new().with_must("R", json!([{"V": "a"}, {"V": "b"}, {"V": "c"}]));
        let result = render(&body, &store, &regions);

        assert_eq!(result.unwrap(), "abc");
    }

    #[test]
    fn test_item_expansion_empty() {
        let regions = Regions::new().with("R", r#"<field name="V"/>"#);
        let store = Store::new().with_must("R", json!([]));
        let result = render(r#"<item name="R"/>"#, &store, &regions);

        assert_eq!(result.unwrap(), "");
    }

    /// A delegate that reports a fixed number of children and resolves
    /// every field to its own repetition index.
    struct Positions(usize);

    impl Delegate for Positions {
        fn value_for_parameter(&self, _parameter: &str, index: usize) -> String {
            index.to_string()
        }

        fn items_for_parameter(&self, _parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
            (0..self.0).map(|_| Box::new(Positions(0)) as _).collect()
        }
    }

    #[test]
    fn test_index_correctness() {
        let regions = Regions::new().with("R", r#"<field name="I"/>"#);
        let result = render(r#"<item name="R"/>"#, &Positions(3), &regions);

        assert_eq!(result.unwrap(), "012");
    }

    #[test]
    fn test_undefined_region_tolerance() {
        let result = render(r#"<item name="Missing"/>"#, &Positions(5), &Regions::new());

        assert_eq!(result.unwrap(), "");
    }

    struct Outer;
    struct Mid(Vec<&'static str>);
    struct Leaf(&'static str);

    impl Delegate for Outer {
        fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
            parameter.to_string()
        }

        fn items_for_parameter(&self, _parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
            vec![
                Box::new(Mid(vec!["a", "b"])),
                Box::new(Mid(vec!["c", "d"])),
            ]
        }
    }

    impl Delegate for Mid {
        fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
            parameter.to_string()
        }

        fn items_for_parameter(&self, _parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
            self.0.iter().copied().map(|value| Box::new(Leaf(value)) as _).collect()
        }
    }

    impl Delegate for Leaf {
        fn value_for_parameter(&self, _parameter: &str, _index: usize) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_nested_items_row_major() {
        let regions = Regions::new()
            .with("Outer", r#"<item name="Inner"/>"#)
            .with("Inner", r#"<field name="V"/>"#);
        let result = render(r#"<item name="Outer"/>"#, &Outer, &regions);

        assert_eq!(result.unwrap(), "abcd");
    }

    /// A delegate that always reports one child, driving a cyclic region
    /// graph into the recursion guard.
    struct Cycle;

    impl Delegate for Cycle {
        fn value_for_parameter(&self, _parameter: &str, _index: usize) -> String {
            String::new()
        }

        fn items_for_parameter(&self, _parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
            vec![Box::new(Cycle)]
        }
    }

    #[test]
    fn test_cyclic_region_errors() {
        let regions = Regions::new().with("R", r#"<item name="R"/>"#);
        let result = render(r#"<item name="R"/>"#, &Cycle, &regions);

        assert_eq!(result.unwrap_err(), error_excessive_depth(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_with_max_depth() {
        let regions = Regions::new().with("R", r#"<item name="R"/>"#);
        let result = Renderer::new(r#"<item name="R"/>"#, &Cycle, &regions)
            .with_max_depth(4)
            .render();

        assert_eq!(result.unwrap_err(), error_excessive_depth(4));
    }

    #[test]
    fn test_with_index() {
        let regions = Regions::new();
        let result = Renderer::new(r#"<field name="I"/>"#, &Positions(0), &regions)
            .with_index(7)
            .render();

        assert_eq!(result.unwrap(), "7");
    }
}
