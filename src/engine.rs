use crate::{
    delegate::Delegate,
    extract::extract,
    log::{error_missing_template, Error},
    render::{Renderer, DEFAULT_MAX_DEPTH},
};
use std::collections::HashMap;

/// Facilitates rendering templates against delegates, and provides storage
/// for named templates.
///
/// Region extraction happens inside every render call, so a stored template
/// keeps its region blocks until the moment it is rendered.
pub struct Engine<'source> {
    /// Raw template text that this Engine is aware of, by name.
    templates: HashMap<String, &'source str>,
    /// Recursion limit handed to every render.
    max_depth: usize,
}

impl<'source> Engine<'source> {
    /// Create a new instance of [`Engine`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit handed to every render.
    ///
    /// Returns the Engine, so additional methods may be chained.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;

        self
    }

    /// Render raw template text against the given [`Delegate`].
    ///
    /// Extracts region blocks first, then renders the region-free remainder
    /// at index 0.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the render exceeds the recursion limit,
    /// which means the template's region graph is cyclic.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::{Engine, Store};
    ///
    /// let engine = Engine::new();
    /// let store = Store::new().with_must("Name", "taylor");
    /// let result = engine.render(r#"hello, <field name="Name"/>!"#, &store);
    ///
    /// assert_eq!(result.unwrap(), "hello, taylor!")
    /// ```
    pub fn render(&self, source: &str, delegate: &dyn Delegate) -> Result<String, Error> {
        let (body, regions) = extract(source);

        Renderer::new(&body, delegate, &regions)
            .with_max_depth(self.max_depth)
            .render()
    }

    /// Render the stored template with the given name against the delegate.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when no template with the given name exists, or
    /// when the render exceeds the recursion limit.
    pub fn render_named(&self, name: &str, delegate: &dyn Delegate) -> Result<String, Error> {
        match self.get_template(name) {
            Some(source) => self.render(source, delegate),
            None => Err(error_missing_template(name)),
        }
    }

    /// Store new template text with the given name.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when a template with the given name already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Engine;
    ///
    /// let mut engine = Engine::new();
    /// let result = engine.add_template("invoice", r#"<field name="Total"/>"#);
    /// assert!(result.is_ok());
    ///
    /// let second = engine.add_template("invoice", "hello again");
    /// assert!(second.is_err());
    /// ```
    pub fn add_template(&mut self, name: &str, text: &'source str) -> Result<(), Error> {
        if self.templates.contains_key(name) {
            return Err(Error::build(format!(
                "template with name `{name}` already exists in engine, \
                overwrite it with `.add_template_must`"
            )));
        }

        self.templates.insert(name.to_owned(), text);
        Ok(())
    }

    /// Store new template text with the given name.
    ///
    /// If a template with the given name already exists in the [`Engine`],
    /// it is overwritten.
    #[inline]
    pub fn add_template_must(&mut self, name: &str, text: &'source str) {
        self.templates.insert(name.to_owned(), text);
    }

    /// Return the raw text of the named template.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Engine;
    ///
    /// let mut engine = Engine::new();
    /// engine.add_template_must("invoice", r#"<field name="Total"/>"#);
    ///
    /// let template = engine.get_template("invoice");
    /// assert!(template.is_some());
    /// ```
    #[inline]
    pub fn get_template(&self, name: &str) -> Option<&'source str> {
        self.templates.get(name).copied()
    }
}

impl<'source> Default for Engine<'source> {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log::MISSING_TEMPLATE, store::Store};
    use serde_json::json;

    #[test]
    fn test_add() {
        let mut engine = Engine::new();
        engine.add_template_must("faux", "text");

        assert!(engine.get_template("faux").is_some());
        assert!(engine.get_template("ghost").is_none())
    }

    #[test]
    fn test_add_duplicate() {
        let mut engine = Engine::new();
        engine.add_template_must("faux", "text");

        assert!(engine.add_template("faux", "other").is_err());
    }

    #[test]
    fn test_add_overwrite() {
        let mut engine = Engine::new();
        engine.add_template_must("faux", "one");
        engine.add_template_must("faux", "two");

        assert_eq!(engine.get_template("faux"), Some("two"));
    }

    #[test]
    fn test_render() {
        let engine = Engine::new();
        let store = Store::new().with_must(
            "Costs",
            json!([{"Name": "tiles"}, {"Name": "paint"}]),
        );
        let source = r#"<region name="Costs"><field name="Name"/>;</region><item name="Costs"/>"#;

        assert_eq!(engine.render(source, &store).unwrap(), "tiles;paint;");
    }

    #[test]
    fn test_render_named() {
        let mut engine = Engine::new();
        engine.add_template_must("greeting", r#"hello, <field name="Name"/>!"#);
        let store = Store::new().with_must("Name", "taylor");

        assert_eq!(
            engine.render_named("greeting", &store).unwrap(),
            "hello, taylor!"
        );
    }

    #[test]
    fn test_render_named_missing() {
        let engine = Engine::new();
        let result = engine.render_named("ghost", &Store::new());

        let error = result.unwrap_err();
        assert_eq!(error, error_missing_template("ghost"));
        assert!(error.to_string().contains(MISSING_TEMPLATE));
    }
}
