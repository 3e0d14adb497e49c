/// A data source that templates are rendered against.
///
/// A delegate resolves field markers to scalar strings and item markers to
/// an ordered list of child delegates, one per repetition of the named
/// region. The `index` argument is the 0-based position of the receiver
/// within the item list that produced it, and 0 at the top level.
///
/// Unrecognized names are delegate policy, not engine errors. A delegate
/// should degrade gracefully, for example by echoing the name back.
///
/// # Examples
///
/// A leaf record resolving its own fields, and a composite exposing a
/// repeating list of them:
///
/// ```
/// use folio::{Currency, Delegate};
///
/// struct Cost {
///     title: String,
///     amount: f64,
/// }
///
/// impl Delegate for Cost {
///     fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
///         match parameter {
///             "Name" => self.title.clone(),
///             "Amount" => Currency::new("€").format(self.amount),
///             _ => parameter.to_string(),
///         }
///     }
/// }
///
/// struct Report {
///     costs: Vec<Cost>,
/// }
///
/// impl Delegate for Report {
///     fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
///         parameter.to_string()
///     }
///
///     fn items_for_parameter(&self, _parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
///         self.costs.iter().map(|cost| Box::new(cost) as _).collect()
///     }
/// }
/// ```
pub trait Delegate {
    /// Return the scalar value for the named field at the given repetition
    /// index.
    fn value_for_parameter(&self, parameter: &str, index: usize) -> String;

    /// Return the ordered child delegates for the named item at the given
    /// repetition index.
    ///
    /// Leaf delegates keep the default implementation, which reports no
    /// children for any name.
    fn items_for_parameter(&self, parameter: &str, index: usize) -> Vec<Box<dyn Delegate + '_>> {
        let _ = (parameter, index);
        Vec::new()
    }
}

impl<T: Delegate + ?Sized> Delegate for &T {
    fn value_for_parameter(&self, parameter: &str, index: usize) -> String {
        (**self).value_for_parameter(parameter, index)
    }

    fn items_for_parameter(&self, parameter: &str, index: usize) -> Vec<Box<dyn Delegate + '_>> {
        (**self).items_for_parameter(parameter, index)
    }
}

impl<T: Delegate + ?Sized> Delegate for Box<T> {
    fn value_for_parameter(&self, parameter: &str, index: usize) -> String {
        (**self).value_for_parameter(parameter, index)
    }

    fn items_for_parameter(&self, parameter: &str, index: usize) -> Vec<Box<dyn Delegate + '_>> {
        (**self).items_for_parameter(parameter, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl Delegate for Leaf {
        fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
            parameter.to_string()
        }
    }

    #[test]
    fn test_leaf_has_no_items() {
        assert!(Leaf.items_for_parameter("anything", 0).is_empty());
    }

    #[test]
    fn test_dispatch_through_reference() {
        let leaf = Leaf;
        let by_ref: &dyn Delegate = &&leaf;

        assert_eq!(by_ref.value_for_parameter("echo", 3), "echo");
    }
}
