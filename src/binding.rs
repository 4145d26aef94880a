use crate::ir::ElementNode;

/// Value of the bound form of `name` (`:name`, `v-bind:name`, ...), trying
/// `prefixes` in order. Read-only: the element is left untouched.
pub fn get_bind_attr<'a, S: AsRef<str>>(
    element: &'a ElementNode,
    name: &str,
    prefixes: &[S],
) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| {
        let bound = format!("{}{}", prefix.as_ref(), name);
        element.get_attribute(&bound)
    })
}
