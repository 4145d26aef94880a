#[cfg(test)]
mod tests {
    use crate::error::ERR_RESERVED_COMPONENT_ID;
    use crate::host::{ElementHeuristic, Html5Heuristic};
    use crate::options::CompileOptions;
    use crate::registry::{
        camelize, capitalize, hyphenate, ComponentDescriptor, ComponentLookup, ComponentRegistry,
    };
    use crate::tags::{classify_tag, TagCategory};

    #[test]
    fn test_classify_tag() {
        assert_eq!(classify_tag("div"), TagCategory::Native);
        assert_eq!(classify_tag("DIV"), TagCategory::Native);
        assert_eq!(classify_tag("h6"), TagCategory::Native);
        assert_eq!(classify_tag("Slot"), TagCategory::Reserved);
        assert_eq!(classify_tag("partial"), TagCategory::Reserved);
        assert_eq!(classify_tag("button"), TagCategory::Custom);
        assert_eq!(classify_tag("divx"), TagCategory::Custom);
        assert_eq!(classify_tag("my-div"), TagCategory::Custom);
    }

    #[test]
    fn test_html5_heuristic() {
        let host = Html5Heuristic;
        assert!(host.is_unknown_element("my-widget"));
        assert!(host.is_unknown_element("foo"));
        assert!(!host.is_unknown_element("button"));
        assert!(!host.is_unknown_element("lineargradient"));
        assert!(!host.is_unknown_element("dialog"));
        assert!(!host.is_unknown_element("Summary"));
    }

    #[test]
    fn test_name_casing_helpers() {
        assert_eq!(camelize("my-widget"), "myWidget");
        assert_eq!(camelize("a-b-c"), "aBC");
        assert_eq!(capitalize("myWidget"), "MyWidget");
        assert_eq!(capitalize(""), "");
        assert_eq!(hyphenate("MyWidget"), "my-widget");
        assert_eq!(hyphenate("myABWidget"), "my-a-b-widget");
        assert_eq!(hyphenate("my-widget"), "my-widget");
    }

    #[test]
    fn test_register_rejects_reserved_ids() {
        let mut registry = ComponentRegistry::new();
        for id in ["div", "Table", "slot", "component"] {
            let err = registry
                .register(id, ComponentDescriptor::default())
                .unwrap_err();
            assert_eq!(err.code, ERR_RESERVED_COMPONENT_ID);
            assert!(err.message.contains(id));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_fallbacks() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("UserCard", ComponentDescriptor::new("UserCard", "UserCard.vue"))
            .unwrap();

        assert!(registry.lookup("UserCard").is_some());
        assert!(registry.lookup("user-card").is_some());
        assert!(registry.lookup("userCard").is_some());
        assert!(registry.lookup("usercard").is_none());
        assert_eq!(registry.lookup("user-card").unwrap().path, "UserCard.vue");
    }

    #[test]
    fn test_component_name_map() {
        let mut registry = ComponentRegistry::new();
        registry.register("UserCard", ComponentDescriptor::default()).unwrap();
        registry.register("nav-bar", ComponentDescriptor::default()).unwrap();

        let map = registry.component_name_map();
        assert_eq!(map.get("usercard").map(String::as_str), Some("user-card"));
        assert_eq!(map.get("navbar").map(String::as_str), Some("nav-bar"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_options_from_json() {
        let options = CompileOptions::from_json(
            r#"{
                "components": {
                    "MyWidget": { "path": "MyWidget.vue" },
                    "div": {}
                },
                "diagnostics": true
            }"#,
        )
        .unwrap();

        // Reserved ids are dropped on load
        assert_eq!(options.components.len(), 1);
        assert!(options.components.contains("my-widget"));
        assert_eq!(
            options
                .component_name_map
                .as_ref()
                .and_then(|m| m.get("mywidget"))
                .map(String::as_str),
            Some("my-widget")
        );
        assert_eq!(options.bind_prefixes, vec![":", "v-bind:"]);
    }

    #[test]
    fn test_options_from_json_invalid() {
        let err = CompileOptions::from_json(r#"{ "components": 3 }"#).unwrap_err();
        assert_eq!(err.code, "INVALID_OPTIONS");
    }

    #[test]
    fn test_options_custom_bind_prefixes() {
        let options =
            CompileOptions::from_json(r#"{ "bindPrefixes": ["bind-"], "diagnostics": false }"#)
                .unwrap();
        assert_eq!(options.bind_prefixes, vec!["bind-"]);
        assert!(options.component_name_map.is_none());
    }
}
