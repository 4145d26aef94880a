#[cfg(test)]
mod tests {
    use crate::discovery::{discover_components, DiscoveryOptions};
    use crate::registry::ComponentLookup;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, contents: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_discovers_nested_components() {
        let dir = TempDir::new().unwrap();
        write(&dir, "UserCard.vue", "<template><div></div></template>");
        write(&dir, "widgets/nav-bar.vue", "<template><nav></nav></template>");
        write(&dir, "widgets/readme.md", "# not a component");

        let registry = discover_components(dir.path(), &DiscoveryOptions::default()).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("user-card").is_some());
        assert!(registry.lookup("nav-bar").is_some());
        assert!(registry
            .lookup("nav-bar")
            .unwrap()
            .path
            .ends_with("nav-bar.vue"));
    }

    #[test]
    fn test_registers_declared_name() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "TreeNode.vue",
            r#"<template><li><tree-item></tree-item></li></template>
<script>
export default {
  name: 'tree-item',
  props: ['model']
}
</script>"#,
        );

        let registry = discover_components(dir.path(), &DiscoveryOptions::default()).unwrap();
        assert!(registry.lookup("tree-node").is_some());
        assert!(registry.lookup("tree-item").is_some());
        assert_eq!(registry.lookup("tree-item").unwrap().name, "tree-item");
    }

    #[test]
    fn test_skips_reserved_file_names() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Table.vue", "<template><table></table></template>");
        write(&dir, "DataTable.vue", "<template><table></table></template>");

        let registry = discover_components(dir.path(), &DiscoveryOptions::default()).unwrap();
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["DataTable"]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a-card.html", "<div></div>");
        write(&dir, "b-card.vue", "<div></div>");

        let options = DiscoveryOptions {
            extensions: vec!["html".to_string()],
        };
        let registry = discover_components(dir.path(), &options).unwrap();
        assert!(registry.contains("a-card"));
        assert!(!registry.contains("b-card"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = discover_components(
            &dir.path().join("does-not-exist"),
            &DiscoveryOptions::default(),
        )
        .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_file_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Only.vue", "<div></div>");
        let err = discover_components(&dir.path().join("Only.vue"), &DiscoveryOptions::default())
            .unwrap_err();
        assert_eq!(err.code, "DISCOVERY_ERROR");
    }
}
