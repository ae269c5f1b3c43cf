use std::collections::{BTreeMap, BTreeSet};

use sqlgen_naming::{qualify, split_qualified};

use crate::error::{DuplicateClassError, ExtractError};
use crate::model::ClassModel;

/// All loaded classes, keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassModel>,
}

impl ClassRegistry {
    pub fn from_classes(
        classes: impl IntoIterator<Item = ClassModel>,
    ) -> Result<Self, DuplicateClassError> {
        let mut map = BTreeMap::new();
        for class in classes {
            let key = class.qualified_name();
            if map.contains_key(&key) {
                return Err(DuplicateClassError(key));
            }
            map.insert(key, class);
        }
        Ok(Self { classes: map })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes in qualified-name order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    pub fn get(&self, qualified: &str) -> Option<&ClassModel> {
        self.classes.get(qualified)
    }

    /// Resolve a type reference written inside `from_package`.
    ///
    /// Qualified names match exactly. Simple names try the same package
    /// first, then any class with that simple name when it is unique.
    pub fn resolve(&self, name: &str, from_package: &str) -> Option<&ClassModel> {
        if let Some(class) = self.get(name) {
            return Some(class);
        }
        if name.contains('.') {
            return None;
        }
        if let Some(class) = self.get(&qualify(from_package, name)) {
            return Some(class);
        }
        let mut matches = self.classes.values().filter(|c| c.name == name);
        match (matches.next(), matches.next()) {
            (Some(class), None) => Some(class),
            _ => None,
        }
    }

    /// Look up a class requested by the user, by qualified or simple name.
    pub fn find_class(&self, name: &str) -> Result<&ClassModel, ExtractError> {
        if let Some(class) = self.get(name) {
            return Ok(class);
        }
        let matches: Vec<&ClassModel> = self.classes.values().filter(|c| c.name == name).collect();
        match matches.as_slice() {
            [] => Err(ExtractError::ClassNotFound(name.to_string())),
            [class] => Ok(*class),
            many => Err(ExtractError::AmbiguousClass {
                name: name.to_string(),
                candidates: many
                    .iter()
                    .map(|c| c.qualified_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Ancestors of `class`, root ancestor first, excluding `class` itself.
    ///
    /// A qualified superclass outside the model set is a library class and
    /// ends the chain.
    pub fn superclass_chain<'a>(
        &'a self,
        class: &'a ClassModel,
    ) -> Result<Vec<&'a ClassModel>, ExtractError> {
        let mut chain: Vec<&ClassModel> = Vec::new();
        let mut seen = BTreeSet::from([class.qualified_name()]);
        let mut current = class;

        while let Some(parent_name) = current.superclass.as_deref() {
            let Some(parent) = self.resolve(parent_name, current.package()) else {
                if parent_name.contains('.') {
                    break;
                }
                return Err(ExtractError::UnresolvableSuperclass {
                    class: current.qualified_name(),
                    superclass: parent_name.to_string(),
                });
            };
            if !seen.insert(parent.qualified_name()) {
                return Err(ExtractError::SuperclassCycle(class.qualified_name()));
            }
            chain.push(parent);
            current = parent;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Classes declared directly in `package`, sorted by name.
    pub fn classes_in<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a ClassModel> {
        self.classes.values().filter(move |c| c.package() == package)
    }

    /// Every package that holds classes, plus all of their ancestors.
    pub fn packages(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for class in self.classes.values() {
            let mut package = class.package();
            while !package.is_empty() {
                out.insert(package.to_string());
                package = split_qualified(package).0;
            }
        }
        out
    }

    /// Direct sub-packages of `package`, sorted.
    pub fn subpackages(&self, package: &str) -> Vec<String> {
        self.packages()
            .into_iter()
            .filter(|p| split_qualified(p).0 == package)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(package: &str, name: &str) -> ClassModel {
        let mut c = ClassModel::new(name);
        if !package.is_empty() {
            c.package = Some(package.to_string());
        }
        c
    }

    fn registry() -> ClassRegistry {
        ClassRegistry::from_classes([
            class("com.acme", "Base"),
            class("com.acme.model", "User"),
            class("com.acme.model", "Role"),
            class("com.acme.admin", "Role"),
            class("com.acme.model.sub", "Audit"),
            class("", "Root"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let err = ClassRegistry::from_classes([class("a", "B"), class("a", "B")]).unwrap_err();
        assert_eq!(err, DuplicateClassError("a.B".into()));
    }

    #[test]
    fn test_resolve_qualified_and_same_package() {
        let reg = registry();
        assert_eq!(
            reg.resolve("com.acme.admin.Role", "x").unwrap().qualified_name(),
            "com.acme.admin.Role"
        );
        assert_eq!(
            reg.resolve("Role", "com.acme.model").unwrap().qualified_name(),
            "com.acme.model.Role"
        );
        assert!(reg.resolve("com.acme.model.Missing", "com.acme.model").is_none());
    }

    #[test]
    fn test_resolve_unique_simple_name_across_packages() {
        let reg = registry();
        assert_eq!(
            reg.resolve("Audit", "com.acme").unwrap().qualified_name(),
            "com.acme.model.sub.Audit"
        );
        // Two candidates and none in the current package.
        assert!(reg.resolve("Role", "com.acme").is_none());
    }

    #[test]
    fn test_find_class() {
        let reg = registry();
        assert_eq!(reg.find_class("User").unwrap().qualified_name(), "com.acme.model.User");
        assert!(matches!(
            reg.find_class("Nope"),
            Err(ExtractError::ClassNotFound(name)) if name == "Nope"
        ));
        match reg.find_class("Role") {
            Err(ExtractError::AmbiguousClass { candidates, .. }) => {
                assert_eq!(candidates, "com.acme.admin.Role, com.acme.model.Role");
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_superclass_chain_root_first() {
        let mut base = class("com.acme", "Base");
        base.superclass = Some("com.acme.Root0".into());
        let root = class("com.acme", "Root0");
        let mut mid = class("com.acme.model", "Mid");
        mid.superclass = Some("com.acme.Base".into());
        let mut leaf = class("com.acme.model", "Leaf");
        leaf.superclass = Some("Mid".into());

        let reg = ClassRegistry::from_classes([base, root, mid, leaf.clone()]).unwrap();
        let chain: Vec<String> = reg
            .superclass_chain(&leaf)
            .unwrap()
            .iter()
            .map(|c| c.qualified_name())
            .collect();
        assert_eq!(chain, vec!["com.acme.Root0", "com.acme.Base", "com.acme.model.Mid"]);
    }

    #[test]
    fn test_superclass_chain_errors() {
        let mut orphan = class("p", "Orphan");
        orphan.superclass = Some("Ghost".into());
        let mut a = class("p", "A");
        a.superclass = Some("B".into());
        let mut b = class("p", "B");
        b.superclass = Some("A".into());

        let reg = ClassRegistry::from_classes([orphan.clone(), a.clone(), b]).unwrap();
        assert_eq!(
            reg.superclass_chain(&orphan).unwrap_err(),
            ExtractError::UnresolvableSuperclass {
                class: "p.Orphan".into(),
                superclass: "Ghost".into(),
            }
        );
        assert_eq!(
            reg.superclass_chain(&a).unwrap_err(),
            ExtractError::SuperclassCycle("p.A".into())
        );
    }

    #[test]
    fn test_superclass_chain_stops_at_library_class() {
        let mut base = class("app", "BaseEntity");
        base.superclass = Some("com.framework.AbstractEntity".into());
        let mut user = class("app", "User");
        user.superclass = Some("BaseEntity".into());
        let mut direct = class("app", "Direct");
        direct.superclass = Some("com.framework.AbstractEntity".into());

        let reg = ClassRegistry::from_classes([base, user.clone(), direct.clone()]).unwrap();
        let chain: Vec<String> = reg
            .superclass_chain(&user)
            .unwrap()
            .iter()
            .map(|c| c.qualified_name())
            .collect();
        assert_eq!(chain, vec!["app.BaseEntity"]);
        assert!(reg.superclass_chain(&direct).unwrap().is_empty());
    }

    #[test]
    fn test_packages_and_subpackages() {
        let reg = registry();
        assert_eq!(reg.subpackages(""), vec!["com"]);
        assert_eq!(reg.subpackages("com"), vec!["com.acme"]);
        assert_eq!(
            reg.subpackages("com.acme"),
            vec!["com.acme.admin", "com.acme.model"]
        );
        assert_eq!(reg.subpackages("com.acme.model"), vec!["com.acme.model.sub"]);
        assert!(reg.subpackages("com.acme.model.sub").is_empty());

        let names: Vec<&str> = reg.classes_in("com.acme.model").map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Role", "User"]);
        let root: Vec<&str> = reg.classes_in("").map(|c| c.name.as_str()).collect();
        assert_eq!(root, vec!["Root"]);
    }
}
