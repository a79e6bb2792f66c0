/// Sass built-in module table.
///
/// The seven modules shipped with the Sass runtime.  They are always
/// offered as completion candidates, whether or not the document imports
/// them, and they never resolve to a file.
use crate::types::{BuiltinModule, NamespaceInfo};

/// The reserved prefix marking an import path as a built-in module.
pub const SASS_PREFIX: &str = "sass:";

/// Ordered, process-wide constant list of built-in modules.
pub const BUILTIN_MODULES: &[BuiltinModule] = &[
    BuiltinModule {
        name: "math",
        description: "Provides mathematical functions",
    },
    BuiltinModule {
        name: "color",
        description: "Provides color manipulation functions",
    },
    BuiltinModule {
        name: "string",
        description: "Provides string manipulation functions",
    },
    BuiltinModule {
        name: "list",
        description: "Provides list manipulation functions",
    },
    BuiltinModule {
        name: "map",
        description: "Provides map manipulation functions",
    },
    BuiltinModule {
        name: "selector",
        description: "Provides selector manipulation functions",
    },
    BuiltinModule {
        name: "meta",
        description: "Provides meta-programming functions",
    },
];

/// Look up a built-in module by its bare name (without `sass:`).
pub fn find_builtin<'t>(table: &'t [BuiltinModule], name: &str) -> Option<&'t BuiltinModule> {
    table.iter().find(|m| m.name == name)
}

/// If `import_path` is `sass:<name>` and `<name>` is in `table`, return
/// the matching module.
pub fn builtin_for_import<'t>(
    table: &'t [BuiltinModule],
    import_path: &str,
) -> Option<&'t BuiltinModule> {
    let name = import_path.strip_prefix(SASS_PREFIX)?;
    find_builtin(table, name)
}

/// Expose every module of `table` as a [`NamespaceInfo`], in table order.
pub fn builtin_namespaces(table: &[BuiltinModule]) -> Vec<NamespaceInfo> {
    table
        .iter()
        .map(|module| {
            let path = format!("{}{}", SASS_PREFIX, module.name);
            NamespaceInfo {
                namespace: module.name.to_string(),
                original_path: path.clone(),
                full_path: path,
                alias: None,
                is_builtin: true,
            }
        })
        .collect()
}
