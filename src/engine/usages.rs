//! Usage collection.
//!
//! Figures out which style names a file actually references. Works in three
//! passes over the AST: find the variables bound to `StyleSheet.create`
//! results, resolve one level of plain aliasing (`const s = styles;`), then
//! record every member access on any of those handles.

use std::collections::HashSet;

use swc_ecma_ast::{Expr, Lit, MemberExpr, MemberProp, Module, Pat, VarDeclarator};
use swc_ecma_visit::{Visit, VisitWith};

use super::declarations::is_create_call;

/// Collect the referenced style names of a module, deduplicated, in
/// first-discovery order.
pub fn collect_used_names(module: &Module, create_object: &str) -> Vec<String> {
    let mut holders = HolderCollector {
        create_object,
        holders: HashSet::new(),
    };
    module.visit_with(&mut holders);

    let mut aliases = AliasCollector {
        canonical: &holders.holders,
        aliases: HashSet::new(),
    };
    module.visit_with(&mut aliases);
    let AliasCollector { aliases, .. } = aliases;

    let mut handles = holders.holders;
    handles.extend(aliases);

    let mut usages = UsageCollector {
        handles: &handles,
        seen: HashSet::new(),
        used: Vec::new(),
    };
    module.visit_with(&mut usages);
    usages.used
}

/// Pass 1: variables whose initializer is a `create` call.
struct HolderCollector<'a> {
    create_object: &'a str,
    holders: HashSet<String>,
}

impl Visit for HolderCollector<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(init) = &node.init
            && is_create_call(init, self.create_object)
            && let Pat::Ident(binding) = &node.name
        {
            self.holders.insert(binding.id.sym.to_string());
        }
        node.visit_children_with(self);
    }
}

/// Pass 2: variables whose initializer is exactly a canonical identifier.
/// Aliasing is resolved one level deep only; aliases of aliases do not count.
struct AliasCollector<'a> {
    canonical: &'a HashSet<String>,
    aliases: HashSet<String>,
}

impl Visit for AliasCollector<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(init) = &node.init
            && let Expr::Ident(source) = &**init
            && self.canonical.contains(source.sym.as_str())
            && let Pat::Ident(binding) = &node.name
        {
            self.aliases.insert(binding.id.sym.to_string());
        }
        node.visit_children_with(self);
    }
}

/// Pass 3: member accesses on any collected handle.
///
/// Spread arguments like `{...styles.row}` need no special handling; the
/// inner member expression is reached by normal traversal.
struct UsageCollector<'a> {
    handles: &'a HashSet<String>,
    seen: HashSet<String>,
    used: Vec<String>,
}

impl UsageCollector<'_> {
    fn record(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.used.push(name.to_string());
        }
    }
}

impl Visit for UsageCollector<'_> {
    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if let Expr::Ident(obj) = &*node.obj
            && self.handles.contains(obj.sym.as_str())
        {
            match &node.prop {
                MemberProp::Ident(prop) => self.record(prop.sym.as_str()),
                MemberProp::Computed(computed) => {
                    // Only literal string subscripts are resolvable
                    // statically; `styles[variable]` stays unknown.
                    if let Expr::Lit(Lit::Str(s)) = &*computed.expr
                        && let Some(name) = s.value.as_str()
                    {
                        self.record(name);
                    }
                }
                MemberProp::PrivateName(_) => {}
            }
        }
        node.visit_children_with(self);
    }
}
