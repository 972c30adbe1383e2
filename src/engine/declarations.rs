//! Declaration extraction.
//!
//! Walks the AST looking for `StyleSheet.create({...})` calls (the holder
//! object name is configurable) and turns every direct, identifier-keyed
//! property of the argument literal into a [`StyleDeclaration`].

use swc_common::{SourceMap, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, MemberProp, ObjectLit, Pat, Prop, PropName, PropOrSpread, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::data::StyleDeclaration;
use super::parser::byte_range;

/// Method name of the conventional style-creation call.
pub const CREATE_METHOD: &str = "create";

/// Collects style declarations (and the variables they are bound to)
/// from every declaration block in a file, in document order.
pub struct DeclarationCollector<'a> {
    source_map: &'a SourceMap,
    create_object: &'a str,

    /// Declared styles across all blocks, document order.
    pub declarations: Vec<StyleDeclaration>,
    /// Variable names bound directly to a `create` call result.
    pub holders: Vec<String>,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(source_map: &'a SourceMap, create_object: &'a str) -> Self {
        Self {
            source_map,
            create_object,
            declarations: Vec::new(),
            holders: Vec::new(),
        }
    }

    fn collect_block(&mut self, object: &ObjectLit) {
        let mut block: Vec<StyleDeclaration> = Vec::new();

        for prop in &object.props {
            let PropOrSpread::Prop(prop) = prop else {
                continue;
            };
            let Prop::KeyValue(kv) = &**prop else {
                continue;
            };
            // Only identifier-keyed, non-computed properties count as
            // declarations; string keys, numeric keys and spreads do not.
            let PropName::Ident(key) = &kv.key else {
                continue;
            };

            let lo = key.span.lo;
            let hi = kv.value.span().hi;
            let start = self.source_map.lookup_char_pos(lo);
            let end = self.source_map.lookup_char_pos(hi);
            let source_line = start
                .file
                .get_line(start.line - 1)
                .map(|cow| cow.to_string())
                .unwrap_or_default();
            let (byte_start, _) = byte_range(self.source_map, key.span);
            let (_, byte_end) = byte_range(self.source_map, kv.value.span());

            let declaration = StyleDeclaration {
                name: key.sym.to_string(),
                start_line: start.line,
                end_line: end.line,
                col: start.col_display + 1,
                source_line,
                byte_start,
                byte_end,
            };

            // Duplicate keys within one block: last write wins.
            if let Some(pos) = block.iter().position(|d| d.name == declaration.name) {
                block.remove(pos);
            }
            block.push(declaration);
        }

        self.declarations.extend(block);
    }
}

impl Visit for DeclarationCollector<'_> {
    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(init) = &node.init
            && is_create_call(init, self.create_object)
            && let Pat::Ident(binding) = &node.name
        {
            self.holders.push(binding.id.sym.to_string());
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(object) = create_call_argument(node, self.create_object) {
            self.collect_block(object);
        }
        node.visit_children_with(self);
    }
}

/// Match `X.create({...})` where `X` is the configured holder object,
/// returning the single object-literal argument.
pub(crate) fn create_call_argument<'b>(
    call: &'b CallExpr,
    create_object: &str,
) -> Option<&'b ObjectLit> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Member(member) = &**callee else {
        return None;
    };
    let Expr::Ident(obj) = &*member.obj else {
        return None;
    };
    let MemberProp::Ident(method) = &member.prop else {
        return None;
    };
    if obj.sym.as_str() != create_object || method.sym.as_str() != CREATE_METHOD {
        return None;
    }
    if call.args.len() != 1 || call.args[0].spread.is_some() {
        return None;
    }
    match &*call.args[0].expr {
        Expr::Object(object) => Some(object),
        _ => None,
    }
}

/// True when the expression is a `create` call on the configured holder.
pub(crate) fn is_create_call(expr: &Expr, create_object: &str) -> bool {
    matches!(expr, Expr::Call(call) if create_call_argument(call, create_object).is_some())
}
