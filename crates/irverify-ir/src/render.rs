//! One-line textual dumps of IR declarations.
//!
//! Used in diagnostics so that a fault names the offending declaration in a
//! form a human can grep for:
//!
//! ```text
//! CLASS CLASS name:Base visibility:public
//! FUN FAKE_OVERRIDE name:foo visibility:public <T> (x:T) returnType:kotlin.Int
//! PROPERTY name:size visibility:internal type:kotlin.Int var
//! ```

use std::fmt::Write;

use crate::declarations::{IrDeclarationKind, IrValueParameter};
use crate::ids::DeclId;
use crate::module::{IrModule, TypeParameterScope};
use crate::types::{IrClassifier, IrType, IrTypeArgument, IrTypeParameter};

impl IrModule {
    /// Render a declaration as a one-line dump.
    pub fn render(&self, id: DeclId) -> String {
        let Some(decl) = self.declaration(id) else {
            return format!("<unbound {}>", id);
        };
        let scope = self.type_parameter_scope(id);
        let mut out = String::new();
        match &decl.kind {
            IrDeclarationKind::Class(c) => {
                let _ = write!(out, "CLASS {} name:{} ", c.kind, c.name);
                let _ = write!(out, "visibility:{}", c.visibility);
            }
            IrDeclarationKind::Function(f) => {
                out.push_str("FUN ");
                if let Some(marker) = f.origin.marker() {
                    out.push_str(marker);
                    out.push(' ');
                }
                let _ = write!(out, "name:{} visibility:{} ", f.name, f.visibility);
                if !f.type_parameters.is_empty() {
                    render_type_parameters(&mut out, &f.type_parameters);
                    out.push(' ');
                }
                let receiver = f.extension_receiver.as_ref();
                render_value_parameters(&mut out, receiver, &f.value_parameters, scope);
                out.push_str(" returnType:");
                render_type(&mut out, &f.return_type, scope);
            }
            IrDeclarationKind::Constructor(c) => {
                let _ = write!(out, "CONSTRUCTOR visibility:{} ", c.visibility);
                render_value_parameters(&mut out, None, &c.value_parameters, scope);
            }
            IrDeclarationKind::Property(p) => {
                out.push_str("PROPERTY ");
                if let Some(marker) = p.origin.marker() {
                    out.push_str(marker);
                    out.push(' ');
                }
                let _ = write!(out, "name:{} visibility:{} type:", p.name, p.visibility);
                render_type(&mut out, &p.ty, scope);
                out.push_str(if p.is_var { " var" } else { " val" });
            }
            IrDeclarationKind::AnonymousInitializer(_) => out.push_str("ANONYMOUS_INITIALIZER"),
        }
        out
    }

    /// Render a type as seen from declaration `context`.
    pub fn render_type(&self, ty: &IrType, context: DeclId) -> String {
        let mut out = String::new();
        render_type(&mut out, ty, self.type_parameter_scope(context));
        out
    }
}

fn render_type_parameters(out: &mut String, parameters: &[IrTypeParameter]) {
    out.push('<');
    for (i, param) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.name);
    }
    out.push('>');
}

fn render_value_parameters(
    out: &mut String,
    receiver: Option<&IrType>,
    parameters: &[IrValueParameter],
    scope: TypeParameterScope<'_>,
) {
    out.push('(');
    let mut first = true;
    if let Some(receiver) = receiver {
        out.push_str("$receiver:");
        render_type(out, receiver, scope);
        first = false;
    }
    for param in parameters {
        if !first {
            out.push_str(", ");
        }
        first = false;
        let _ = write!(out, "{}:", param.name);
        render_type(out, &param.ty, scope);
    }
    out.push(')');
}

fn render_type(out: &mut String, ty: &IrType, scope: TypeParameterScope<'_>) {
    match &ty.classifier {
        IrClassifier::Class(id) => {
            let _ = write!(out, "{}", id);
        }
        IrClassifier::TypeParameter(index) => match scope.resolve(*index) {
            Some(param) => out.push_str(&param.name),
            None => {
                let _ = write!(out, "<unresolved #{}>", index);
            }
        },
    }
    if !ty.arguments.is_empty() {
        out.push('<');
        for (i, arg) in ty.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match arg {
                IrTypeArgument::Star => out.push('*'),
                IrTypeArgument::Type(arg) => render_type(out, arg, scope),
            }
        }
        out.push('>');
    }
    if ty.nullable {
        out.push('?');
    }
}
