//! Method declarations that implement an interface.

use tracing::{debug, debug_span};

use implgen_core::{Interface, Signature};
use implgen_syntax::{Code, Func};

use crate::Result;
use crate::render::{render_params, render_results};

/// Receiver of the generated methods, e.g. `(s *Stub)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receiver {
    /// Binding name; empty for an anonymous receiver.
    pub binding: String,
    pub type_name: String,
    pub pointer: bool,
}

impl Receiver {
    pub fn new(binding: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            type_name: type_name.into(),
            pointer: false,
        }
    }

    /// Set whether methods take a pointer receiver.
    pub fn pointer(mut self, value: bool) -> Self {
        self.pointer = value;
        self
    }

    fn to_code(&self) -> Code {
        let mut ty = Code::id(self.type_name.as_str());
        if self.pointer {
            ty = ty.pointer();
        }
        if self.binding.is_empty() {
            Code::params([ty])
        } else {
            Code::params([Code::field(self.binding.as_str(), ty)])
        }
    }
}

/// One declaration per method of `interface`, in declaration order.
///
/// `body_fn` receives the method name and signature and returns the body,
/// used as is. It runs once per method, after the method's parameters and
/// results rendered successfully. Embedded interfaces are skipped.
pub fn synthesize_methods(
    receiver: &Receiver,
    interface: &Interface,
    mut body_fn: impl FnMut(&str, &Signature) -> Code,
) -> Result<Vec<Code>> {
    let _span = debug_span!("synthesize", receiver = %receiver.type_name).entered();

    let mut decls = Vec::with_capacity(interface.len());
    for method in &interface.methods {
        let Some(sig) = method.signature() else {
            debug!(method = %method.name, "skipping embedded interface");
            continue;
        };
        let params = render_params(sig)?;
        let results = render_results(&sig.results)?;
        let body = body_fn(method.name.as_str(), sig);
        decls.push(declare(receiver, &method.name, params, results, body));
    }

    debug!(count = decls.len(), "synthesized methods");
    Ok(decls)
}

/// Declaration of a single method with the given body.
pub fn generate_method(
    receiver: &Receiver,
    name: &str,
    sig: &Signature,
    body: Code,
) -> Result<Code> {
    let params = render_params(sig)?;
    let results = render_results(&sig.results)?;
    Ok(declare(receiver, name, params, results, body))
}

fn declare(receiver: &Receiver, name: &str, params: Code, results: Code, body: Code) -> Code {
    Func::new(name)
        .receiver(receiver.to_code())
        .params(params)
        .results(results)
        .body(body)
        .into()
}
