//! Generated units and the Go text they are made of.
//!
//! A [`UnitId`] names one generated file: a (LayerKind, owner) pair. All the
//! text fragments the engine writes into that file are rendered here, so the
//! services only decide *where* a fragment goes, never what it says.

use std::fmt;

use crate::domain::{
    locator, naming,
    splice::method_token,
    value_objects::{Identifier, LayerKind},
};

/// Identity of one generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId {
    pub kind: LayerKind,
    pub owner: Identifier,
}

impl UnitId {
    pub fn new(kind: LayerKind, owner: Identifier) -> Self {
        Self { kind, owner }
    }

    /// Exported interface name, e.g. `OrderHandler`.
    pub fn interface_name(&self) -> String {
        self.owner.exported()
    }

    /// Unexported implementing struct name, e.g. `orderHandler`.
    pub fn record_name(&self) -> String {
        self.owner.unexported()
    }

    /// Method receiver, the first letter of the struct name.
    pub fn receiver(&self) -> String {
        naming::first_char(&self.record_name())
    }

    /// File name of the unit inside its layer directory.
    pub fn file_name(&self) -> String {
        format!("{}.go", self.owner.unexported())
    }

    /// File name of the companion test unit inside `<layer>/test/`.
    pub fn test_file_name(&self) -> String {
        format!("{}_test.go", self.owner.unexported())
    }

    // ── bootstrap ────────────────────────────────────────────────────────

    /// Package clause plus, for method-bearing kinds, the fixed import set.
    pub fn header(&self, import_prefix: &str) -> String {
        let package = self.kind.package();
        let mut text = format!("// Package {package} provides ...\npackage {package}");

        let imports = self.kind.imports();
        if !imports.is_empty() {
            text.push_str("\n\nimport (\n");
            for dep in imports {
                text.push_str(&format!("\t\"{import_prefix}{}\"\n", dep.import_path()));
            }
            text.push(')');
        }
        text
    }

    /// Empty interface plus empty implementing struct.
    pub fn declaration_block(&self) -> String {
        let iface = self.interface_name();
        let record = self.record_name();
        format!(
            "\n\n// {iface} is a Clean Architecture {role} object that wraps its related methods.\n\
             // TODO: Add description of what the interface does\n\
             {opener}\t// TODO define interface methods\n}}\n\n\
             // {record} is an implementation of {iface}.\n\
             {record_opener}\t// TODO define struct fields and implement the interface\n}}",
            role = self.kind.role(),
            opener = locator::interface_opener(&iface),
            record_opener = locator::record_opener(&record),
        )
    }

    /// Content of the companion test unit.
    pub fn test_unit() -> &'static str {
        "// Package test provides ...\npackage test\n\n// TODO: Add tests"
    }

    // ── use-case extension ───────────────────────────────────────────────

    /// Fragments that attach `use_case` to a method-bearing unit.
    ///
    /// Returns `None` for data-only kinds.
    pub fn extension(&self, use_case: &Identifier) -> Option<MethodExtension> {
        let uc = use_case.exported();
        let methods: Vec<Method> = match self.kind {
            LayerKind::BoundaryIn => vec![Method {
                name: uc.clone(),
                params: String::new(),
                returns: None,
                doc: "converts the usecase input from its implementation specific format \
                      to a RequestModel, which it then calls the Interactor with.",
            }],
            LayerKind::BoundaryOut => vec![
                Method {
                    name: format!("Present{uc}"),
                    params: format!("rsm *respmodel.{uc}"),
                    returns: None,
                    doc: "converts the usecase output, a ResponseModel, to a ViewModel, \
                          which it then calls the View with.",
                },
                Method {
                    name: format!("Present{uc}ErrVal"),
                    params: format!("rsm *respmodel.{uc}ErrVal"),
                    returns: None,
                    doc: "converts the validation failure ResponseModel to a ViewModel.",
                },
            ],
            LayerKind::Renderer => vec![
                Method {
                    name: format!("Render{uc}"),
                    params: format!("vm *viewmodel.{uc}"),
                    returns: None,
                    doc: "renders the View exclusively from the ViewModel.",
                },
                Method {
                    name: format!("Render{uc}ErrVal"),
                    params: format!("vm *viewmodel.{uc}ErrVal"),
                    returns: None,
                    doc: "renders the validation failure View from the ViewModel.",
                },
            ],
            LayerKind::BusinessLogic => vec![Method {
                name: uc.clone(),
                params: format!("rqm *reqmodel.{uc}"),
                returns: None,
                doc: "orchestrates the usecase: validates the RequestModel, calls gateways \
                      and hands a ResponseModel to the Presenter.",
            }],
            LayerKind::Validator => vec![Method {
                name: format!("Validate{uc}"),
                params: format!("rqm *reqmodel.{uc}"),
                returns: Some(format!("*respmodel.{uc}ErrVal")),
                doc: "validates rqm. It returns nil when valid, otherwise an ErrVal.",
            }],
            LayerKind::RequestModel | LayerKind::ResponseModel | LayerKind::ViewModel => {
                return None;
            }
        };

        let token = method_token(&methods[0].name);
        let signatures = methods.iter().map(Method::signature).collect();
        let bodies = methods
            .iter()
            .map(|m| m.stub(&self.interface_name(), &self.receiver(), &self.record_name()))
            .collect();

        Some(MethodExtension {
            token,
            signatures,
            bodies,
        })
    }

    /// Guard token for a data-only unit: the model struct opener up to its
    /// brace, so any line ending after it still matches.
    pub fn model_token(use_case: &Identifier) -> String {
        format!("type {} struct {{", use_case.exported())
    }

    /// Model struct declarations for `use_case`.
    ///
    /// Response and view models get a paired `ErrVal` struct.
    pub fn model_records(&self, use_case: &Identifier) -> String {
        let uc = use_case.exported();
        let mut text = format!(
            "\n// TODO: Add a description.\n// {uc} is the {role} of the {uc} usecase.\n\
             {opener}\t// TODO: Add struct members\n}}",
            role = self.kind.role(),
            opener = locator::record_opener(&uc),
        );
        if matches!(self.kind, LayerKind::ResponseModel | LayerKind::ViewModel) {
            text.push_str(&format!(
                "\n\n// TODO: Add a description\n{opener}\t// TODO: Add struct members\n}}",
                opener = locator::record_opener(&format!("{uc}ErrVal")),
            ));
        }
        text
    }

    /// Package clause opening a fresh data-only unit.
    pub fn model_header(&self) -> String {
        let package = self.kind.package();
        format!("// Package {package} provides ...\npackage {package}\n")
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.rel_path(), self.file_name())
    }
}

/// Text added to a method-bearing unit for one use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodExtension {
    /// Presence of this token means the use case is already attached.
    pub token: String,
    /// Interface method signatures, in order.
    pub signatures: Vec<String>,
    /// Method stubs on the implementing struct, in order.
    pub bodies: Vec<String>,
}

impl MethodExtension {
    pub fn interface_fragment(&self) -> String {
        self.signatures.concat()
    }

    pub fn record_fragment(&self) -> String {
        self.bodies.concat()
    }
}

struct Method {
    name: String,
    params: String,
    returns: Option<String>,
    doc: &'static str,
}

impl Method {
    fn head(&self) -> String {
        match &self.returns {
            Some(ret) => format!("{}({}) {}", self.name, self.params, ret),
            None => format!("{}({})", self.name, self.params),
        }
    }

    fn signature(&self) -> String {
        format!(
            "\t// {} {}\n\t// TODO: Add description\n\t{}\n",
            self.name,
            self.doc,
            self.head()
        )
    }

    fn stub(&self, iface: &str, receiver: &str, record: &str) -> String {
        let ret = if self.returns.is_some() {
            "\n\treturn nil"
        } else {
            ""
        };
        format!(
            "\n\n// {name} implements the {iface} interface method {name}.\n\
             func ({receiver} *{record}) {head} {{\n\t// TODO: Implement interface method{ret}\n}}",
            name = self.name,
            head = self.head(),
        )
    }
}
