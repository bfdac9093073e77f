//! Domain value objects: LayerKind and Identifier.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `LayerKind` is the closed set of generated-unit roles; each role knows its
//! storage location, Go package name and the packages its unit imports.
//! `Identifier` is a validated owner or use-case name.

use crate::domain::{error::DomainError, naming};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LayerKind ────────────────────────────────────────────────────────────────

/// One of the eight generated-unit roles.
///
/// The first five carry an interface plus implementing struct and grow one
/// method set per use case. The last three are plain data holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    #[serde(rename = "controller")]
    BoundaryIn,
    #[serde(rename = "presenter")]
    BoundaryOut,
    #[serde(rename = "view")]
    Renderer,
    #[serde(rename = "interactor")]
    BusinessLogic,
    #[serde(rename = "validator")]
    Validator,
    #[serde(rename = "reqmodel")]
    RequestModel,
    #[serde(rename = "respmodel")]
    ResponseModel,
    #[serde(rename = "viewmodel")]
    ViewModel,
}

impl LayerKind {
    /// All kinds in the order a use case is attached.
    pub const ALL: [LayerKind; 8] = [
        Self::BoundaryIn,
        Self::BoundaryOut,
        Self::Renderer,
        Self::ViewModel,
        Self::BusinessLogic,
        Self::RequestModel,
        Self::Validator,
        Self::ResponseModel,
    ];

    /// Kinds that own an interface and an implementing struct.
    pub const METHOD_BEARING: [LayerKind; 5] = [
        Self::BoundaryIn,
        Self::BoundaryOut,
        Self::Renderer,
        Self::BusinessLogic,
        Self::Validator,
    ];

    /// Kinds that only hold plain struct declarations.
    pub const DATA_ONLY: [LayerKind; 3] =
        [Self::RequestModel, Self::ResponseModel, Self::ViewModel];

    /// Storage location relative to the generated source root.
    pub const fn rel_path(&self) -> &'static str {
        match self {
            Self::BoundaryIn => "ifadapter/controller/",
            Self::BoundaryOut => "ifadapter/presenter/",
            Self::Renderer => "ifadapter/view/",
            Self::BusinessLogic => "usecase/interactor/",
            Self::Validator => "usecase/reqmodel/validator/",
            Self::RequestModel => "usecase/reqmodel/",
            Self::ResponseModel => "usecase/respmodel/",
            Self::ViewModel => "ifadapter/view/viewmodel/",
        }
    }

    /// Go package name, the last segment of [`Self::rel_path`].
    pub fn package(&self) -> &'static str {
        naming::dir_label(self.rel_path())
    }

    /// Import path of this kind's package relative to the module prefix.
    pub fn import_path(&self) -> String {
        format!("clean/{}", self.rel_path().trim_end_matches('/'))
    }

    pub const fn is_method_bearing(&self) -> bool {
        matches!(
            self,
            Self::BoundaryIn
                | Self::BoundaryOut
                | Self::Renderer
                | Self::BusinessLogic
                | Self::Validator
        )
    }

    /// Word used in the generated interface doc comment.
    pub const fn role(&self) -> &'static str {
        match self {
            Self::BoundaryIn => "Controller",
            Self::BoundaryOut => "Presenter",
            Self::Renderer => "View",
            Self::BusinessLogic => "Interactor",
            Self::Validator => "Validator",
            Self::RequestModel => "RequestModel",
            Self::ResponseModel => "ResponseModel",
            Self::ViewModel => "ViewModel",
        }
    }

    /// Packages imported by a freshly bootstrapped unit of this kind.
    pub const fn imports(&self) -> &'static [LayerKind] {
        match self {
            Self::BoundaryIn => &[Self::BusinessLogic, Self::RequestModel],
            Self::BoundaryOut => &[Self::Renderer, Self::ViewModel, Self::ResponseModel],
            Self::Renderer => &[Self::ViewModel],
            Self::BusinessLogic => &[
                Self::BoundaryOut,
                Self::RequestModel,
                Self::Validator,
                Self::ResponseModel,
            ],
            Self::Validator => &[Self::RequestModel, Self::ResponseModel],
            Self::RequestModel | Self::ResponseModel | Self::ViewModel => &[],
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}

impl FromStr for LayerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "controller" => Ok(Self::BoundaryIn),
            "presenter" => Ok(Self::BoundaryOut),
            "view" => Ok(Self::Renderer),
            "interactor" => Ok(Self::BusinessLogic),
            "validator" => Ok(Self::Validator),
            "reqmodel" => Ok(Self::RequestModel),
            "respmodel" => Ok(Self::ResponseModel),
            "viewmodel" => Ok(Self::ViewModel),
            other => Err(DomainError::InvalidName {
                name: other.to_string(),
                reason: "unknown layer kind".into(),
            }),
        }
    }
}

// ── Identifier ───────────────────────────────────────────────────────────────

/// An owner (interactor) or use-case name.
///
/// Invariant: ASCII letter first, then letters, digits or `_`. A trailing
/// file extension is stripped on parse so `Order.go` and `Order` agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = naming::strip_extension(raw.trim());
        let invalid = |reason: &str| DomainError::InvalidName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("name cannot be empty")),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(invalid("name must start with a letter"));
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exported form, e.g. the interface or model struct name.
    pub fn exported(&self) -> String {
        naming::capitalize(&self.0)
    }

    /// Unexported form, e.g. the implementing struct or file stem.
    pub fn unexported(&self) -> String {
        naming::decapitalize(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_follow_rel_paths() {
        assert_eq!(LayerKind::BoundaryIn.package(), "controller");
        assert_eq!(LayerKind::Validator.package(), "validator");
        assert_eq!(LayerKind::ViewModel.package(), "viewmodel");
        assert_eq!(
            LayerKind::Validator.import_path(),
            "clean/usecase/reqmodel/validator"
        );
    }

    #[test]
    fn method_bearing_split() {
        for kind in LayerKind::METHOD_BEARING {
            assert!(kind.is_method_bearing());
        }
        for kind in LayerKind::DATA_ONLY {
            assert!(!kind.is_method_bearing());
            assert!(kind.imports().is_empty());
        }
        assert_eq!(LayerKind::ALL.len(), 8);
    }

    #[test]
    fn interactor_imports() {
        assert_eq!(
            LayerKind::BusinessLogic.imports(),
            &[
                LayerKind::BoundaryOut,
                LayerKind::RequestModel,
                LayerKind::Validator,
                LayerKind::ResponseModel
            ]
        );
    }

    #[test]
    fn layer_kind_round_trips_through_display() {
        for kind in LayerKind::ALL {
            assert_eq!(kind.to_string().parse::<LayerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn identifier_accepts_identifiers() {
        let id = Identifier::parse("orderHandler").unwrap();
        assert_eq!(id.exported(), "OrderHandler");
        assert_eq!(id.unexported(), "orderHandler");
        assert_eq!(Identifier::parse("Add_Item2").unwrap().as_str(), "Add_Item2");
    }

    #[test]
    fn identifier_strips_extension() {
        assert_eq!(Identifier::parse("Order.go").unwrap().as_str(), "Order");
    }

    #[test]
    fn identifier_rejects_garbage() {
        assert!(Identifier::parse("").is_err());
        assert!(Identifier::parse("1Order").is_err());
        assert!(Identifier::parse("Order-Handler").is_err());
        assert!(Identifier::parse("Or der").is_err());
        assert!(matches!(
            Identifier::parse("_x"),
            Err(DomainError::InvalidName { .. })
        ));
    }
}
