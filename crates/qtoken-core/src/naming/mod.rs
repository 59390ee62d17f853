//! Names that make up the segments of a qualified token.
//!
//! A [`Name`] is a simple identifier, a [`QName`] is a `/`-separated run of names,
//! and a [`PackageName`] is a qualified name whose segments may also contain dashes.
//! None of them may contain the token delimiter.

pub mod name;
pub mod package_name;
pub mod qname;
pub mod validate;

pub use name::Name;
pub use package_name::PackageName;
pub use qname::QName;
pub use validate::{is_name, is_package_name, is_qname, NAME_CURRENT, QNAME_DELIMITER};

/// Module names may be qualified, e.g. `collections/list`.
pub type ModuleName = QName;

/// Module members use simple names.
pub type ModuleMemberName = Name;

/// Class members use simple names.
pub type ClassMemberName = Name;

/// The simple name of a type declared in a module, or of a primitive type.
pub type TypeName = Name;
