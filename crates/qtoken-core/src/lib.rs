//! Qualified tokens for the compiled IL.
//!
//! A token is a flat string such as `pkg:mod:Foo:bar` or `[]*map[string]pkg:mod:Foo`
//! that names a package, module, module member, class member or type. This crate
//! parses those strings once into structured values and renders them back to the
//! same flat encoding at the boundary.

pub mod address;
pub mod error;
pub mod naming;
pub mod ordering;
pub mod symbol;
pub mod token;
pub mod types;

pub use address::{Address, ClassMember, Module, ModuleMember, Package};
pub use error::{Result, TokenError};
pub use naming::{
    ClassMemberName, ModuleMemberName, ModuleName, Name, PackageName, QName, TypeName,
};
pub use ordering::ByName;
pub use symbol::{Function, Variable};
pub use token::{Token, TOKEN_DELIMITER};
pub use types::Type;
