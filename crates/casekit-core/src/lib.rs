//! Casekit Core Library
//!
//! This library splits irregularly formatted identifiers and phrases
//! into ordered sequences of semantic words, then re-joins them under a
//! target casing rule (camelCase, kebab-case, dot.case, or the legacy
//! space-only camel variant). Inputs are validated up front with typed,
//! per-category error messages.

pub mod case;
pub mod error;
pub mod tokenize;
pub mod validate;

pub use crate::{
    case::{
        convert, convert_value, convert_with, space_join_camel_case, to_camel_case, to_dot_case,
        to_kebab_case, Case,
    },
    error::{Error, Result, ValueKind},
    tokenize::{tokenize, Separators},
    validate::{validate, RawInput},
};
