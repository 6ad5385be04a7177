//! Operario Validate - data and document validators.
//!
//! The centerpiece is the Brazilian taxpayer document validator
//! ([`Cpf`]/[`Cnpj`], weighted modulo-11 check digits). Around it sit the
//! straightforward pattern checks robots need: emails, phone numbers,
//! date ranges and required-field maps.
//!
//! All validators are pure functions: no I/O, no logging, no state between
//! calls. They can be called concurrently from any number of tasks.
//!
//! # Example
//!
//! ```rust
//! use operario_validate::{Cnpj, Cpf, DocumentError};
//!
//! let cpf = Cpf::parse("529.982.247-25").expect("known-valid CPF");
//! assert_eq!(cpf.formatted(), "529.982.247-25");
//!
//! let err = Cpf::parse("123.456.789-00").expect_err("bad check digit");
//! assert_eq!(err, DocumentError::CheckDigitMismatch);
//!
//! assert!(Cnpj::parse("11.222.333/0001-81").is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod contact;
pub mod dates;
pub mod documents;
pub mod error;
pub mod fields;

pub use contact::{is_valid_email, PhoneNumber};
pub use dates::{is_valid_date_range, DEFAULT_DATE_FORMAT};
pub use documents::{Cnpj, Cpf};
pub use error::{DocumentError, ValidationError};
pub use fields::{empty_fields, validate_required};

/// Validate a CPF string. Thin wrapper over [`Cpf::parse`] kept for
/// callers migrating from the old class-style API.
#[deprecated(since = "0.1.0", note = "use `Cpf::parse` directly")]
pub fn validate_cpf(raw: &str) -> Result<Cpf, DocumentError> {
    Cpf::parse(raw)
}

/// Validate a CNPJ string. Thin wrapper over [`Cnpj::parse`] kept for
/// callers migrating from the old class-style API.
#[deprecated(since = "0.1.0", note = "use `Cnpj::parse` directly")]
pub fn validate_cnpj(raw: &str) -> Result<Cnpj, DocumentError> {
    Cnpj::parse(raw)
}

/// Legacy name for the date-range check, with the default `dd/mm/yyyy`
/// format baked in.
#[deprecated(since = "0.1.0", note = "use `dates::is_valid_date_range`")]
pub fn is_start_date_greater_than_end_date(
    start: &str,
    end: &str,
) -> Result<bool, ValidationError> {
    is_valid_date_range(start, end, DEFAULT_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]
    use super::*;

    #[test]
    fn test_legacy_wrappers_delegate() {
        assert!(validate_cpf("111.444.777-35").is_ok());
        assert!(validate_cnpj("11.222.333/0001-81").is_ok());
        assert!(
            is_start_date_greater_than_end_date("01/01/2024", "31/12/2024")
                .expect("parse dates")
        );
    }
}
