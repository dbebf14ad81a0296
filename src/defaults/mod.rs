//! Column default extraction
//!
//! Recovers a literal default from the default definition reported by the
//! catalog (`pg_get_expr(adbin, adrelid)`), e.g.
//!
//! | raw default                    | result            |
//! |--------------------------------|-------------------|
//! | `'abc'::character varying`     | `Literal("abc")`  |
//! | `'now'::date`                  | `NoDefault`       |
//! | `true`                         | `Literal("true")` |
//! | `(-1)`                         | `Literal("-1")`   |
//! | `nextval('seq'::regclass)`     | `NoDefault`, function-derived |
//!
//! Extraction never fails: shapes it does not recognise are `NoDefault`.

mod extractor;
mod rules;
mod types;

pub use extractor::{extract_default, is_function_derived, shared, DefaultValueExtractor};
pub use types::DefaultSpec;
