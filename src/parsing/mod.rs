//! Parsers for the two comma-delimited dataset tables.
//!
//! - **Disease table**: `Disease,Symptom_1,...,Symptom_17`, one row per observed
//!   symptom combination
//! - **Description table**: `Disease,Description`
//!
//! Both tables carry a header row that is always skipped. Fields are split on
//! every comma and trimmed; quoting is not interpreted.
//!
//! ## Example
//!
//! ```rust
//! use disease_predictor::parsing::csv::parse_disease_text;
//!
//! let text = "Disease,Symptom_1,Symptom_2\nFlu,fever,cough\n";
//! let records = parse_disease_text(text).unwrap();
//! assert_eq!(records[0].disease, "Flu");
//! ```

pub mod csv;

pub use self::csv::ParseError;
