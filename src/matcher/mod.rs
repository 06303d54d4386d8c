//! Matcher groups and filter expressions
//!
//! The `alert query` command takes free-form "matcher groups" and turns them
//! into the filter expression understood by the Alertmanager alerts API.
//!
//! # Syntax
//!
//! ```text
//! label=value          Equality
//! label!=value         Inequality
//! label=~regex         Regex match (anchored)
//! label!~regex         Regex non-match (anchored)
//! ```
//!
//! # Examples
//!
//! ```text
//! alertname=foo node=bar      {alertname=foo,node=bar}
//! foo                         {alertname=foo}
//! 'alertname=~foo.*'          {alertname=~foo.*}
//! (nothing)                   {}
//! ```

pub mod error;
pub mod expression;
pub mod parser;

pub use error::MatcherParseError;
pub use expression::FilterExpression;
pub use parser::{MatchOperator, Matcher, MatcherGroup};
