//! directions-query - compact string forms of directions request options.
//!
//! Request options travel as URL query parameters where list values are
//! packed into one string: `;` between entries and `,` inside an entry
//! (`13.4,52.5;13.5,52.6`). An absent entry is an empty segment. The
//! [`format`] functions build those strings and the [`parse`] functions
//! read them back; [`Exclude`] handles the `exclude` parameter and
//! [`unrecognized_query_pairs`] projects unknown options into extra pairs.

pub mod bearing;
pub mod error;
pub mod exclude;
pub mod format;
pub mod parse;
pub mod unrecognized;

pub use bearing::Bearing;
pub use directions_json::Point;
pub use error::QueryError;
pub use exclude::Exclude;
pub use format::{
    format_booleans, format_bearings, format_distributions, format_double, format_points,
    format_radiuses, format_strings, join,
};
pub use parse::{
    parse_bearings, parse_booleans, parse_doubles, parse_integers, parse_list_of_doubles,
    parse_points, parse_strings,
};
pub use unrecognized::unrecognized_query_pairs;

/// Separator between list entries.
pub const SEMICOLON: &str = ";";
/// Separator inside one entry.
pub const COMMA: &str = ",";
/// Radius value meaning "no limit".
pub const UNLIMITED: &str = "unlimited";
