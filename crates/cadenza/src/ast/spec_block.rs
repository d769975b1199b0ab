//! The parsed shape of a `/*spec … spec*/` comment attached to a function.

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct SpecBlock {
    pub intent: Option<String>,
    pub rules: Vec<String>,
    pub postconditions: Vec<String>,
    /// An explicit `source:` reference, distinct from `source_doc` below.
    pub source: Option<String>,
    /// The untouched text between `/*spec` and `spec*/`, kept so emission
    /// can fall back to it verbatim if no recognized fields were found.
    pub source_doc: String,
}
