//! Static field tables
//!
//! Every settings type declares one [`FieldDescriptor`] per serialized field.
//! The load, update and schema-verification engines look fields up in these
//! tables by name; nothing is discovered by reflection.

/// Semantic type of a field, as seen in its JSON representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// JSON integer
    Integer,
    /// Any JSON number
    Float,
    /// JSON string
    String,
    /// JSON string restricted to the listed choices
    Enum(&'static [&'static str]),
    /// JSON array, replaced or appended as a whole by the merge policy
    List,
    /// Nested settings group with its own field table
    Group(&'static [FieldDescriptor]),
}

/// Declared type, constraints and write-back policy of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Inclusive lower bound for numeric fields
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric fields
    pub maximum: Option<f64>,
    /// Whether write-back may overwrite the persisted value
    pub updatable: bool,
}

impl FieldDescriptor {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            minimum: None,
            maximum: None,
            updatable: true,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub const fn choice(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum(choices))
    }

    pub const fn list(name: &'static str) -> Self {
        Self::new(name, FieldKind::List)
    }

    pub const fn group(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self::new(name, FieldKind::Group(fields))
    }

    /// Set the inclusive lower bound.
    pub const fn min(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the inclusive upper bound.
    pub const fn max(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Mark the field as protected from write-back.
    pub const fn protected(mut self) -> Self {
        self.updatable = false;
        self
    }

    /// Field table of a nested group, if this field is one.
    pub fn nested_fields(&self) -> Option<&'static [FieldDescriptor]> {
        match self.kind {
            FieldKind::Group(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Look up a field by name.
pub fn descriptor<'a>(fields: &'a [FieldDescriptor], name: &str) -> Option<&'a FieldDescriptor> {
    fields.iter().find(|field| field.name == name)
}
