/// A scalar literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),

    /// Opaque text plus a content-type tag. Document content arrives here as
    /// JSON text tagged [`ContentType::Json`] or [`ContentType::Plain`].
    Octets {
        value: String,
        content_type: ContentType,
    },

    String(String),
}

/// Declared content type of an octets literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Plain,
    Json,
    Xml,
    Geometry,
}

impl Scalar {
    /// Octets carrying JSON text.
    pub fn json(value: impl Into<String>) -> Self {
        Scalar::Octets {
            value: value.into(),
            content_type: ContentType::Json,
        }
    }

    /// Octets with no declared content type.
    pub fn plain(value: impl Into<String>) -> Self {
        Scalar::Octets {
            value: value.into(),
            content_type: ContentType::Plain,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}
