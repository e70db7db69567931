use crate::persist::error::InvalidDataError;

/// An opaque structured-data container handed to a builder.
///
/// Wraps a parsed TOML value; builders interpret its shape, the view itself
/// imposes no schema.
#[derive(Debug, Clone)]
pub struct DataView {
    value: toml::Value,
}

impl DataView {
    pub fn from_toml_str(raw: &str) -> Result<Self, InvalidDataError> {
        let value = raw
            .parse::<toml::Value>()
            .map_err(|e| InvalidDataError::new(format!("unparseable TOML: {e}")))?;
        Ok(Self { value })
    }

    pub(crate) fn value(&self) -> &toml::Value {
        &self.value
    }
}

impl From<toml::Value> for DataView {
    fn from(value: toml::Value) -> Self {
        Self { value }
    }
}
