use std::fmt;
use std::str::FromStr;

use crate::FormError;

/// Names of the fields held in `FormValues`.
///
/// The output area is not listed here: it displays a derived value and is
/// never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Color,
}

impl FieldName {
    /// All field names in the order the initial values declare them.
    ///
    /// This is the order used when the values are serialized.
    pub const DECLARED: [FieldName; 3] = [FieldName::Email, FieldName::Name, FieldName::Color];

    /// The key used for this field in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "color" => Ok(Self::Color),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        for field in FieldName::DECLARED {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "output".parse::<FieldName>(),
            Err(FormError::UnknownField("output".to_string()))
        );
    }

    #[test]
    fn declared_order() {
        let keys: Vec<&str> = FieldName::DECLARED.iter().map(|f| f.as_str()).collect();
        assert_eq!(keys, ["email", "name", "color"]);
    }
}
