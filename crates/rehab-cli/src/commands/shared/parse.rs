use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value through serde; `-` is accepted for `_`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Turn a CLI text flag into a settings field update: an empty string
/// clears the field.
#[must_use]
pub fn clearable(value: Option<&str>) -> Option<Option<String>> {
    value.map(|text| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rehab_core::enums::{ContentKind, MoveDirection};

    use super::{clearable, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let direction: MoveDirection = parse_enum("Up", "direction").unwrap();
        assert_eq!(direction, MoveDirection::Up);
        let kind: ContentKind = parse_enum("service", "kind").unwrap();
        assert_eq!(kind, ContentKind::Service);
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_enum::<MoveDirection>("sideways", "direction").unwrap_err();
        assert!(err.to_string().contains("invalid direction 'sideways'"));
    }

    #[test]
    fn empty_flag_clears_field() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some("  ")), Some(None));
        assert_eq!(
            clearable(Some(" info@clinic.example ")),
            Some(Some(String::from("info@clinic.example")))
        );
    }
}
