//! Serde helpers for workspace files written by hand

/// Implement case-insensitive deserialization for a unit-only enum
///
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     ProjectType,
///     Application => "application",
///     Library => "library"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Style {
        Css,
        Scss,
        Less,
    }

    impl_case_insensitive_deserialize!(
        Style,
        Css => "css",
        Scss => "scss",
        Less => "less"
    );

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: Style = serde_json::from_str(r#""scss""#).unwrap();
        assert_eq!(result, Style::Scss);

        let result: Style = serde_json::from_str(r#""SCSS""#).unwrap();
        assert_eq!(result, Style::Scss);

        let result: Style = serde_json::from_str(r#""Less""#).unwrap();
        assert_eq!(result, Style::Less);

        let result: Result<Style, _> = serde_json::from_str(r#""sass""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'sass'"));
        assert!(err.contains("expected one of: css, scss, less"));
    }
}
