//! Closed sets of display labels (statuses, categories, priorities).
//!
//! Each label enum serializes as its display text, so exports read the same
//! as the tables, and parses back from either the text or its slug, which is
//! what filter `<select>` values carry.

/// Declares a label enum with `label()`, `slug()`, `all()`, `from_label()` and `Display`.
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $label)]
                $variant
            ),+
        }

        impl $name {
            /// Display text, also the serialized form
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Filter value form (`Low Stock` -> `low-stock`)
            pub fn slug(&self) -> String {
                $crate::shared::list_query::slugify(self.label())
            }

            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Accepts the display text (any case) or the slug.
            pub fn from_label(value: &str) -> Option<Self> {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                Self::all().iter().copied().find(|v| {
                    v.label().eq_ignore_ascii_case(value)
                        || $crate::shared::list_query::slugify(v.label()) == value.to_lowercase()
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::label_enum! {
        pub enum Sample {
            First => "First Value",
            Second => "Second",
        }
    }

    #[test]
    fn parses_label_and_slug() {
        assert_eq!(Sample::from_label("First Value"), Some(Sample::First));
        assert_eq!(Sample::from_label("first value"), Some(Sample::First));
        assert_eq!(Sample::from_label("first-value"), Some(Sample::First));
        assert_eq!(Sample::from_label(""), None);
        assert_eq!(Sample::from_label("third"), None);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Sample::First).unwrap(), "\"First Value\"");
        let back: Sample = serde_json::from_str("\"Second\"").unwrap();
        assert_eq!(back, Sample::Second);
        assert_eq!(Sample::First.to_string(), "First Value");
        assert_eq!(Sample::First.slug(), "first-value");
    }
}
