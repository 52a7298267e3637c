//! Case conventions for `#[prune(rename_all = "...")]`.
//!
//! Field identifiers are assumed to be `snake_case` and variant identifiers
//! `PascalCase`, which is what rustc's default lints expect.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    pub(crate) const EXPECTED: &'static str = "`lowercase`, `UPPERCASE`, `PascalCase`, \
`camelCase`, `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`";

    pub(crate) fn parse(rule: &str) -> Option<Self> {
        match rule {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "PascalCase" => Some(Self::PascalCase),
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            _ => None,
        }
    }

    /// Renames a `snake_case` field identifier.
    pub(crate) fn apply_to_field(self, field: &str) -> String {
        match self {
            Self::LowerCase | Self::SnakeCase => field.to_owned(),
            Self::UpperCase | Self::ScreamingSnakeCase => field.to_ascii_uppercase(),
            Self::PascalCase => pascal_from_snake(field),
            Self::CamelCase => {
                let pascal = pascal_from_snake(field);
                lower_first(&pascal)
            }
            Self::KebabCase => field.replace('_', "-"),
        }
    }

    /// Renames a `PascalCase` variant identifier.
    pub(crate) fn apply_to_variant(self, variant: &str) -> String {
        match self {
            Self::PascalCase => variant.to_owned(),
            Self::LowerCase => variant.to_ascii_lowercase(),
            Self::UpperCase => variant.to_ascii_uppercase(),
            Self::CamelCase => lower_first(variant),
            Self::SnakeCase => snake_from_pascal(variant),
            Self::ScreamingSnakeCase => snake_from_pascal(variant).to_ascii_uppercase(),
            Self::KebabCase => snake_from_pascal(variant).replace('_', "-"),
        }
    }
}

fn pascal_from_snake(field: &str) -> String {
    let mut pascal = String::with_capacity(field.len());
    let mut capitalize = true;
    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            pascal.push(ch);
        }
    }
    pascal
}

fn snake_from_pascal(variant: &str) -> String {
    let mut snake = String::with_capacity(variant.len() + 4);
    for (index, ch) in variant.char_indices() {
        if index > 0 && ch.is_uppercase() {
            snake.push('_');
        }
        snake.extend(ch.to_lowercase());
    }
    snake
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
