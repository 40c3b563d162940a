//! Shared string utilities for code generation.

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "main-hero-cover1" -> "MainHeroCover1")
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "blog-item" -> "blogItem")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hero"), "Hero");
        assert_eq!(to_pascal_case("main-hero-cover1-bold"), "MainHeroCover1Bold");
        assert_eq!(to_pascal_case("blog_item"), "BlogItem");
        assert_eq!(to_pascal_case("blogItem"), "BlogItem");
        assert_eq!(to_pascal_case("call--to  action"), "CallToAction");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("blog-item"), "blogItem");
        assert_eq!(to_camel_case("BlogItem"), "blogItem");
        assert_eq!(to_camel_case(""), "");
    }
}
