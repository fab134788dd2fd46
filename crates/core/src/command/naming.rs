//! Helpers for the primary name argument

/// Split a raw name such as `hello/world` into its folder and final segment
///
/// Both `/` and `\` separate segments, empty segments are dropped and the
/// folder is returned with `/` separators.
pub fn split_name(raw: &str) -> (String, String) {
    let mut segments: Vec<&str> = raw
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();
    let name = segments.pop().unwrap_or_default().to_string();
    (segments.join("/"), name)
}

/// The schematics' file name form: `helloWorld` and `Hello World` become `hello-world`
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c == ' ' || c == '_' {
            out.push('-');
        } else if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("hello"), (String::new(), "hello".to_string()));
        assert_eq!(split_name("hello/world"), ("hello".to_string(), "world".to_string()));
        assert_eq!(split_name("a/b/c/"), ("a/b".to_string(), "c".to_string()));
        assert_eq!(split_name("a\\b"), ("a".to_string(), "b".to_string()));
        assert_eq!(split_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_dasherize() {
        assert_eq!(dasherize("hello"), "hello");
        assert_eq!(dasherize("helloWorld"), "hello-world");
        assert_eq!(dasherize("HelloWorld"), "hello-world");
        assert_eq!(dasherize("hello_world"), "hello-world");
        assert_eq!(dasherize("hello world"), "hello-world");
        assert_eq!(dasherize("hello-world"), "hello-world");
        assert_eq!(dasherize("user2Profile"), "user2-profile");
    }
}
