/// Extension trait for `/`-separated template paths.
pub trait TemplatePathExt {
    /// Lexically resolves `.` and `..` segments and drops empty ones.
    ///
    /// The result is relative to the store root and has no leading `/`.
    /// Only `/` separates segments, plus `\` on Windows; elsewhere a
    /// backslash is an ordinary file name character.
    /// Returns `None` when a `..` would climb above the root.
    ///
    /// # Examples
    /// ```
    /// use template_loader::ext::TemplatePathExt;
    ///
    /// assert_eq!("/a/./b/../c.hbs".normalize_segments().as_deref(), Some("a/c.hbs"));
    /// assert_eq!("/../etc/passwd".normalize_segments(), None);
    /// ```
    fn normalize_segments(&self) -> Option<String>;

    /// Strips every leading `/`.
    fn trim_root(&self) -> &str;
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

impl TemplatePathExt for str {
    fn normalize_segments(&self) -> Option<String> {
        let mut segments: Vec<&str> = Vec::new();
        for segment in self.split(is_separator) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                other => segments.push(other),
            }
        }
        Some(segments.join("/"))
    }

    fn trim_root(&self) -> &str {
        self.trim_start_matches('/')
    }
}
