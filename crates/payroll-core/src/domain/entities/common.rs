use std::fmt;

/// Renders an optional text attribute: quoted when present, `none` when absent.
pub(crate) struct Quoted<'a>(pub &'a Option<String>);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:?}"),
            None => f.write_str("none"),
        }
    }
}

/// Renders an optional attribute by its own `Display`, `none` when absent.
pub(crate) struct Plain<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Plain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_present_and_absent() {
        assert_eq!(Quoted(&Some("ring bearer".into())).to_string(), "\"ring bearer\"");
        assert_eq!(Quoted(&None).to_string(), "none");
    }

    #[test]
    fn plain_present_and_absent() {
        assert_eq!(Plain(&Some(7u64)).to_string(), "7");
        assert_eq!(Plain::<u64>(&None).to_string(), "none");
    }
}
