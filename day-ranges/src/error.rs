use std::fmt::Display;

/// A month format token that is not one of `M`, `MM`, `MMM` or `MMMM`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownMonthFormat(pub String);

impl Display for UnknownMonthFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown month format `{}`", self.0)
    }
}

impl std::error::Error for UnknownMonthFormat {}
