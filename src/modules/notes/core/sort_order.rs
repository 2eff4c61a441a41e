use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Alphabetical => "alphabetical",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod sort_order_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("newest", SortOrder::Newest)]
    #[case("oldest", SortOrder::Oldest)]
    #[case("alphabetical", SortOrder::Alphabetical)]
    fn it_should_parse_the_known_orders(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(raw.parse::<SortOrder>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    fn it_should_reject_an_unknown_order() {
        assert_eq!(
            "random".parse::<SortOrder>(),
            Err(UnknownSortOrder("random".into()))
        );
    }

    #[rstest]
    fn it_should_default_to_newest() {
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }
}
