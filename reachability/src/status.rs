use derive_more::Display;
use serde::Serialize;

/// Reachability class of a target at one point in time.
///
/// This is an unordered tag; `ReachableVia4G` is not "greater than"
/// `ReachableVia3G` in any modeled sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum NetworkStatus {
    #[serde(rename = "not-reachable")]
    #[display("not reachable")]
    NotReachable,
    #[serde(rename = "local-network")]
    #[display("reachable via local network")]
    ReachableViaLocalNetwork,
    /// Cellular route, generation unknown.
    #[serde(rename = "wwan")]
    #[display("reachable via wwan")]
    ReachableViaWwan,
    #[serde(rename = "2g")]
    #[display("reachable via 2g")]
    ReachableVia2G,
    #[serde(rename = "3g")]
    #[display("reachable via 3g")]
    ReachableVia3G,
    #[serde(rename = "4g")]
    #[display("reachable via 4g")]
    ReachableVia4G,
}

/// Cellular generation class of a radio access technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Generation {
    #[serde(rename = "2g")]
    #[display("2g")]
    TwoG,
    #[serde(rename = "3g")]
    #[display("3g")]
    ThreeG,
    #[serde(rename = "4g")]
    #[display("4g")]
    FourG,
}

/// Active cellular radio access technology, as reported by the platform.
///
/// `Other` covers the remaining known technologies (wcdma, hsdpa, hsupa,
/// ehrpd, evdo revisions, ...), all of which are 3G class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioTechnology {
    Lte,
    Edge,
    Gprs,
    Cdma1x,
    Other(String),
}

impl<T> From<T> for RadioTechnology
where
    T: Into<String>,
{
    fn from(value: T) -> Self {
        let value = value.into();

        match value.as_str() {
            "lte" => RadioTechnology::Lte,
            "edge" => RadioTechnology::Edge,
            "gprs" => RadioTechnology::Gprs,
            "cdma1x" | "1xrtt" => RadioTechnology::Cdma1x,
            _ => RadioTechnology::Other(value),
        }
    }
}

impl RadioTechnology {
    /// Technology -> generation mapping table. New technologies slot in here.
    pub fn generation(&self) -> Generation {
        match self {
            RadioTechnology::Lte => Generation::FourG,
            RadioTechnology::Edge => Generation::TwoG,
            RadioTechnology::Gprs => Generation::TwoG,
            RadioTechnology::Cdma1x => Generation::TwoG,
            RadioTechnology::Other(_) => Generation::ThreeG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radio_technology_parsing() {
        let test_cases = [
            ("lte", RadioTechnology::Lte),
            ("edge", RadioTechnology::Edge),
            ("gprs", RadioTechnology::Gprs),
            ("cdma1x", RadioTechnology::Cdma1x),
            ("1xrtt", RadioTechnology::Cdma1x),
            ("wcdma", RadioTechnology::Other("wcdma".to_string())),
            ("hsdpa", RadioTechnology::Other("hsdpa".to_string())),
        ];

        for (i, (input, expected)) in test_cases.into_iter().enumerate() {
            assert_eq!(RadioTechnology::from(input), expected, "{i}th case failed");
        }
    }

    #[test]
    fn generation_table() {
        let test_cases = [
            (RadioTechnology::Lte, Generation::FourG),
            (RadioTechnology::Edge, Generation::TwoG),
            (RadioTechnology::Gprs, Generation::TwoG),
            (RadioTechnology::Cdma1x, Generation::TwoG),
            (
                RadioTechnology::Other("wcdma".to_string()),
                Generation::ThreeG,
            ),
            (
                RadioTechnology::Other("ehrpd".to_string()),
                Generation::ThreeG,
            ),
        ];

        for (i, (tech, expected)) in test_cases.into_iter().enumerate() {
            assert_eq!(tech.generation(), expected, "{i}th case failed");
        }
    }

    #[test]
    fn status_wire_names() {
        let test_cases = [
            (NetworkStatus::NotReachable, "\"not-reachable\""),
            (NetworkStatus::ReachableViaLocalNetwork, "\"local-network\""),
            (NetworkStatus::ReachableViaWwan, "\"wwan\""),
            (NetworkStatus::ReachableVia2G, "\"2g\""),
            (NetworkStatus::ReachableVia3G, "\"3g\""),
            (NetworkStatus::ReachableVia4G, "\"4g\""),
        ];

        for (status, expected) in test_cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
        }
    }
}
