use serde::Deserialize;

/// `?city=&temp=&conditions=`; `temp` stays a string so a bad number can be reported
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InsightsQuery {
    pub city: Option<String>,
    pub temp: Option<String>,
    pub conditions: Option<String>,
}
