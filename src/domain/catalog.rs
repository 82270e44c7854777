use crate::domain::model::Endpoint;

pub const DEFAULT_DATA_DIR: &str = "data";

pub const COVID_WORLDWIDE_URL: &str = "https://opendata.ecdc.europa.eu/covid19/casedistribution/csv";
pub const SERBIA_OFFICIAL_URL: &str = "https://covid19.data.gov.rs/api/datasets/statistic/official";

/// Endpoints fetched when no configuration file lists its own.
pub fn builtin_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("covid-worldwide", COVID_WORLDWIDE_URL, "covid-worldwide.csv")
            .with_description("European Centre for Disease Prevention and Control, COVID-19 cases worldwide"),
        // File name spelling is what downstream consumers already read.
        Endpoint::new("serbia-official", SERBIA_OFFICIAL_URL, "serbia-offitial.json").with_description(
            "covid19.rs; Institute of Public Health of Serbia \"Dr Milan Jovanovic Batut\", WHO",
        ),
    ]
}
