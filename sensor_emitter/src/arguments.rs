use clap::Parser;
use sensor_codecs::Weight;

fn non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("location must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Simulated traffic sensor reporting weighted random vehicle observations.
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Arguments {
    /// Location identifier of the sensor
    #[arg(value_parser = non_empty)]
    pub location: String,

    /// Sampling weight of the `car` vehicle type
    pub car_weight: Weight,

    /// Sampling weight of the `motorcycle` vehicle type
    pub motorcycle_weight: Weight,

    /// Sampling weight of the `bus` vehicle type
    pub bus_weight: Weight,

    /// Number of vehicles "detected" per period
    pub batch_size: usize,

    /// Period between reports, in seconds
    pub period_seconds: u64,

    /// Collection endpoint receiving the reports
    #[arg(long, default_value = "http://localhost:8080/sensorapi/data")]
    pub url: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn six_positional_values() {
        let args =
            Arguments::try_parse_from(["sensor", "west-seattle-bridge", "8", "2", "1", "5", "30"])
                .unwrap();
        assert_eq!(args.location, "west-seattle-bridge");
        assert_eq!(args.car_weight, 8);
        assert_eq!(args.motorcycle_weight, 2);
        assert_eq!(args.bus_weight, 1);
        assert_eq!(args.batch_size, 5);
        assert_eq!(args.period_seconds, 30);
        assert_eq!(args.url, "http://localhost:8080/sensorapi/data");
    }

    #[test]
    fn url_flag_overrides_the_default() {
        let args = Arguments::try_parse_from([
            "sensor",
            "aurora-ave",
            "1",
            "1",
            "1",
            "10",
            "60",
            "--url",
            "http://collector:9000/sensorapi/data",
        ])
        .unwrap();
        assert_eq!(args.url, "http://collector:9000/sensorapi/data");
    }

    #[test]
    fn missing_values_are_rejected() {
        assert!(Arguments::try_parse_from(["sensor", "aurora-ave", "1", "1", "1"]).is_err());
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        assert!(
            Arguments::try_parse_from(["sensor", "aurora-ave", "many", "1", "1", "5", "30"])
                .is_err()
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(Arguments::try_parse_from(["sensor", "aurora-ave", "1", "-1", "1", "5", "30"])
            .is_err());
    }

    #[test]
    fn empty_location_is_rejected() {
        assert!(Arguments::try_parse_from(["sensor", "", "1", "1", "1", "5", "30"]).is_err());
    }
}
