use chartgen::chart::axis::{quarter_year_ticks, time_ticks, value_ticks, year_ticks};
use chartgen::model::GdpSample;
use chartgen::scale::{BandScale, LinearScale};

fn quarterly_samples(years: std::ops::RangeInclusive<i32>) -> Vec<GdpSample> {
    let mut samples = Vec::new();
    for year in years {
        for month in [1, 4, 7, 10] {
            let date = format!("{year}-{month:02}-01");
            samples.push(GdpSample::from_pair(&date, 100.0).unwrap());
        }
    }
    samples
}

#[test]
fn gdp_ticks_only_on_years_divisible_by_five_once() {
    let samples = quarterly_samples(1947..=1952);
    let scale = BandScale::fit(samples.len(), (63.0, 857.0), 0.3).unwrap();
    let ticks = quarter_year_ticks(&samples, &scale);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["1950"], "one tick, despite four 1950 quarters");
}

#[test]
fn gdp_ticks_are_ordered() {
    let samples = quarterly_samples(1945..=1961);
    let scale = BandScale::fit(samples.len(), (63.0, 857.0), 0.3).unwrap();
    let ticks = quarter_year_ticks(&samples, &scale);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["1945", "1950", "1955", "1960"]);
    assert!(ticks.windows(2).all(|w| w[0].offset < w[1].offset));
}

#[test]
fn year_ticks_every_two_years() {
    let scale = LinearScale::new((1993.0, 2017.0), (63.0, 857.0));
    let ticks = year_ticks(&scale, 2);
    assert_eq!(ticks.first().unwrap().label, "1994");
    assert_eq!(ticks.last().unwrap().label, "2016");
    for tick in &ticks {
        let year: i32 = tick.label.parse().unwrap();
        assert_eq!(year % 2, 0);
    }
    assert!(ticks.windows(2).all(|w| w[0].offset < w[1].offset));
}

#[test]
fn time_ticks_are_formatted_m_ss() {
    let scale = LinearScale::new((2209.0, 2390.0), (567.0, 63.0));
    let ticks = time_ticks(&scale, 30);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["37:00", "37:30", "38:00", "38:30", "39:00", "39:30"]
    );
}

#[test]
fn value_ticks_use_nice_steps() {
    let scale = LinearScale::new((0.0, 9000.0), (567.0, 63.0));
    let ticks = value_ticks(&scale, 10);
    assert_eq!(ticks.first().unwrap().label, "0");
    assert_eq!(ticks.last().unwrap().label, "9000");
    let values: Vec<i64> = ticks.iter().map(|t| t.label.parse().unwrap()).collect();
    for pair in values.windows(2) {
        assert_eq!(pair[1] - pair[0], 1000, "steps land on a nice interval");
    }
}

#[test]
fn value_ticks_respect_max_count() {
    let scale = LinearScale::new((0.0, 9000.0), (567.0, 63.0));
    for max in [4, 6, 10, 20] {
        let ticks = value_ticks(&scale, max);
        assert!(
            ticks.len() <= max + 1,
            "{} ticks for max {}",
            ticks.len(),
            max
        );
        assert!(!ticks.is_empty());
    }
}
