use chartgen::scale::{BandScale, LinearScale};

#[test]
fn linear_maps_endpoints_to_range() {
    let s = LinearScale::new((0.0, 10.0), (100.0, 200.0));
    assert_eq!(s.map(0.0), 100.0);
    assert_eq!(s.map(10.0), 200.0);
    assert_eq!(s.map(5.0), 150.0);
}

#[test]
fn linear_fit_is_monotonic() {
    let s = LinearScale::fit([2001.0, 1994.0, 2016.0], (63.0, 857.0)).unwrap();
    let mut prev = f32::NEG_INFINITY;
    for year in 1994..=2016 {
        let px = s.map(year as f64);
        assert!(px > prev, "x scale must increase with the year");
        prev = px;
    }
}

#[test]
fn descending_range_flips_direction() {
    let s = LinearScale::fit([0.0, 100.0], (567.0, 63.0)).unwrap();
    assert_eq!(s.map(0.0), 567.0);
    assert_eq!(s.map(100.0), 63.0);
    assert!(
        s.map(80.0) < s.map(20.0),
        "larger values sit higher up (smaller pixel y)"
    );
}

#[test]
fn empty_fit_is_an_error() {
    let err = LinearScale::fit(std::iter::empty::<f64>(), (0.0, 100.0));
    assert!(err.is_err(), "empty dataset must not yield a scale");
}

#[test]
fn padding_widens_domain_and_keeps_extremes_inside() {
    let s = LinearScale::fit([1994.0, 2016.0], (0.0, 100.0))
        .unwrap()
        .with_padding(1.0);
    assert_eq!(s.domain(), (1993.0, 2017.0));
    let px = s.map(1994.0);
    assert!(px > 0.0 && px < 100.0, "padded extreme sits inside the range");
}

#[test]
fn single_value_domain_stays_defined() {
    let s = LinearScale::fit([5.0], (0.0, 100.0)).unwrap();
    let px = s.map(5.0);
    assert!(px.is_finite());
    assert!((px - 50.0).abs() < 1.0, "lone value maps near the middle");
}

#[test]
fn including_anchors_bar_domain_at_zero() {
    let s = LinearScale::fit([200.0, 400.0], (100.0, 0.0))
        .unwrap()
        .including(0.0);
    assert_eq!(s.domain().0, 0.0);
    assert_eq!(s.map(0.0), 100.0, "zero maps onto the baseline");
}

#[test]
fn band_scale_lays_out_slots_within_range() {
    let s = BandScale::fit(4, (0.0, 100.0), 0.3).unwrap();
    assert_eq!(s.count(), 4);
    for i in 0..4 {
        let left = s.position(i);
        assert!(left >= 0.0);
        assert!(left + s.bandwidth() <= 100.0 + 1e-3);
    }
    assert!(s.position(1) > s.position(0), "slots are ordered");
    assert!(s.bandwidth() > 0.0);
}

#[test]
fn band_scale_empty_is_an_error() {
    assert!(BandScale::fit(0, (0.0, 100.0), 0.3).is_err());
}
