use super::*;

#[test]
fn curves_hit_endpoints() {
    let spring = Ease::Spring(Spring::new(100.0, 0.8));
    for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic, spring] {
        assert_eq!(ease.apply(0.0, 0.6), 0.0, "{ease:?}");
        assert!((ease.apply(1.0, 0.6) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn out_curves_lead_linear() {
    assert!(Ease::OutQuad.apply(0.3, 1.0) > 0.3);
    assert!(Ease::OutCubic.apply(0.3, 1.0) > Ease::OutQuad.apply(0.3, 1.0));
}

#[test]
fn spring_is_monotone_inside_window() {
    let s = Spring::new(140.0, 1.0);
    let window = 0.5;
    let mut prev = 0.0;
    for i in 0..=60 {
        let secs = window * f64::from(i) / 60.0;
        let v = s.normalized(secs, window);
        assert!(v >= prev, "spring regressed at {secs}: {v} < {prev}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
    assert_eq!(s.normalized(window, window), 1.0);
    assert_eq!(s.normalized(window * 3.0, window), 1.0);
}

#[test]
fn spring_rejects_non_positive_params() {
    assert!(Spring::new(0.0, 1.0).validate().is_err());
    assert!(Spring::new(100.0, -1.0).validate().is_err());
    assert!(Ease::Spring(Spring::new(100.0, 1.0)).validate().is_ok());
}

#[test]
fn ease_json_shape() {
    let e: Ease = serde_json::from_str(r#"{"kind":"spring","stiffness":95.0}"#).unwrap();
    assert_eq!(e, Ease::Spring(Spring::new(95.0, 1.0)));
    let e: Ease = serde_json::from_str(r#"{"kind":"out_cubic"}"#).unwrap();
    assert_eq!(e, Ease::OutCubic);
}
