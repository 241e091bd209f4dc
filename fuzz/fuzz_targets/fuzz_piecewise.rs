#![no_main]

use libfuzzer_sys::fuzz_target;
use swiperow::interpolate::{Piecewise, clamp, ramp};

fuzz_target!(|input: (Vec<(f64, f64)>, f64)| {
    let (points, x) = input;
    if points.len() > 64 {
        return;
    }

    // Construction and evaluation must never panic.
    let curve = Piecewise::new(&points);
    let y = curve.eval(x);

    // Finite breakpoints and a finite input in their hull give a finite output.
    if x.is_finite() && points.iter().all(|(a, b)| a.is_finite() && b.is_finite()) {
        let lo = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        if x >= lo && x <= hi && points.iter().all(|p| p.0.abs() < 1e12 && p.1.abs() < 1e12) {
            assert!(y.is_finite(), "non-finite output {y} at {x}");
        }
    }

    let c = clamp(x, -1.0, 1.0);
    assert!((-1.0..=1.0).contains(&c));
    let r = ramp(x, 0.0, 64.0, 0.0, 1.0);
    assert!((0.0..=1.0).contains(&r));
});
