//! Profile-following renderer integration tests.

use trailtone_core::{
    profile_following, profile_to_modulated_audio, render::profile_cycles, RenderOptions,
    Signal, Tune, WavResult,
};

/// A valley crossing: down from the trailhead, across the floor, back up.
fn valley_profile() -> (Vec<f64>, Vec<f64>) {
    let distance: Vec<f64> = (0..=60).map(|i| f64::from(i) * 150.0).collect();
    let elevation: Vec<f64> = (0..=60)
        .map(|i| {
            let t = f64::from(i) / 60.0;
            1200.0 - 500.0 * (std::f64::consts::PI * t).sin()
        })
        .collect();
    (distance, elevation)
}

fn valley_signal() -> Signal {
    let (distance, elevation) = valley_profile();
    Signal::from_profile(&distance, &elevation, 0.0).unwrap()
}

#[test]
fn test_pitch_follows_the_valley() {
    let options = RenderOptions {
        tune: Tune::Frequency(440.0),
        seconds: 2.0,
        ..RenderOptions::default()
    };
    let cycles = profile_cycles(&valley_signal(), &options).unwrap();
    let freqs = cycles.frequencies().to_vec();

    // Descending into the valley the pitch drops below the base, and the
    // lowest frequency sits near one octave down.
    let lowest = freqs.iter().copied().fold(f64::INFINITY, f64::min);
    assert!(lowest < 260.0, "lowest frequency {lowest}");
    assert!(lowest > 200.0, "lowest frequency {lowest}");

    // Trailhead and valley rim sit at the top of the profile: base * 2.
    let first = freqs[0];
    assert!(first > 800.0 && first < 900.0, "first frequency {first}");
}

#[test]
fn test_modulated_cycles_have_variable_length() {
    let options = RenderOptions {
        tune: Tune::Frequency(440.0),
        seconds: 1.0,
        ..RenderOptions::default()
    };
    let lengths: Vec<usize> = profile_cycles(&valley_signal(), &options)
        .unwrap()
        .map(|cycle| cycle.unwrap().len())
        .collect();

    let min = *lengths.iter().min().unwrap();
    let max = *lengths.iter().max().unwrap();
    assert!(max > min, "expected variable cycle lengths, all were {min}");

    // Longest cycle belongs to the lowest pitch, near an octave below base.
    assert!(max > 150, "max cycle length {max}");
    assert!(min < 70, "min cycle length {min}");
}

#[test]
fn test_concatenation_matches_cycle_sum() {
    let options = RenderOptions {
        tune: Tune::Frequency(330.0),
        seconds: 0.5,
        ..RenderOptions::default()
    };
    let signal = valley_signal();

    let total: usize = profile_cycles(&signal, &options)
        .unwrap()
        .map(|cycle| cycle.unwrap().len())
        .sum();
    let rendered = profile_following(&signal, &options).unwrap();

    assert_eq!(rendered.len(), total);
    assert_eq!(rendered.sample_rate, 44100);
}

#[test]
fn test_modulated_render_is_deterministic() {
    let (distance, elevation) = valley_profile();
    let options = RenderOptions {
        seconds: 0.5,
        ..RenderOptions::default()
    };

    let a = profile_to_modulated_audio(&distance, &elevation, &options).unwrap();
    let b = profile_to_modulated_audio(&distance, &elevation, &options).unwrap();
    assert_eq!(
        WavResult::from_rendered(&a).pcm_hash,
        WavResult::from_rendered(&b).pcm_hash
    );
}

#[test]
fn test_clipping_safe_output() {
    let (distance, elevation) = valley_profile();
    let options = RenderOptions {
        seconds: 1.0,
        ..RenderOptions::default()
    };
    let rendered = profile_to_modulated_audio(&distance, &elevation, &options).unwrap();

    assert!(rendered.samples.iter().all(|s| *s >= -32767 && *s <= 32767));
}

#[test]
fn test_duration_is_approximate_but_close() {
    let (distance, elevation) = valley_profile();
    let options = RenderOptions {
        tune: Tune::Frequency(440.0),
        seconds: 5.0,
        ..RenderOptions::default()
    };
    let rendered = profile_to_modulated_audio(&distance, &elevation, &options).unwrap();

    // Per-cycle modulation warps the total length: cycles rendered below
    // the base pitch are longer than the base cycle. The result stays in
    // the right ballpark but is not sample-exact.
    let duration = rendered.duration_seconds();
    assert!(duration > 4.0, "duration {duration}");
    assert!(duration < 12.0, "duration {duration}");
}
