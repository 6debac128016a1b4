use chandra::ephemeris::{Ayanamsa, EphemerisEngine, EphemerisError};
use chandra::reading::moon_reading;
use chandra::vedic::{get_nakshatra_for_longitude, MoonPlacement};
use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct FixedEphemeris;

impl EphemerisEngine for FixedEphemeris {
    fn name(&self) -> &str {
        "fixed"
    }

    fn moon_longitude(&self, julian_day: f64) -> Result<f64, EphemerisError> {
        // ~13.18°/day mean motion keeps the classifier busy across segments
        Ok((julian_day * 13.176_396) % 360.0)
    }

    fn ayanamsa(&self, julian_day: f64, standard: Ayanamsa) -> Result<f64, EphemerisError> {
        Ok(chandra::ephemeris::precession::ayanamsa_degrees(standard, julian_day))
    }
}

fn bench_classification(c: &mut Criterion) {
    c.bench_function("get_nakshatra_for_longitude", |b| {
        b.iter(|| get_nakshatra_for_longitude(black_box(211.37)))
    });

    c.bench_function("moon_placement_from_longitudes", |b| {
        b.iter(|| {
            MoonPlacement::from_longitudes(
                black_box(2_451_545.0),
                black_box(223.32),
                Ayanamsa::Lahiri,
                black_box(23.857),
            )
        })
    });
}

fn bench_reading(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1988, 11, 3).unwrap();
    let time = NaiveTime::from_hms_opt(17, 42, 0).unwrap();
    let engine = FixedEphemeris;

    c.bench_function("moon_reading", |b| {
        b.iter(|| {
            moon_reading(
                black_box(date),
                black_box(time),
                black_box("+05:30"),
                Some(&engine),
                Ayanamsa::Lahiri,
            )
        })
    });
}

criterion_group!(benches, bench_classification, bench_reading);
criterion_main!(benches);
