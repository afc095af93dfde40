//! Sample data generator
//!
//! Produces a plausible roster for local use: random athletes, the fixed
//! event programme, and up to two results per athlete in events of their
//! own sex and grade. Takes any [`Rng`] so tests can seed it.

use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};

use crate::{
    constants::{SEED_EVENTS_PER_ATHLETE, houses},
    models::{Athlete, Event, EventStatus, Grade, NewResult, ResultStatus, Sex},
};

/// Event names, in programme order
pub const EVENT_NAMES: &[&str] = &[
    "60 meters",
    "100 meters",
    "200 meters",
    "400 meters",
    "800 meters",
    "1500 meters",
    "High Jump",
    "Long Jump",
    "Shot Put",
    "Javelin",
    "Softball",
];

/// (event, sex, grade) combinations that are not contested
const EXCLUDED: &[(&str, Sex, Grade)] = &[
    ("60 meters", Sex::Boys, Grade::A),
    ("60 meters", Sex::Boys, Grade::B),
    ("60 meters", Sex::Boys, Grade::C),
    ("60 meters", Sex::Girls, Grade::A),
    ("Javelin", Sex::Boys, Grade::C),
    ("Javelin", Sex::Girls, Grade::B),
    ("Javelin", Sex::Girls, Grade::C),
    ("Softball", Sex::Boys, Grade::A),
    ("Softball", Sex::Boys, Grade::B),
    ("Softball", Sex::Girls, Grade::A),
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Sam", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery", "Quinn",
    "Harper", "Rowan", "Emerson", "Skyler", "Dakota", "Reese", "Finley", "Hayden", "Kendall",
    "Logan", "Parker", "Sage", "Blake", "Cameron",
];

const LAST_NAMES: &[&str] = &[
    "Chan", "Smith", "Wong", "Patel", "Garcia", "Nguyen", "Brown", "Lee", "Okafor", "Kim",
    "Silva", "Muller", "Rossi", "Haddad", "Novak", "Ito", "Walker", "Singh", "Lopez", "Cohen",
];

/// Generated fixtures, ready for insertion
#[derive(Debug, Clone)]
pub struct SampleData {
    pub athletes: Vec<Athlete>,
    pub events: Vec<Event>,
    pub results: Vec<NewResult>,
}

/// Generate `athlete_count` athletes with their events and results
pub fn sample<R: Rng + ?Sized>(rng: &mut R, athlete_count: usize) -> SampleData {
    let athletes = sample_athletes(rng, athlete_count);
    let events = sample_events(rng);
    let results = sample_results(rng, &athletes, &events);

    SampleData {
        athletes,
        events,
        results,
    }
}

/// Random athletes with IDs `ATH001`, `ATH002`, ...
pub fn sample_athletes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Athlete> {
    (1..=count)
        .map(|i| Athlete {
            athlete_id: format!("ATH{i:03}"),
            name: random_name(rng),
            house: pick(rng, houses::ALL).to_string(),
            sex: *pick(rng, &Sex::ALL),
            grade: *pick(rng, &Grade::ALL),
        })
        .collect()
}

/// Every contested (event, sex, grade) with IDs `EV0001`, ... and a random status
pub fn sample_events<R: Rng + ?Sized>(rng: &mut R) -> Vec<Event> {
    let mut events = Vec::new();

    for name in EVENT_NAMES {
        for sex in Sex::ALL {
            for grade in Grade::ALL {
                if EXCLUDED.contains(&(*name, sex, grade)) {
                    continue;
                }
                events.push(Event {
                    event_id: format!("EV{:04}", events.len() + 1),
                    name: name.to_string(),
                    sex,
                    grade,
                    status: *pick(rng, &EventStatus::ALL),
                });
            }
        }
    }

    events
}

/// Enter each athlete in up to two matching events
pub fn sample_results<R: Rng + ?Sized>(
    rng: &mut R,
    athletes: &[Athlete],
    events: &[Event],
) -> Vec<NewResult> {
    let mut results = Vec::new();

    for athlete in athletes {
        let mut eligible: Vec<&Event> = events.iter().filter(|e| athlete.can_enter(e)).collect();
        eligible.shuffle(rng);

        for event in eligible.into_iter().take(SEED_EVENTS_PER_ATHLETE) {
            let (result, status) = if event.has_started() {
                let status = if rng.random_bool(0.5) {
                    ResultStatus::Completed
                } else {
                    ResultStatus::Disqualification
                };
                (Some(realistic_value(rng, &event.name)), status)
            } else {
                (None, ResultStatus::NotYetStart)
            };

            results.push(NewResult {
                athlete_id: athlete.athlete_id.clone(),
                event_id: event.event_id.clone(),
                result,
                status,
            });
        }
    }

    results
}

/// A value in a believable range for the event, to two decimals
pub fn realistic_value<R: Rng + ?Sized>(rng: &mut R, event_name: &str) -> f64 {
    let lowered = event_name.to_lowercase();

    let (low, high) = if lowered.contains("meters") {
        let distance: u32 = lowered
            .split_whitespace()
            .next()
            .and_then(|d| d.parse().ok())
            .unwrap_or(0);
        if distance >= 800 { (200.0, 600.0) } else { (10.0, 25.0) }
    } else if lowered.contains("jump") || lowered.contains("put") || lowered.contains("javelin") {
        (1.0, 15.0)
    } else {
        (10.0, 100.0)
    };

    (rng.random_range(low..high) * 100.0_f64).round() / 100.0
}

fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    // Only ever called with non-empty constant tables
    items.choose(rng).unwrap_or(&items[0])
}
