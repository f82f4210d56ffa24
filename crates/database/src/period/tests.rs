use time::{Time, macros::time};

use crate::{
    period::{Period, at_afternoon, at_morning},
    talk::Talk,
};

fn talk(id: i32, title: &str, start_time: Time) -> Talk {
    Talk {
        id,
        title: title.to_string(),
        description: String::new(),
        start_time,
    }
}

fn titles<'a>(talks: impl Iterator<Item = &'a Talk>) -> Vec<&'a str> {
    talks.map(|talk| talk.title.as_str()).collect()
}

#[test]
fn split_morning_and_afternoon() {
    let talks = vec![
        talk(1, "Morning Talk", time!(10:00)),
        talk(2, "Afternoon Talk", time!(12:00)),
    ];

    assert_eq!(titles(at_morning(&talks)), ["Morning Talk"]);
    assert_eq!(titles(at_afternoon(&talks)), ["Afternoon Talk"]);
}

#[test]
fn noon_belongs_to_afternoon() {
    assert_eq!(Period::of(time!(11:59:59.999)), Period::Morning);
    assert_eq!(Period::of(time!(12:00)), Period::Afternoon);
    assert_eq!(Period::of(time!(0:00)), Period::Morning);
    assert_eq!(Period::of(time!(23:59)), Period::Afternoon);
}

#[test]
fn keep_relative_order() {
    let talks = vec![
        talk(1, "b", time!(14:00)),
        talk(2, "a", time!(9:30)),
        talk(3, "d", time!(12:00)),
        talk(4, "c", time!(8:00)),
        talk(5, "e", time!(11:00)),
    ];

    assert_eq!(titles(at_morning(&talks)), ["a", "c", "e"]);
    assert_eq!(titles(at_afternoon(&talks)), ["b", "d"]);
}

#[test]
fn partitions_are_disjoint_and_complete() {
    let talks = (0..24 * 4)
        .map(|quarter| {
            let start_time = Time::from_hms((quarter / 4) as u8, ((quarter % 4) * 15) as u8, 0).unwrap();
            talk(quarter, &quarter.to_string(), start_time)
        })
        .collect::<Vec<_>>();

    let morning = at_morning(&talks).map(|talk| talk.id).collect::<Vec<_>>();
    let afternoon = at_afternoon(&talks).map(|talk| talk.id).collect::<Vec<_>>();

    assert_eq!(morning.len() + afternoon.len(), talks.len());
    assert!(morning.iter().all(|id| !afternoon.contains(id)));

    let mut all = morning.into_iter().chain(afternoon).collect::<Vec<_>>();
    all.sort();
    assert_eq!(all, talks.iter().map(|talk| talk.id).collect::<Vec<_>>());
}

#[test]
fn consume_owned_talks() {
    let talks = vec![talk(1, "late", time!(18:00)), talk(2, "early", time!(7:00))];

    let morning = at_morning(talks.clone()).collect::<Vec<_>>();
    let afternoon = at_afternoon(talks).collect::<Vec<_>>();

    assert_eq!(morning, [talk(2, "early", time!(7:00))]);
    assert_eq!(afternoon, [talk(1, "late", time!(18:00))]);
}

#[test]
fn empty_input() {
    let talks: Vec<Talk> = Vec::new();

    assert_eq!(at_morning(&talks).count(), 0);
    assert_eq!(at_afternoon(&talks).count(), 0);
}
