//! Splits talks into the morning and afternoon sessions of the day.

use time::{Time, macros::time};

/// Talks starting at or after this time belong to the afternoon.
pub const NOON: Time = time!(12:00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub fn of(time: Time) -> Self {
        if time < NOON {
            Self::Morning
        } else {
            Self::Afternoon
        }
    }
}

pub trait StartTime {
    fn start_time(&self) -> Time;
}

impl<T: StartTime + ?Sized> StartTime for &T {
    fn start_time(&self) -> Time {
        (**self).start_time()
    }
}

/// Talks starting strictly before [`NOON`], in input order.
pub fn at_morning<I>(talks: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: StartTime,
{
    within(talks, Period::Morning)
}

/// Talks starting at [`NOON`] or later, in input order.
pub fn at_afternoon<I>(talks: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: StartTime,
{
    within(talks, Period::Afternoon)
}

fn within<I>(talks: I, period: Period) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: StartTime,
{
    talks.into_iter().filter(move |talk| Period::of(talk.start_time()) == period)
}

#[cfg(test)]
mod tests;
