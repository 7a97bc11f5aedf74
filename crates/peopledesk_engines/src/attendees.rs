#![forbid(unsafe_code)]

//! Attendee counts for newly scheduled training sessions.
//!
//! No registration system exists yet, so scheduled sessions get a placeholder
//! count. The source is injected so tests and demos can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use peopledesk_kernel_contracts::training::{ATTENDEE_COUNT_MAX_EXCLUSIVE, ATTENDEE_COUNT_MIN};
use peopledesk_kernel_contracts::ContractViolation;

pub trait AttendeeCountSource: Send {
    fn next_count(&mut self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAttendees(pub u32);

impl AttendeeCountSource for FixedAttendees {
    fn next_count(&mut self) -> u32 {
        self.0
    }
}

/// Uniform over `[5, 25)` from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAttendees;

impl AttendeeCountSource for RandomAttendees {
    fn next_count(&mut self) -> u32 {
        rand::thread_rng().gen_range(ATTENDEE_COUNT_MIN..ATTENDEE_COUNT_MAX_EXCLUSIVE)
    }
}

#[derive(Debug, Clone)]
pub struct SeededAttendees {
    rng: StdRng,
}

impl SeededAttendees {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AttendeeCountSource for SeededAttendees {
    fn next_count(&mut self) -> u32 {
        self.rng.gen_range(ATTENDEE_COUNT_MIN..ATTENDEE_COUNT_MAX_EXCLUSIVE)
    }
}

/// Parsed form of an attendee source setting: `random`, `fixed:<n>` or `seeded:<u64>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttendeeSourceSpec {
    #[default]
    Random,
    Fixed(u32),
    Seeded(u64),
}

impl AttendeeSourceSpec {
    pub fn parse(raw: &str) -> Result<Self, ContractViolation> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        let invalid = ContractViolation::InvalidValue {
            field: "attendee_source",
            reason: "must be random, fixed:<n> or seeded:<u64>",
        };
        match raw.split_once(':') {
            Some((kind, n)) if kind.eq_ignore_ascii_case("fixed") => {
                n.trim().parse().map(Self::Fixed).map_err(|_| invalid)
            }
            Some((kind, seed)) if kind.eq_ignore_ascii_case("seeded") => {
                seed.trim().parse().map(Self::Seeded).map_err(|_| invalid)
            }
            _ => Err(invalid),
        }
    }

    pub fn build(self) -> Box<dyn AttendeeCountSource> {
        match self {
            Self::Random => Box::new(RandomAttendees),
            Self::Fixed(n) => Box::new(FixedAttendees(n)),
            Self::Seeded(seed) => Box::new(SeededAttendees::new(seed)),
        }
    }
}
