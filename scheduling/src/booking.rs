//! Public booking wizard.
//!
//! DESIGN
//! ======
//! The wizard is a linear state machine over [`BookingStep`]. Every step change
//! goes through [`BookingWizard::transition`], which checks the move against
//! [`TRANSITIONS`]. Operations validate first and mutate second, so a returned
//! [`BookingError`] always leaves the wizard exactly as it was.
//!
//! Selections are stored by id and resolved against a [`Directory`] when the
//! summary is built. Confirmation is simulated: nothing is written back.
//!
//! ```text
//!   Service ──select_service──▶ Staff ──select_staff──▶ DateTime
//!      ▲                          │                       │
//!      │                       go_back            continue_to_details
//!      │                          ▼                       ▼
//!      └────────restart──────  Confirm ◀────submit────  Details
//! ```

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::fmt;

use time::Date;

use crate::clock::{ClockTime, booking_slots};
use crate::dates::{add_weeks, format_month_year, format_short_day, start_of_week, week_days};
use crate::directory::Directory;

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BookingStep {
    #[default]
    Service,
    Staff,
    DateTime,
    Details,
    Confirm,
}

/// Every permitted step change, forward moves first.
pub const TRANSITIONS: [(BookingStep, BookingStep); 8] = [
    (BookingStep::Service, BookingStep::Staff),
    (BookingStep::Staff, BookingStep::DateTime),
    (BookingStep::DateTime, BookingStep::Details),
    (BookingStep::Details, BookingStep::Confirm),
    (BookingStep::Confirm, BookingStep::Service),
    (BookingStep::Staff, BookingStep::Service),
    (BookingStep::DateTime, BookingStep::Staff),
    (BookingStep::Details, BookingStep::DateTime),
];

impl BookingStep {
    /// Steps shown in the progress indicator. `Confirm` has no dot.
    pub const PROGRESS: [Self; 4] = [Self::Service, Self::Staff, Self::DateTime, Self::Details];

    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        TRANSITIONS.contains(&(self, to))
    }

    /// Inverse of the forward move into this step. `None` on `Service`
    /// and `Confirm`.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Staff => Some(Self::Service),
            Self::DateTime => Some(Self::Staff),
            Self::Details => Some(Self::DateTime),
            Self::Service | Self::Confirm => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Staff => "staff",
            Self::DateTime => "datetime",
            Self::Details => "details",
            Self::Confirm => "confirm",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Self::Service => 0,
            Self::Staff => 1,
            Self::DateTime => 2,
            Self::Details => 3,
            Self::Confirm => 4,
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one progress dot relative to the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Complete,
    Current,
    Upcoming,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Why a wizard operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The operation is not available on the current step.
    #[error("cannot {action} on the {step} step")]
    WrongStep { action: &'static str, step: BookingStep },

    #[error("unknown service {0:?}")]
    UnknownService(String),

    #[error("unknown team member {0:?}")]
    UnknownTeamMember(String),

    #[error("team member {team_member_id:?} does not perform service {service_id:?}")]
    NotQualified { service_id: String, team_member_id: String },

    /// `continue_to_details` without both a date and a time.
    #[error("pick a date and a time before continuing")]
    MissingDateTime,

    /// `submit` with an empty required contact field.
    #[error("{0} is required")]
    MissingContact(&'static str),

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: BookingStep, to: BookingStep },
}

// =============================================================================
// CONTACT FORM
// =============================================================================

/// Customer details collected on the details step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Optional free text.
    pub notes: String,
}

impl ContactForm {
    /// First required field that is empty, by display label. Whitespace
    /// counts as content.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [("name", &self.name), ("email", &self.email), ("phone", &self.phone)]
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(label, _)| label)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Resolved selections for the summary and confirmation cards. Fields whose
/// selection is unset or dangling are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub service_name: Option<String>,
    pub staff_name: Option<String>,
    /// `Fri, Mar 8`
    pub date_label: Option<String>,
    pub time: Option<ClockTime>,
    pub duration: Option<u16>,
    pub price: Option<u32>,
    pub email: String,
}

// =============================================================================
// WIZARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWizard {
    step: BookingStep,
    service_id: Option<String>,
    staff_id: Option<String>,
    date: Option<Date>,
    time: Option<ClockTime>,
    contact: ContactForm,
    week_start: Date,
}

impl BookingWizard {
    /// Fresh wizard on the service step, date picker on the week of `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            step: BookingStep::Service,
            service_id: None,
            staff_id: None,
            date: None,
            time: None,
            contact: ContactForm::default(),
            week_start: start_of_week(today),
        }
    }

    #[must_use]
    pub fn step(&self) -> BookingStep {
        self.step
    }

    #[must_use]
    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    #[must_use]
    pub fn staff_id(&self) -> Option<&str> {
        self.staff_id.as_deref()
    }

    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> Option<ClockTime> {
        self.time
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Form inputs write straight through; validation happens on submit.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    #[must_use]
    pub fn week_start(&self) -> Date {
        self.week_start
    }

    /// The seven days offered by the date picker.
    #[must_use]
    pub fn week_days(&self) -> [Date; 7] {
        week_days(self.week_start)
    }

    /// `March 2024`, taken from the week's Monday.
    #[must_use]
    pub fn week_title(&self) -> String {
        format_month_year(self.week_start)
    }

    pub fn prev_week(&mut self) {
        self.week_start = add_weeks(self.week_start, -1);
    }

    pub fn next_week(&mut self) {
        self.week_start = add_weeks(self.week_start, 1);
    }

    /// Offered time slots. Every slot is always available.
    #[must_use]
    pub fn slots(&self) -> Vec<ClockTime> {
        booking_slots()
    }

    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> [(BookingStep, Progress); 4] {
        let current = self.step.ordinal();
        BookingStep::PROGRESS.map(|step| {
            let state = match step.ordinal().cmp(&current) {
                std::cmp::Ordering::Less => Progress::Complete,
                std::cmp::Ordering::Equal => Progress::Current,
                std::cmp::Ordering::Greater => Progress::Upcoming,
            };
            (step, state)
        })
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Choose a service and advance to staff selection. Any previously chosen
    /// staff member is dropped.
    ///
    /// # Errors
    ///
    /// [`BookingError::WrongStep`] off the service step and
    /// [`BookingError::UnknownService`] for an id the directory lacks.
    pub fn select_service<D: Directory + ?Sized>(
        &mut self,
        directory: &D,
        service_id: &str,
    ) -> Result<(), BookingError> {
        self.expect_step(BookingStep::Service, "select a service")?;
        if directory.service(service_id).is_none() {
            return self.refuse(BookingError::UnknownService(service_id.to_owned()));
        }
        self.transition(BookingStep::Staff)?;
        self.service_id = Some(service_id.to_owned());
        self.staff_id = None;
        Ok(())
    }

    /// Choose a qualified team member and advance to date/time selection.
    ///
    /// # Errors
    ///
    /// [`BookingError::WrongStep`] off the staff step,
    /// [`BookingError::UnknownTeamMember`] for an id the directory lacks, and
    /// [`BookingError::NotQualified`] when the member does not perform the
    /// selected service.
    pub fn select_staff<D: Directory + ?Sized>(
        &mut self,
        directory: &D,
        team_member_id: &str,
    ) -> Result<(), BookingError> {
        self.expect_step(BookingStep::Staff, "select a team member")?;
        let service_id = self.service_id.clone().unwrap_or_default();
        let Some(service) = directory.service(&service_id) else {
            return self.refuse(BookingError::UnknownService(service_id));
        };
        if directory.team_member(team_member_id).is_none() {
            return self.refuse(BookingError::UnknownTeamMember(team_member_id.to_owned()));
        }
        if !service.is_performed_by(team_member_id) {
            return self.refuse(BookingError::NotQualified {
                service_id,
                team_member_id: team_member_id.to_owned(),
            });
        }
        self.transition(BookingStep::DateTime)?;
        self.staff_id = Some(team_member_id.to_owned());
        Ok(())
    }

    /// # Errors
    ///
    /// [`BookingError::WrongStep`] off the date/time step.
    pub fn select_date(&mut self, date: Date) -> Result<(), BookingError> {
        self.expect_step(BookingStep::DateTime, "pick a date")?;
        self.date = Some(date);
        Ok(())
    }

    /// # Errors
    ///
    /// [`BookingError::WrongStep`] off the date/time step.
    pub fn select_time(&mut self, time: ClockTime) -> Result<(), BookingError> {
        self.expect_step(BookingStep::DateTime, "pick a time")?;
        self.time = Some(time);
        Ok(())
    }

    /// # Errors
    ///
    /// [`BookingError::MissingDateTime`] unless both a date and a time are
    /// selected.
    pub fn continue_to_details(&mut self) -> Result<(), BookingError> {
        self.expect_step(BookingStep::DateTime, "continue")?;
        if !self.can_continue() {
            return self.refuse(BookingError::MissingDateTime);
        }
        self.transition(BookingStep::Details)
    }

    /// Simulated confirmation. No request leaves the client.
    ///
    /// # Errors
    ///
    /// [`BookingError::MissingContact`] naming the first empty required field.
    pub fn submit(&mut self) -> Result<(), BookingError> {
        self.expect_step(BookingStep::Details, "confirm the booking")?;
        if let Some(field) = self.contact.missing_field() {
            return self.refuse(BookingError::MissingContact(field));
        }
        self.transition(BookingStep::Confirm)?;
        tracing::info!(
            service = ?self.service_id,
            staff = ?self.staff_id,
            date = ?self.date,
            time = ?self.time.map(|t| t.to_string()),
            "booking confirmed"
        );
        Ok(())
    }

    /// Step back one screen, keeping every selection. Does nothing on the
    /// service and confirm steps.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// "Book another appointment": clear every selection and the form.
    ///
    /// # Errors
    ///
    /// [`BookingError::WrongStep`] anywhere but the confirm step.
    pub fn restart(&mut self) -> Result<(), BookingError> {
        self.expect_step(BookingStep::Confirm, "start a new booking")?;
        self.transition(BookingStep::Service)?;
        self.service_id = None;
        self.staff_id = None;
        self.date = None;
        self.time = None;
        self.contact = ContactForm::default();
        Ok(())
    }

    /// Resolve the current selections for display.
    #[must_use]
    pub fn summary<D: Directory + ?Sized>(&self, directory: &D) -> BookingSummary {
        let service = self.service_id.as_deref().and_then(|id| directory.service(id));
        let staff = self.staff_id.as_deref().and_then(|id| directory.team_member(id));
        BookingSummary {
            service_name: service.map(|s| s.name.clone()),
            staff_name: staff.map(|t| t.name.clone()),
            date_label: self.date.map(format_short_day),
            time: self.time,
            duration: service.map(|s| s.duration),
            price: service.map(|s| s.price),
            email: self.contact.email.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn expect_step(&self, step: BookingStep, action: &'static str) -> Result<(), BookingError> {
        if self.step == step {
            return Ok(());
        }
        self.refuse(BookingError::WrongStep { action, step: self.step })
    }

    fn transition(&mut self, to: BookingStep) -> Result<(), BookingError> {
        if !self.step.can_transition_to(to) {
            return self.refuse(BookingError::InvalidTransition { from: self.step, to });
        }
        tracing::debug!(from = %self.step, %to, "booking step");
        self.step = to;
        Ok(())
    }

    fn refuse(&self, error: BookingError) -> Result<(), BookingError> {
        tracing::debug!(step = %self.step, %error, "booking transition blocked");
        Err(error)
    }
}
