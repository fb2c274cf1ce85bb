//! Public booking wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands outside the dashboard layout. The [`BookingWizard`] lives in a page
//! signal; every button funnels through [`apply`] so refused operations are
//! logged and surfaced the same way.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;
use scheduling::booking::{BookingError, BookingStep, BookingSummary, BookingWizard, Progress};
use scheduling::dates::format_weekday_short;
use scheduling::views::services::{categories, filter_by_category, qualified_staff};

use crate::app::{DirectoryHandle, Today};
use crate::components::avatar::Avatar;
use crate::util::format;

/// Run one wizard operation and record its outcome in `error`.
fn apply(
    wizard: RwSignal<BookingWizard>,
    error: RwSignal<Option<String>>,
    op: impl FnOnce(&mut BookingWizard) -> Result<(), BookingError>,
) {
    let mut outcome = Ok(());
    wizard.update(|w| outcome = op(w));
    match outcome {
        Ok(()) => error.set(None),
        Err(e) => {
            leptos::logging::warn!("booking step refused: {e}");
            error.set(Some(e.to_string()));
        }
    }
}

/// CSS modifier for one progress dot.
fn progress_class(progress: Progress) -> &'static str {
    match progress {
        Progress::Complete => "progress__dot progress__dot--complete",
        Progress::Current => "progress__dot progress__dot--current",
        Progress::Upcoming => "progress__dot progress__dot--upcoming",
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let Today(today) = expect_context::<Today>();
    let wizard = RwSignal::new(BookingWizard::new(today));
    let error = RwSignal::new(None::<String>);
    let step = Memo::new(move |_| wizard.with(BookingWizard::step));

    let progress = move || {
        let dots = wizard.with(BookingWizard::progress);
        dots.into_iter()
            .enumerate()
            .map(|(i, (_, state))| {
                let marker = if state == Progress::Complete { "✓".to_owned() } else { (i + 1).to_string() };
                view! {
                    <span class=progress_class(state)>{marker}</span>
                    {(i < 3)
                        .then(|| {
                            view! {
                                <span
                                    class="progress__link"
                                    class:progress__link--done={state == Progress::Complete}
                                ></span>
                            }
                        })}
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="booking">
            <header class="booking__header">
                <span class="brand-mark" aria-hidden="true"></span>
                <div>
                    <h1 class="booking__title">"BookIt Studio"</h1>
                    <p class="booking__subtitle">"Book your appointment"</p>
                </div>
            </header>
            <main class="booking__main">
                <div class="progress">{progress}</div>
                <Show when=move || error.get().is_some()>
                    <p class="booking__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || match step.get() {
                    BookingStep::Service => view! { <ServiceStep wizard error/> }.into_any(),
                    BookingStep::Staff => view! { <StaffStep wizard error/> }.into_any(),
                    BookingStep::DateTime => view! { <DateTimeStep wizard error/> }.into_any(),
                    BookingStep::Details => view! { <DetailsStep wizard error/> }.into_any(),
                    BookingStep::Confirm => view! { <ConfirmStep wizard error/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn BackButton(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <button
            class="btn btn--ghost booking__back"
            on:click=move |_| {
                wizard.update(BookingWizard::go_back);
                error.set(None);
            }
        >
            "‹ Back"
        </button>
    }
}

#[component]
fn ServiceStep(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let dir = directory.get();

    let sections = categories(dir.services())
        .into_iter()
        .map(|category| {
            let cards = filter_by_category(dir.services(), Some(category))
                .into_iter()
                .map(|service| {
                    let id = service.id.clone();
                    let handle = directory.clone();
                    view! {
                        <button
                            class="card booking-option"
                            on:click=move |_| {
                                let handle = handle.clone();
                                let id = id.clone();
                                apply(wizard, error, move |w| w.select_service(handle.get(), &id));
                            }
                        >
                            <div class="booking-option__body">
                                <h4 class="booking-option__name">{service.name.clone()}</h4>
                                {service
                                    .description
                                    .clone()
                                    .map(|d| view! { <p class="booking-option__description">{d}</p> })}
                                <p class="booking-option__meta">{format::duration(service.duration)}</p>
                            </div>
                            <p class="booking-option__price">{format::money(u64::from(service.price))}</p>
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <section class="booking__category">
                    <h3 class="booking__category-title">{category.to_owned()}</h3>
                    {cards}
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="booking__step">
            <h2 class="booking__step-title">"Select a Service"</h2>
            <p class="booking__step-hint">"Choose the service you'd like to book"</p>
            {sections}
        </div>
    }
}

#[component]
fn StaffStep(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let dir = directory.get();
    let service = wizard.with_untracked(|w| w.service_id().and_then(|id| dir.service(id)).cloned());
    let service_name = service.as_ref().map(|s| s.name.clone()).unwrap_or_default();

    let options = service
        .as_ref()
        .map(|service| {
            qualified_staff(dir, service)
                .into_iter()
                .map(|member| {
                    let id = member.id.clone();
                    let handle = directory.clone();
                    view! {
                        <button
                            class="card booking-option"
                            on:click=move |_| {
                                let handle = handle.clone();
                                let id = id.clone();
                                apply(wizard, error, move |w| w.select_staff(handle.get(), &id));
                            }
                        >
                            <Avatar
                                name=member.name.clone()
                                src=member.avatar.clone()
                                color=Some(member.color.clone())
                                large=true
                            />
                            <div class="booking-option__body">
                                <h4 class="booking-option__name">{member.name.clone()}</h4>
                                <p class="booking-option__meta">{member.role.clone()}</p>
                            </div>
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    view! {
        <div class="booking__step">
            <BackButton wizard error/>
            <h2 class="booking__step-title">"Choose Your Stylist"</h2>
            <p class="booking__step-hint">{format!("Select who you'd like to see for {service_name}")}</p>
            <div class="booking__options">{options}</div>
        </div>
    }
}

#[component]
fn DateTimeStep(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    let Today(today) = expect_context::<Today>();

    let days = move || {
        let (week, selected) = wizard.with(|w| (w.week_days(), w.date()));
        week.into_iter()
            .map(|day| {
                view! {
                    <button
                        class="day-picker__day"
                        class:day-picker__day--selected={selected == Some(day)}
                        class:day-picker__day--today={day == today && selected.is_none()}
                        on:click=move |_| apply(wizard, error, |w| w.select_date(day))
                    >
                        <span class="day-picker__weekday">{format_weekday_short(day)}</span>
                        <span class="day-picker__date">{day.day()}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let slots = move || {
        let (slots, selected) = wizard.with(|w| (w.slots(), w.time()));
        slots
            .into_iter()
            .map(|slot| {
                view! {
                    <button
                        class="slot"
                        class:slot--selected={selected == Some(slot)}
                        on:click=move |_| apply(wizard, error, |w| w.select_time(slot))
                    >
                        {slot.to_string()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="booking__step">
            <BackButton wizard error/>
            <h2 class="booking__step-title">"Pick a Date & Time"</h2>
            <p class="booking__step-hint">"When would you like to visit?"</p>
            <div class="week-nav">
                <button class="btn btn--outline" aria-label="Previous week" on:click=move |_| wizard.update(BookingWizard::prev_week)>
                    "‹"
                </button>
                <span class="week-nav__title">{move || wizard.with(BookingWizard::week_title)}</span>
                <button class="btn btn--outline" aria-label="Next week" on:click=move |_| wizard.update(BookingWizard::next_week)>
                    "›"
                </button>
            </div>
            <div class="day-picker">{days}</div>
            <Show when=move || wizard.with(|w| w.date().is_some())>
                <h3 class="booking__slots-title">"Available Times"</h3>
                <div class="slots">{slots}</div>
            </Show>
            <Show when=move || wizard.with(BookingWizard::can_continue)>
                <button
                    class="btn btn--primary btn--block"
                    on:click=move |_| apply(wizard, error, BookingWizard::continue_to_details)
                >
                    "Continue"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let summary = move || wizard.with(|w| w.summary(directory.get()));

    view! {
        <div class="booking__step">
            <BackButton wizard error/>
            <h2 class="booking__step-title">"Your Details"</h2>
            <p class="booking__step-hint">"Please enter your contact information"</p>
            <div class="card booking__form">
                <label class="field">
                    <span class="field__label">"Full Name"</span>
                    <input
                        class="input"
                        placeholder="John Doe"
                        prop:value=move || wizard.with(|w| w.contact().name.clone())
                        on:input=move |ev| wizard.update(|w| w.contact_mut().name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="input"
                        type="email"
                        placeholder="john@example.com"
                        prop:value=move || wizard.with(|w| w.contact().email.clone())
                        on:input=move |ev| wizard.update(|w| w.contact_mut().email = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Phone"</span>
                    <input
                        class="input"
                        type="tel"
                        placeholder="+1 (555) 000-0000"
                        prop:value=move || wizard.with(|w| w.contact().phone.clone())
                        on:input=move |ev| wizard.update(|w| w.contact_mut().phone = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Notes (optional)"</span>
                    <textarea
                        class="input"
                        prop:value=move || wizard.with(|w| w.contact().notes.clone())
                        on:input=move |ev| wizard.update(|w| w.contact_mut().notes = event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
            {move || view! { <SummaryCard summary=summary()/> }}
            <button
                class="btn btn--primary btn--block"
                prop:disabled=move || !wizard.with(|w| w.contact().is_complete())
                on:click=move |_| apply(wizard, error, BookingWizard::submit)
            >
                "Confirm Booking"
            </button>
        </div>
    }
}

#[component]
fn ConfirmStep(wizard: RwSignal<BookingWizard>, error: RwSignal<Option<String>>) -> impl IntoView {
    let directory = expect_context::<DirectoryHandle>();
    let summary = wizard.with_untracked(|w| w.summary(directory.get()));
    let email = summary.email.clone();

    view! {
        <div class="booking__step booking__confirm">
            <span class="booking__check" aria-hidden="true">"✓"</span>
            <h2 class="booking__step-title">"Booking Confirmed!"</h2>
            <p class="booking__step-hint">
                {format!("Your appointment has been booked successfully. We've sent a confirmation email to {email}")}
            </p>
            <SummaryCard summary/>
            <button class="btn btn--secondary" on:click=move |_| apply(wizard, error, BookingWizard::restart)>
                "Book Another Appointment"
            </button>
        </div>
    }
}

/// Rows of the booking summary, as `(label, value)` pairs.
fn summary_rows(summary: &BookingSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Service", summary.service_name.clone().unwrap_or_default()),
        ("Stylist", summary.staff_name.clone().unwrap_or_default()),
        ("Date", summary.date_label.clone().unwrap_or_default()),
        ("Time", summary.time.map(|t| t.to_string()).unwrap_or_default()),
        ("Duration", summary.duration.map(format::duration).unwrap_or_default()),
        ("Total", summary.price.map(|p| format::money(u64::from(p))).unwrap_or_default()),
    ]
}

#[component]
fn SummaryCard(summary: BookingSummary) -> impl IntoView {
    let rows = summary_rows(&summary)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="summary__row">
                    <span class="summary__label">{label}</span>
                    <span class="summary__value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <div class="card summary">
            <h3 class="summary__title">"Booking Summary"</h3>
            {rows}
        </div>
    }
}
