//! Local wall-clock access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser reads its own local time through `js_sys::Date`. The server
//! uses the host's local offset when it can determine one and UTC otherwise.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use leptos::prelude::*;
use scheduling::ClockTime;
use time::Date;

/// Today's local date.
pub fn today() -> Date {
    local_now().0
}

/// Current local wall-clock time, minute precision.
pub fn now() -> ClockTime {
    local_now().1
}

/// Current time as a signal, refreshed once a minute while the calling
/// component stays mounted.
pub fn use_minute_clock() -> ReadSignal<ClockTime> {
    let (current, set_current) = signal(now());
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(60)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                set_current.set(now());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_current;
    current
}

#[cfg(feature = "hydrate")]
fn local_now() -> (Date, ClockTime) {
    let js = js_sys::Date::new_0();
    let date = i32::try_from(js.get_full_year())
        .ok()
        .zip(u8::try_from(js.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok()))
        .zip(u8::try_from(js.get_date()).ok())
        .and_then(|((year, month), day)| Date::from_calendar_date(year, month, day).ok())
        .unwrap_or(time::OffsetDateTime::UNIX_EPOCH.date());
    let hour = u8::try_from(js.get_hours()).unwrap_or(0);
    let minute = u8::try_from(js.get_minutes()).unwrap_or(0);
    let clock = ClockTime::from_hm(hour, minute).unwrap_or(ClockTime::from_minutes(0));
    (date, clock)
}

#[cfg(not(feature = "hydrate"))]
fn local_now() -> (Date, ClockTime) {
    #[cfg(feature = "ssr")]
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    #[cfg(not(feature = "ssr"))]
    let now = time::OffsetDateTime::now_utc();
    (now.date(), ClockTime::from(now.time()))
}
