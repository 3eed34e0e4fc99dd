//! # monthgrid-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, sized for a
//! month picker: months, dates, weekdays and the week-start convention.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Month (year, index 0..=11)"] -->|".first_day()"| B["CalendarDate"]
//!     B -->|".weekday()"| C["Weekday (1=Sun..7=Sat)"]
//!     A -->|".days()"| D["28..=31"]
//!     A -->|".checked_add_months()"| A
//!     E["WeekStart"] -->|".first_day()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use monthgrid_calendar::{CalendarDate, Month, Weekday};
//!
//! let feb = Month::new(2024, 1).unwrap(); // zero-based index: February
//! assert_eq!(feb.days(), 29);
//! assert_eq!(feb.first_day().weekday(), Weekday::Thursday);
//!
//! let date = CalendarDate::new(2024, 2, 15).unwrap();
//! assert_eq!(date.month(), feb);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Year/month value, month lengths, navigation |
//! | `date` | Validated calendar date |
//! | `weekday` | Weekday ordinals and the week-start convention |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod weekday;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use month::{Month, days_in_month, is_leap_year};
pub use weekday::{WeekStart, Weekday};
