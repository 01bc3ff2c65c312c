pub mod country;
pub mod visit;

pub use country::{Country, CountryDirectory, CountryTable};
pub use visit::{parse_calendar_day, CountryVisit, InvalidRecord, LedgerDocument, VisitId};
