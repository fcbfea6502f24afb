//! Instrument Listings

use std::fmt;

/// Instrument class, one listing call per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    /// Shares.
    Share,
    /// Bonds.
    Bond,
    /// Exchange-traded funds.
    Etf,
    /// Currencies.
    Currency,
    /// Futures.
    Future,
}

impl InstrumentKind {
    /// Listing order used by the instruments sample.
    pub const ALL: [Self; 5] = [
        Self::Share,
        Self::Bond,
        Self::Etf,
        Self::Currency,
        Self::Future,
    ];

    /// Plural heading used in descriptions.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Share => "Shares",
            Self::Bond => "Bonds",
            Self::Etf => "Etfs",
            Self::Currency => "Currencies",
            Self::Future => "Futures",
        }
    }
}

/// Short summary of a listed instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentSummary {
    /// Instrument class.
    pub kind: InstrumentKind,
    /// FIGI.
    pub figi: String,
    /// Exchange ticker.
    pub ticker: String,
    /// Trading mode (board) code.
    pub class_code: String,
    /// Display name.
    pub name: String,
    /// Trading currency.
    pub currency: String,
    /// Lot size.
    pub lot: i32,
}

impl fmt::Display for InstrumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) figi={} class={} lot={}",
            self.ticker, self.name, self.figi, self.class_code, self.lot
        )
    }
}
