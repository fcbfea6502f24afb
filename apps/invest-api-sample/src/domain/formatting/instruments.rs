use std::fmt::Write;

use crate::domain::instruments::{InstrumentKind, InstrumentSummary};

/// Instruments listed per class in the description.
pub const INSTRUMENT_PREVIEW_LIMIT: usize = 5;

/// Listing of one instrument class.
#[derive(Debug, Clone)]
pub struct InstrumentGroup {
    /// Instrument class.
    pub kind: InstrumentKind,
    /// Every instrument returned for the class.
    pub instruments: Vec<InstrumentSummary>,
}

/// Render per-class counts with a short preview of each listing.
#[must_use]
pub fn format_instruments(groups: &[InstrumentGroup]) -> String {
    let mut out = String::from("\nInstruments:");
    for group in groups {
        let _ = write!(out, "\n{}: {}", group.kind.heading(), group.instruments.len());
        for instrument in group.instruments.iter().take(INSTRUMENT_PREVIEW_LIMIT) {
            let _ = write!(out, "\n  {instrument}");
        }
        let hidden = group
            .instruments
            .len()
            .saturating_sub(INSTRUMENT_PREVIEW_LIMIT);
        if hidden > 0 {
            let _ = write!(out, "\n  ... and {hidden} more");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(ticker: &str) -> InstrumentSummary {
        InstrumentSummary {
            kind: InstrumentKind::Share,
            figi: format!("FIGI-{ticker}"),
            ticker: ticker.to_string(),
            class_code: "TQBR".to_string(),
            name: format!("{ticker} name"),
            currency: "rub".to_string(),
            lot: 10,
        }
    }

    #[test]
    fn preview_is_capped() {
        let tickers = ["A", "B", "C", "D", "E", "F", "G"];
        let groups = vec![InstrumentGroup {
            kind: InstrumentKind::Share,
            instruments: tickers.iter().map(|t| share(t)).collect(),
        }];

        let out = format_instruments(&groups);

        assert!(out.starts_with("\nInstruments:\nShares: 7\n  A (A name) figi=FIGI-A class=TQBR lot=10"));
        assert!(out.contains("  E (E name)"));
        assert!(!out.contains("  F (F name)"));
        assert!(out.ends_with("\n  ... and 2 more"));
    }

    #[test]
    fn empty_group_shows_zero() {
        let groups = vec![InstrumentGroup {
            kind: InstrumentKind::Future,
            instruments: Vec::new(),
        }];

        assert_eq!(format_instruments(&groups), "\nInstruments:\nFutures: 0");
    }
}
