//! Portfolio, Positions and Operations

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::money::Money;

/// Portfolio totals per asset class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioTotals {
    /// Shares.
    pub shares: Option<Money>,
    /// Bonds.
    pub bonds: Option<Money>,
    /// Funds.
    pub etfs: Option<Money>,
    /// Currencies.
    pub currencies: Option<Money>,
    /// Futures.
    pub futures: Option<Money>,
    /// Whole portfolio.
    pub portfolio: Option<Money>,
}

impl PortfolioTotals {
    /// Labelled totals in display order, skipping absent ones.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &Money)> {
        [
            ("shares", self.shares.as_ref()),
            ("bonds", self.bonds.as_ref()),
            ("etfs", self.etfs.as_ref()),
            ("currencies", self.currencies.as_ref()),
            ("futures", self.futures.as_ref()),
            ("portfolio", self.portfolio.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, money)| money.map(|m| (label, m)))
    }
}

/// Single portfolio position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioPosition {
    /// FIGI.
    pub figi: String,
    /// Instrument type reported by the API (`share`, `bond`, ...).
    pub instrument_type: String,
    /// Quantity in units of the instrument.
    pub quantity: Decimal,
    /// Current price per unit.
    pub current_price: Option<Money>,
    /// Expected yield in currency.
    pub expected_yield: Option<Decimal>,
}

impl fmt::Display for PortfolioPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} qty={}",
            self.instrument_type,
            self.figi,
            self.quantity.normalize()
        )?;
        if let Some(price) = &self.current_price {
            write!(f, " price={price}")?;
        }
        if let Some(expected_yield) = self.expected_yield {
            write!(f, " yield={}", expected_yield.normalize())?;
        }
        Ok(())
    }
}

/// Portfolio of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    /// Account id.
    pub account_id: String,
    /// Totals per asset class.
    pub totals: PortfolioTotals,
    /// Expected yield, percent.
    pub expected_yield: Option<Decimal>,
    /// Positions.
    pub positions: Vec<PortfolioPosition>,
}

/// Securities balance of one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityBalance {
    /// FIGI.
    pub figi: String,
    /// Instrument type.
    pub instrument_type: String,
    /// Available balance.
    pub balance: i64,
    /// Blocked by active orders.
    pub blocked: i64,
}

impl fmt::Display for SecurityBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} balance={} blocked={}",
            self.instrument_type, self.figi, self.balance, self.blocked
        )
    }
}

/// Balances of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions {
    /// Available money per currency.
    pub money: Vec<Money>,
    /// Blocked money per currency.
    pub blocked: Vec<Money>,
    /// Securities balances.
    pub securities: Vec<SecurityBalance>,
}

/// Execution state of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    /// Not reported by the API.
    #[default]
    Unspecified,
    /// Executed.
    Executed,
    /// Canceled.
    Canceled,
    /// In progress.
    Progress,
}

impl OperationState {
    /// Short name used in descriptions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Executed => "EXECUTED",
            Self::Canceled => "CANCELED",
            Self::Progress => "PROGRESS",
        }
    }
}

/// Account operation (trade, fee, coupon, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation id.
    pub id: String,
    /// Operation date.
    pub date: Option<DateTime<Utc>>,
    /// Human-readable operation type, as reported by the API.
    pub description: String,
    /// Execution state.
    pub state: OperationState,
    /// FIGI, empty for money-only operations.
    pub figi: String,
    /// Payment amount.
    pub payment: Option<Money>,
    /// Quantity in units of the instrument.
    pub quantity: i64,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M:%S"))?,
            None => f.write_str("-")?,
        }
        write!(f, " {} [{}]", self.description, self.state.as_str())?;
        if !self.figi.is_empty() {
            write!(f, " {} x{}", self.figi, self.quantity)?;
        }
        if let Some(payment) = &self.payment {
            write!(f, " payment={payment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn totals_skip_missing_classes() {
        let totals = PortfolioTotals {
            shares: Some(Money::from_parts("rub", 100, 0)),
            portfolio: Some(Money::from_parts("rub", 150, 0)),
            ..PortfolioTotals::default()
        };

        let labels: Vec<_> = totals.labelled().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["shares", "portfolio"]);
    }

    #[test]
    fn operation_display_money_only() {
        let operation = Operation {
            id: "1".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).single(),
            description: "Пополнение брокерского счёта".to_string(),
            state: OperationState::Executed,
            figi: String::new(),
            payment: Some(Money::from_parts("rub", 5_000, 0)),
            quantity: 0,
        };

        assert_eq!(
            operation.to_string(),
            "2024-01-02 10:30:00 Пополнение брокерского счёта [EXECUTED] payment=5000 rub"
        );
    }

    #[test]
    fn operation_display_with_instrument() {
        let operation = Operation {
            id: "2".to_string(),
            date: None,
            description: "Покупка ценных бумаг".to_string(),
            state: OperationState::Progress,
            figi: "BBG004730N88".to_string(),
            payment: None,
            quantity: 10,
        };

        assert_eq!(
            operation.to_string(),
            "- Покупка ценных бумаг [PROGRESS] BBG004730N88 x10"
        );
    }
}
