//! Protobuf → domain conversions.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::proto;
use crate::domain::instruments::{InstrumentKind, InstrumentSummary};
use crate::domain::market::{InstrumentTradingStatus, TradingStatus};
use crate::domain::money::{Money, decimal_from_parts};
use crate::domain::operations::{
    Operation, OperationState, Portfolio, PortfolioPosition, PortfolioTotals, Positions,
    SecurityBalance,
};
use crate::domain::users::{
    AccessLevel, Account, AccountStatus, AccountType, StreamLimit, UnaryLimit, UserInfo,
    UserTariff,
};

pub fn timestamp(value: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp::from(SystemTime::from(value))
}

fn date_time(value: Option<prost_types::Timestamp>) -> Option<DateTime<Utc>> {
    let value = value?;
    let nanos = u32::try_from(value.nanos).ok()?;
    DateTime::from_timestamp(value.seconds, nanos)
}

fn money(value: proto::MoneyValue) -> Money {
    Money::from_parts(value.currency, value.units, value.nano)
}

fn quotation(value: proto::Quotation) -> Decimal {
    decimal_from_parts(value.units, value.nano)
}

pub fn account(value: proto::Account) -> Account {
    let account_type = match value.r#type() {
        proto::AccountType::Unspecified => AccountType::Unspecified,
        proto::AccountType::Tinkoff => AccountType::Brokerage,
        proto::AccountType::TinkoffIis => AccountType::Iis,
        proto::AccountType::InvestBox => AccountType::InvestBox,
        proto::AccountType::InvestFund => AccountType::InvestFund,
    };
    let status = match value.status() {
        proto::AccountStatus::New => AccountStatus::New,
        proto::AccountStatus::Open => AccountStatus::Open,
        proto::AccountStatus::Closed => AccountStatus::Closed,
        proto::AccountStatus::Unspecified | proto::AccountStatus::All => {
            AccountStatus::Unspecified
        }
    };
    let access_level = match value.access_level() {
        proto::AccessLevel::AccountAccessLevelUnspecified => AccessLevel::Unspecified,
        proto::AccessLevel::AccountAccessLevelFullAccess => AccessLevel::FullAccess,
        proto::AccessLevel::AccountAccessLevelReadOnly => AccessLevel::ReadOnly,
        proto::AccessLevel::AccountAccessLevelNoAccess => AccessLevel::NoAccess,
    };

    Account {
        id: value.id,
        name: value.name,
        account_type,
        status,
        access_level,
        opened_date: date_time(value.opened_date),
        closed_date: date_time(value.closed_date),
    }
}

pub fn user_info(value: proto::GetInfoResponse) -> UserInfo {
    UserInfo {
        premium: value.prem_status,
        qualified: value.qual_status,
        qualified_for_work_with: value.qualified_for_work_with,
        tariff: value.tariff,
    }
}

pub fn user_tariff(value: proto::GetUserTariffResponse) -> UserTariff {
    UserTariff {
        unary_limits: value
            .unary_limits
            .into_iter()
            .map(|l| UnaryLimit {
                limit_per_minute: l.limit_per_minute,
                methods: l.methods,
            })
            .collect(),
        stream_limits: value
            .stream_limits
            .into_iter()
            .map(|l| StreamLimit {
                limit: l.limit,
                open: l.open,
                streams: l.streams,
            })
            .collect(),
    }
}

/// Instrument messages share the summary fields under the same names.
macro_rules! instrument_summaries {
    ($kind:expr, $instruments:expr) => {
        $instruments
            .into_iter()
            .map(|i| InstrumentSummary {
                kind: $kind,
                figi: i.figi,
                ticker: i.ticker,
                class_code: i.class_code,
                name: i.name,
                currency: i.currency,
                lot: i.lot,
            })
            .collect()
    };
}

pub fn shares(value: proto::SharesResponse) -> Vec<InstrumentSummary> {
    instrument_summaries!(InstrumentKind::Share, value.instruments)
}

pub fn bonds(value: proto::BondsResponse) -> Vec<InstrumentSummary> {
    instrument_summaries!(InstrumentKind::Bond, value.instruments)
}

pub fn etfs(value: proto::EtfsResponse) -> Vec<InstrumentSummary> {
    instrument_summaries!(InstrumentKind::Etf, value.instruments)
}

pub fn currencies(value: proto::CurrenciesResponse) -> Vec<InstrumentSummary> {
    instrument_summaries!(InstrumentKind::Currency, value.instruments)
}

pub fn futures(value: proto::FuturesResponse) -> Vec<InstrumentSummary> {
    instrument_summaries!(InstrumentKind::Future, value.instruments)
}

pub fn portfolio(value: proto::PortfolioResponse) -> Portfolio {
    Portfolio {
        account_id: value.account_id,
        totals: PortfolioTotals {
            shares: value.total_amount_shares.map(money),
            bonds: value.total_amount_bonds.map(money),
            etfs: value.total_amount_etf.map(money),
            currencies: value.total_amount_currencies.map(money),
            futures: value.total_amount_futures.map(money),
            portfolio: value.total_amount_portfolio.map(money),
        },
        expected_yield: value.expected_yield.map(quotation),
        positions: value
            .positions
            .into_iter()
            .map(|p| PortfolioPosition {
                figi: p.figi,
                instrument_type: p.instrument_type,
                quantity: p.quantity.map(quotation).unwrap_or_default(),
                current_price: p.current_price.map(money),
                expected_yield: p.expected_yield.map(quotation),
            })
            .collect(),
    }
}

pub fn positions(value: proto::PositionsResponse) -> Positions {
    Positions {
        money: value.money.into_iter().map(money).collect(),
        blocked: value.blocked.into_iter().map(money).collect(),
        securities: value
            .securities
            .into_iter()
            .map(|s| SecurityBalance {
                figi: s.figi,
                instrument_type: s.instrument_type,
                balance: s.balance,
                blocked: s.blocked,
            })
            .collect(),
    }
}

pub fn operation(value: proto::Operation) -> Operation {
    let state = match value.state() {
        proto::OperationState::Unspecified => OperationState::Unspecified,
        proto::OperationState::Executed => OperationState::Executed,
        proto::OperationState::Canceled => OperationState::Canceled,
        proto::OperationState::Progress => OperationState::Progress,
    };

    Operation {
        id: value.id,
        date: date_time(value.date),
        description: value.r#type,
        state,
        figi: value.figi,
        payment: value.payment.map(money),
        quantity: value.quantity,
    }
}

const fn trading_status_kind(value: proto::SecurityTradingStatus) -> TradingStatus {
    use proto::SecurityTradingStatus as S;
    match value {
        S::Unspecified => TradingStatus::Unspecified,
        S::NotAvailableForTrading => TradingStatus::NotAvailableForTrading,
        S::OpeningPeriod => TradingStatus::OpeningPeriod,
        S::ClosingPeriod => TradingStatus::ClosingPeriod,
        S::BreakInTrading => TradingStatus::BreakInTrading,
        S::NormalTrading => TradingStatus::NormalTrading,
        S::ClosingAuction => TradingStatus::ClosingAuction,
        S::DarkPoolAuction => TradingStatus::DarkPoolAuction,
        S::DiscreteAuction => TradingStatus::DiscreteAuction,
        S::OpeningAuctionPeriod => TradingStatus::OpeningAuctionPeriod,
        S::TradingAtClosingAuctionPrice => TradingStatus::TradingAtClosingAuctionPrice,
        S::SessionAssigned => TradingStatus::SessionAssigned,
        S::SessionClose => TradingStatus::SessionClose,
        S::SessionOpen => TradingStatus::SessionOpen,
        S::DealerNormalTrading => TradingStatus::DealerNormalTrading,
        S::DealerBreakInTrading => TradingStatus::DealerBreakInTrading,
        S::DealerNotAvailableForTrading => TradingStatus::DealerNotAvailableForTrading,
    }
}

pub fn trading_status(value: proto::GetTradingStatusResponse) -> InstrumentTradingStatus {
    InstrumentTradingStatus {
        status: trading_status_kind(value.trading_status()),
        instrument_uid: value.instrument_uid,
        figi: value.figi,
        limit_order_available: value.limit_order_available_flag,
        market_order_available: value.market_order_available_flag,
        api_trade_available: value.api_trade_available_flag,
    }
}
