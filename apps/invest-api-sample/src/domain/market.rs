//! Trading Statuses
//!
//! Whether an instrument is currently tradable, and through which order types.

use std::fmt;

/// Trading mode of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradingStatus {
    /// Not reported by the API.
    #[default]
    Unspecified,
    /// Not available for trading.
    NotAvailableForTrading,
    /// Opening period.
    OpeningPeriod,
    /// Closing period.
    ClosingPeriod,
    /// Break in trading.
    BreakInTrading,
    /// Normal trading.
    NormalTrading,
    /// Closing auction.
    ClosingAuction,
    /// Dark pool auction.
    DarkPoolAuction,
    /// Discrete auction.
    DiscreteAuction,
    /// Opening auction.
    OpeningAuctionPeriod,
    /// Trading at the closing auction price.
    TradingAtClosingAuctionPrice,
    /// Session assigned.
    SessionAssigned,
    /// Session closed.
    SessionClose,
    /// Session open.
    SessionOpen,
    /// Dealer normal trading.
    DealerNormalTrading,
    /// Dealer break in trading.
    DealerBreakInTrading,
    /// Dealer not available for trading.
    DealerNotAvailableForTrading,
}

impl TradingStatus {
    /// Short status name, without the enum prefix used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::NotAvailableForTrading => "NOT_AVAILABLE_FOR_TRADING",
            Self::OpeningPeriod => "OPENING_PERIOD",
            Self::ClosingPeriod => "CLOSING_PERIOD",
            Self::BreakInTrading => "BREAK_IN_TRADING",
            Self::NormalTrading => "NORMAL_TRADING",
            Self::ClosingAuction => "CLOSING_AUCTION",
            Self::DarkPoolAuction => "DARK_POOL_AUCTION",
            Self::DiscreteAuction => "DISCRETE_AUCTION",
            Self::OpeningAuctionPeriod => "OPENING_AUCTION_PERIOD",
            Self::TradingAtClosingAuctionPrice => "TRADING_AT_CLOSING_AUCTION_PRICE",
            Self::SessionAssigned => "SESSION_ASSIGNED",
            Self::SessionClose => "SESSION_CLOSE",
            Self::SessionOpen => "SESSION_OPEN",
            Self::DealerNormalTrading => "DEALER_NORMAL_TRADING",
            Self::DealerBreakInTrading => "DEALER_BREAK_IN_TRADING",
            Self::DealerNotAvailableForTrading => "DEALER_NOT_AVAILABLE_FOR_TRADING",
        }
    }
}

impl fmt::Display for TradingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trading status record for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentTradingStatus {
    /// Instrument uid.
    pub instrument_uid: String,
    /// FIGI.
    pub figi: String,
    /// Current trading mode.
    pub status: TradingStatus,
    /// Limit orders accepted.
    pub limit_order_available: bool,
    /// Market orders accepted.
    pub market_order_available: bool,
    /// Trading through the API allowed.
    pub api_trade_available: bool,
}

impl fmt::Display for InstrumentTradingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} limit={} market={} api={}",
            self.instrument_uid,
            self.status,
            self.limit_order_available,
            self.market_order_available,
            self.api_trade_available
        )
    }
}
