// @generated
// Subset of common.proto used by the samples.
/// Money amount in a currency.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoneyValue {
    #[prost(string, tag = "1")]
    pub currency: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub units: i64,
    #[prost(int32, tag = "3")]
    pub nano: i32,
}
/// Fixed-point number.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Quotation {
    #[prost(int64, tag = "1")]
    pub units: i64,
    #[prost(int32, tag = "2")]
    pub nano: i32,
}
/// Instrument trading mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SecurityTradingStatus {
    Unspecified = 0,
    NotAvailableForTrading = 1,
    OpeningPeriod = 2,
    ClosingPeriod = 3,
    BreakInTrading = 4,
    NormalTrading = 5,
    ClosingAuction = 6,
    DarkPoolAuction = 7,
    DiscreteAuction = 8,
    OpeningAuctionPeriod = 9,
    TradingAtClosingAuctionPrice = 10,
    SessionAssigned = 11,
    SessionClose = 12,
    SessionOpen = 13,
    DealerNormalTrading = 14,
    DealerBreakInTrading = 15,
    DealerNotAvailableForTrading = 16,
}
impl SecurityTradingStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "SECURITY_TRADING_STATUS_UNSPECIFIED",
            Self::NotAvailableForTrading => "SECURITY_TRADING_STATUS_NOT_AVAILABLE_FOR_TRADING",
            Self::OpeningPeriod => "SECURITY_TRADING_STATUS_OPENING_PERIOD",
            Self::ClosingPeriod => "SECURITY_TRADING_STATUS_CLOSING_PERIOD",
            Self::BreakInTrading => "SECURITY_TRADING_STATUS_BREAK_IN_TRADING",
            Self::NormalTrading => "SECURITY_TRADING_STATUS_NORMAL_TRADING",
            Self::ClosingAuction => "SECURITY_TRADING_STATUS_CLOSING_AUCTION",
            Self::DarkPoolAuction => "SECURITY_TRADING_STATUS_DARK_POOL_AUCTION",
            Self::DiscreteAuction => "SECURITY_TRADING_STATUS_DISCRETE_AUCTION",
            Self::OpeningAuctionPeriod => "SECURITY_TRADING_STATUS_OPENING_AUCTION_PERIOD",
            Self::TradingAtClosingAuctionPrice => {
                "SECURITY_TRADING_STATUS_TRADING_AT_CLOSING_AUCTION_PRICE"
            }
            Self::SessionAssigned => "SECURITY_TRADING_STATUS_SESSION_ASSIGNED",
            Self::SessionClose => "SECURITY_TRADING_STATUS_SESSION_CLOSE",
            Self::SessionOpen => "SECURITY_TRADING_STATUS_SESSION_OPEN",
            Self::DealerNormalTrading => "SECURITY_TRADING_STATUS_DEALER_NORMAL_TRADING",
            Self::DealerBreakInTrading => "SECURITY_TRADING_STATUS_DEALER_BREAK_IN_TRADING",
            Self::DealerNotAvailableForTrading => {
                "SECURITY_TRADING_STATUS_DEALER_NOT_AVAILABLE_FOR_TRADING"
            }
        }
    }
}
/// Instrument listing filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InstrumentStatus {
    Unspecified = 0,
    Base = 1,
    All = 2,
}
