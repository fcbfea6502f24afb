//! Accounts and User Info
//!
//! Views of the users service responses.

use std::fmt;

use chrono::{DateTime, Utc};

/// Brokerage account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    /// Not reported by the API.
    #[default]
    Unspecified,
    /// Regular brokerage account.
    Brokerage,
    /// Individual investment account.
    Iis,
    /// Investment box.
    InvestBox,
    /// Investment fund account.
    InvestFund,
}

impl AccountType {
    /// Short name used in descriptions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Brokerage => "BROKERAGE",
            Self::Iis => "IIS",
            Self::InvestBox => "INVEST_BOX",
            Self::InvestFund => "INVEST_FUND",
        }
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    /// Not reported by the API.
    #[default]
    Unspecified,
    /// Being opened.
    New,
    /// Open and usable.
    Open,
    /// Closed.
    Closed,
}

impl AccountStatus {
    /// Short name used in descriptions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::New => "NEW",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Check if the account is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Access level of the current token to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessLevel {
    /// Not reported by the API.
    #[default]
    Unspecified,
    /// Trading and reading allowed.
    FullAccess,
    /// Reading only.
    ReadOnly,
    /// No access.
    NoAccess,
}

impl AccessLevel {
    /// Short name used in descriptions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::FullAccess => "FULL_ACCESS",
            Self::ReadOnly => "READ_ONLY",
            Self::NoAccess => "NO_ACCESS",
        }
    }
}

/// Brokerage account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account kind.
    pub account_type: AccountType,
    /// Lifecycle status.
    pub status: AccountStatus,
    /// Token access level.
    pub access_level: AccessLevel,
    /// Opening date.
    pub opened_date: Option<DateTime<Utc>>,
    /// Closing date, for closed accounts.
    pub closed_date: Option<DateTime<Utc>>,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} type={} status={} access={}",
            self.id,
            self.name,
            self.account_type.as_str(),
            self.status.as_str(),
            self.access_level.as_str()
        )?;
        if let Some(opened) = self.opened_date {
            write!(f, " opened={}", opened.format("%Y-%m-%d"))?;
        }
        if let Some(closed) = self.closed_date {
            write!(f, " closed={}", closed.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}

/// User profile flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// Premium client.
    pub premium: bool,
    /// Qualified investor.
    pub qualified: bool,
    /// Instrument groups available to a qualified investor.
    pub qualified_for_work_with: Vec<String>,
    /// Tariff name.
    pub tariff: String,
}

/// Request-rate limit shared by a group of unary methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryLimit {
    /// Requests allowed per minute.
    pub limit_per_minute: i32,
    /// Fully qualified method names.
    pub methods: Vec<String>,
}

/// Concurrency limit shared by a group of streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLimit {
    /// Maximum simultaneously open streams.
    pub limit: i32,
    /// Streams currently open.
    pub open: i32,
    /// Fully qualified stream names.
    pub streams: Vec<String>,
}

/// Rate limits of the current tariff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTariff {
    /// Unary method limits.
    pub unary_limits: Vec<UnaryLimit>,
    /// Stream limits.
    pub stream_limits: Vec<StreamLimit>,
}
