//! Sample Runner Integration Tests
//!
//! Drives the full sample sequence against an in-memory API port.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio_util::sync::CancellationToken;

use invest_api_sample::domain::formatting::{NO_ACCOUNTS, NO_TRADING_STATUSES};
use invest_api_sample::domain::instruments::{InstrumentKind, InstrumentSummary};
use invest_api_sample::domain::market::{InstrumentTradingStatus, TradingStatus};
use invest_api_sample::domain::operations::{Operation, Portfolio, Positions};
use invest_api_sample::domain::users::{
    AccessLevel, Account, AccountStatus, AccountType, UserInfo, UserTariff,
};
use invest_api_sample::{
    InvestApiError, InvestApiPort, RunnerSettings, SampleError, SampleRunner, SampleStep,
};

const UID: &str = "ba64a3c7-dd1d-4f19-8758-94aac17d971b";

/// Port that answers from fixed data and records every call.
#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
    accounts: Vec<Account>,
    statuses: Vec<InstrumentTradingStatus>,
    fail_on: Option<&'static str>,
    cancel_after: Option<(&'static str, CancellationToken)>,
}

impl FakeApi {
    fn record(&self, call: &'static str) -> Result<(), InvestApiError> {
        self.calls.lock().unwrap().push(call.to_string());
        if let Some((name, token)) = &self.cancel_after
            && *name == call
        {
            token.cancel();
        }
        if self.fail_on == Some(call) {
            return Err(InvestApiError::Rpc {
                method: call,
                code: tonic::Code::PermissionDenied,
                message: "40002".to_string(),
                tracking_id: Some("trk".to_string()),
            });
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvestApiPort for FakeApi {
    async fn get_accounts(&self) -> Result<Vec<Account>, InvestApiError> {
        self.record("GetAccounts")?;
        Ok(self.accounts.clone())
    }

    async fn get_info(&self) -> Result<UserInfo, InvestApiError> {
        self.record("GetInfo")?;
        Ok(UserInfo::default())
    }

    async fn get_user_tariff(&self) -> Result<UserTariff, InvestApiError> {
        self.record("GetUserTariff")?;
        Ok(UserTariff::default())
    }

    async fn list_instruments(
        &self,
        kind: InstrumentKind,
    ) -> Result<Vec<InstrumentSummary>, InvestApiError> {
        self.record(kind.heading())?;
        Ok(Vec::new())
    }

    async fn get_portfolio(&self, account_id: &str) -> Result<Portfolio, InvestApiError> {
        self.record("GetPortfolio")?;
        Ok(Portfolio {
            account_id: account_id.to_string(),
            ..Portfolio::default()
        })
    }

    async fn get_positions(&self, _account_id: &str) -> Result<Positions, InvestApiError> {
        self.record("GetPositions")?;
        Ok(Positions::default())
    }

    async fn get_operations(
        &self,
        _account_id: &str,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<Operation>, InvestApiError> {
        self.record("GetOperations")?;
        Ok(Vec::new())
    }

    async fn get_trading_statuses(
        &self,
        instrument_ids: &[String],
    ) -> Result<Vec<InstrumentTradingStatus>, InvestApiError> {
        self.record("GetTradingStatuses")?;
        assert_eq!(instrument_ids, [UID.to_string()]);
        Ok(self.statuses.clone())
    }
}

fn open_account() -> Account {
    Account {
        id: "2000".to_string(),
        name: "Брокерский счёт".to_string(),
        account_type: AccountType::Brokerage,
        status: AccountStatus::Open,
        access_level: AccessLevel::FullAccess,
        opened_date: None,
        closed_date: None,
    }
}

fn settings() -> RunnerSettings {
    RunnerSettings {
        instrument_uid: UID.to_string(),
        operations_lookback: TimeDelta::days(30),
    }
}

fn runner(api: &Arc<FakeApi>, shutdown: CancellationToken) -> SampleRunner {
    SampleRunner::new(Arc::clone(api) as Arc<dyn InvestApiPort>, settings(), shutdown)
}

#[tokio::test]
async fn runs_samples_in_fixed_order() {
    let api = Arc::new(FakeApi {
        accounts: vec![open_account()],
        ..FakeApi::default()
    });

    runner(&api, CancellationToken::new()).run().await.unwrap();

    assert_eq!(
        api.calls(),
        [
            "GetAccounts",
            "GetInfo",
            "GetUserTariff",
            "Shares",
            "Bonds",
            "Etfs",
            "Currencies",
            "Futures",
            "GetAccounts",
            "GetPortfolio",
            "GetPositions",
            "GetOperations",
            "GetTradingStatuses",
        ]
    );
}

#[tokio::test]
async fn without_accounts_operations_sample_stops_early() {
    let api = Arc::new(FakeApi::default());
    let runner = runner(&api, CancellationToken::new());

    let description = runner.run_step(SampleStep::Operations).await.unwrap();

    assert_eq!(description, NO_ACCOUNTS);
    assert_eq!(api.calls(), ["GetAccounts"]);
}

#[tokio::test]
async fn market_data_step_formats_statuses() {
    let status = InstrumentTradingStatus {
        instrument_uid: UID.to_string(),
        figi: "BBG000B9XRY4".to_string(),
        status: TradingStatus::NormalTrading,
        limit_order_available: true,
        market_order_available: true,
        api_trade_available: true,
    };
    let api = Arc::new(FakeApi {
        statuses: vec![status.clone()],
        ..FakeApi::default()
    });
    let runner = runner(&api, CancellationToken::new());

    let description = runner.run_step(SampleStep::MarketData).await.unwrap();

    assert_eq!(description, format!("\nTradingStatuses:\n[{status}]"));
}

#[tokio::test]
async fn empty_trading_statuses() {
    let api = Arc::new(FakeApi::default());
    let runner = runner(&api, CancellationToken::new());

    let description = runner.run_step(SampleStep::MarketData).await.unwrap();

    assert_eq!(description, NO_TRADING_STATUSES);
}

#[tokio::test]
async fn first_error_stops_the_run() {
    let api = Arc::new(FakeApi {
        accounts: vec![open_account()],
        fail_on: Some("Bonds"),
        ..FakeApi::default()
    });

    let err = runner(&api, CancellationToken::new()).run().await.unwrap_err();

    assert!(matches!(
        err,
        SampleError::Api(InvestApiError::Rpc {
            method: "Bonds",
            code: tonic::Code::PermissionDenied,
            ..
        })
    ));
    assert_eq!(api.calls().last().map(String::as_str), Some("Bonds"));
    assert!(!api.calls().iter().any(|c| c == "GetPortfolio"));
}

#[tokio::test]
async fn cancelled_token_runs_nothing() {
    let api = Arc::new(FakeApi::default());
    let shutdown = CancellationToken::new();
    shutdown.cancel();

    let err = runner(&api, shutdown).run().await.unwrap_err();

    assert!(matches!(err, SampleError::Cancelled));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn cancellation_between_steps_skips_the_rest() {
    let shutdown = CancellationToken::new();
    let api = Arc::new(FakeApi {
        accounts: vec![open_account()],
        cancel_after: Some(("GetUserTariff", shutdown.clone())),
        ..FakeApi::default()
    });

    let err = runner(&api, shutdown).run().await.unwrap_err();

    assert!(matches!(err, SampleError::Cancelled));
    assert_eq!(api.calls(), ["GetAccounts", "GetInfo", "GetUserTariff"]);
}
