//! Brokerage API gRPC client.
//!
//! One TLS channel is opened at start-up and shared by the per-service tonic
//! clients. Every call races the shutdown token and is recorded in metrics.

use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tonic::metadata::MetadataMap;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use super::interceptor::AuthInterceptor;
use super::mapping;
use super::proto;
use super::proto::instruments_service_client::InstrumentsServiceClient;
use super::proto::market_data_service_client::MarketDataServiceClient;
use super::proto::operations_service_client::OperationsServiceClient;
use super::proto::users_service_client::UsersServiceClient;
use crate::application::ports::{InvestApiError, InvestApiPort};
use crate::domain::instruments::{InstrumentKind, InstrumentSummary};
use crate::domain::market::InstrumentTradingStatus;
use crate::domain::operations::{Operation, Portfolio, Positions};
use crate::domain::users::{Account, UserInfo, UserTariff};
use crate::error::SampleError;
use crate::infrastructure::config::{ConfigError, SampleConfig};
use crate::infrastructure::metrics::{Outcome, record_request};

/// Channel with request metadata attached.
pub type InvestChannel = InterceptedService<Channel, AuthInterceptor>;

/// Metadata key of the server-side request id.
pub const TRACKING_ID_HEADER: &str = "x-tracking-id";

/// Instrument listings exceed tonic's 4 MB default.
const MAX_DECODING_MESSAGE_SIZE: usize = 32 * 1024 * 1024;

/// [`InvestApiPort`] over gRPC.
#[derive(Debug, Clone)]
pub struct GrpcInvestApi {
    channel: InvestChannel,
    shutdown: CancellationToken,
}

impl GrpcInvestApi {
    /// Connect to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be sent as metadata, the endpoint
    /// is malformed, or the connection cannot be established.
    /// Returns [`SampleError::Cancelled`] if shutdown is requested first.
    pub async fn connect(
        config: &SampleConfig,
        shutdown: CancellationToken,
    ) -> Result<Self, SampleError> {
        let interceptor = AuthInterceptor::new(config.credentials.token(), &config.app_name)
            .map_err(|_| ConfigError::InvalidValue {
                key: "INVEST_TOKEN".to_string(),
                value: "[REDACTED]".to_string(),
            })?;

        let endpoint = Self::create_endpoint(config)?;
        let channel = tokio::select! {
            biased;
            () = shutdown.cancelled() => {
                tracing::info!(endpoint = %config.endpoint, "Connect abandoned on shutdown");
                return Err(SampleError::Cancelled);
            }
            connected = endpoint.connect() => {
                connected.map_err(|source| SampleError::Transport {
                    endpoint: config.endpoint.clone(),
                    source,
                })?
            }
        };

        tracing::info!(
            endpoint = %config.endpoint,
            environment = config.environment.as_str(),
            "Connected to Invest API"
        );

        Ok(Self::from_channel(channel, interceptor, shutdown))
    }

    /// Wrap an already established channel.
    #[must_use]
    pub fn from_channel(
        channel: Channel,
        interceptor: AuthInterceptor,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            channel: InterceptedService::new(channel, interceptor),
            shutdown,
        }
    }

    fn create_endpoint(config: &SampleConfig) -> Result<Endpoint, SampleError> {
        let transport_error = |source: tonic::transport::Error| SampleError::Transport {
            endpoint: config.endpoint.clone(),
            source,
        };

        let mut endpoint = Channel::from_shared(config.endpoint.clone())
            .map_err(|_| ConfigError::InvalidValue {
                key: "INVEST_ENDPOINT".to_string(),
                value: config.endpoint.clone(),
            })?
            .connect_timeout(config.connection.connect_timeout)
            .timeout(config.connection.request_timeout)
            .user_agent(config.app_name.clone())
            .map_err(transport_error)?
            .tcp_nodelay(true);

        if config.endpoint.starts_with("https://") {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(transport_error)?;
        }

        Ok(endpoint)
    }

    fn users(&self) -> UsersServiceClient<InvestChannel> {
        UsersServiceClient::new(self.channel.clone())
            .max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)
    }

    fn instruments(&self) -> InstrumentsServiceClient<InvestChannel> {
        InstrumentsServiceClient::new(self.channel.clone())
            .max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)
    }

    fn operations(&self) -> OperationsServiceClient<InvestChannel> {
        OperationsServiceClient::new(self.channel.clone())
            .max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)
    }

    fn market_data(&self) -> MarketDataServiceClient<InvestChannel> {
        MarketDataServiceClient::new(self.channel.clone())
            .max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)
    }

    /// Await a unary call unless shutdown wins the race.
    async fn call<T, F>(&self, method: &'static str, request: F) -> Result<T, InvestApiError>
    where
        F: Future<Output = Result<tonic::Response<T>, tonic::Status>> + Send,
    {
        let started = Instant::now();

        let result = tokio::select! {
            biased;
            () = self.shutdown.cancelled() => {
                record_request(method, Outcome::Cancelled, started.elapsed());
                tracing::debug!(method, "Call abandoned on shutdown");
                return Err(InvestApiError::Cancelled { method });
            }
            result = request => result,
        };

        match result {
            Ok(response) => {
                let elapsed = started.elapsed();
                record_request(method, Outcome::Ok, elapsed);
                let tracking_id = tracking_id(response.metadata());
                tracing::debug!(
                    method,
                    tracking_id = tracking_id.as_deref().unwrap_or("-"),
                    ?elapsed,
                    "Call succeeded"
                );
                Ok(response.into_inner())
            }
            Err(status) => {
                record_request(method, Outcome::Error, started.elapsed());
                let err = rpc_error(method, &status);
                tracing::warn!(error = %err, "Call failed");
                Err(err)
            }
        }
    }
}

fn tracking_id(metadata: &MetadataMap) -> Option<String> {
    metadata
        .get(TRACKING_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn rpc_error(method: &'static str, status: &tonic::Status) -> InvestApiError {
    InvestApiError::Rpc {
        method,
        code: status.code(),
        message: status.message().to_string(),
        tracking_id: tracking_id(status.metadata()),
    }
}

fn instruments_request() -> proto::InstrumentsRequest {
    proto::InstrumentsRequest {
        instrument_status: proto::InstrumentStatus::Base as i32,
    }
}

#[async_trait]
impl InvestApiPort for GrpcInvestApi {
    async fn get_accounts(&self) -> Result<Vec<Account>, InvestApiError> {
        let mut client = self.users();
        let response = self
            .call(
                "UsersService/GetAccounts",
                client.get_accounts(proto::GetAccountsRequest {}),
            )
            .await?;
        Ok(response.accounts.into_iter().map(mapping::account).collect())
    }

    async fn get_info(&self) -> Result<UserInfo, InvestApiError> {
        let mut client = self.users();
        let response = self
            .call(
                "UsersService/GetInfo",
                client.get_info(proto::GetInfoRequest {}),
            )
            .await?;
        Ok(mapping::user_info(response))
    }

    async fn get_user_tariff(&self) -> Result<UserTariff, InvestApiError> {
        let mut client = self.users();
        let response = self
            .call(
                "UsersService/GetUserTariff",
                client.get_user_tariff(proto::GetUserTariffRequest {}),
            )
            .await?;
        Ok(mapping::user_tariff(response))
    }

    async fn list_instruments(
        &self,
        kind: InstrumentKind,
    ) -> Result<Vec<InstrumentSummary>, InvestApiError> {
        let mut client = self.instruments();
        let request = instruments_request();

        let instruments = match kind {
            InstrumentKind::Share => mapping::shares(
                self.call("InstrumentsService/Shares", client.shares(request))
                    .await?,
            ),
            InstrumentKind::Bond => mapping::bonds(
                self.call("InstrumentsService/Bonds", client.bonds(request))
                    .await?,
            ),
            InstrumentKind::Etf => mapping::etfs(
                self.call("InstrumentsService/Etfs", client.etfs(request))
                    .await?,
            ),
            InstrumentKind::Currency => mapping::currencies(
                self.call("InstrumentsService/Currencies", client.currencies(request))
                    .await?,
            ),
            InstrumentKind::Future => mapping::futures(
                self.call("InstrumentsService/Futures", client.futures(request))
                    .await?,
            ),
        };
        Ok(instruments)
    }

    async fn get_portfolio(&self, account_id: &str) -> Result<Portfolio, InvestApiError> {
        let mut client = self.operations();
        let request = proto::PortfolioRequest {
            account_id: account_id.to_string(),
        };
        let response = self
            .call(
                "OperationsService/GetPortfolio",
                client.get_portfolio(request),
            )
            .await?;
        Ok(mapping::portfolio(response))
    }

    async fn get_positions(&self, account_id: &str) -> Result<Positions, InvestApiError> {
        let mut client = self.operations();
        let request = proto::PositionsRequest {
            account_id: account_id.to_string(),
        };
        let response = self
            .call(
                "OperationsService/GetPositions",
                client.get_positions(request),
            )
            .await?;
        Ok(mapping::positions(response))
    }

    async fn get_operations(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Operation>, InvestApiError> {
        let mut client = self.operations();
        let request = proto::OperationsRequest {
            account_id: account_id.to_string(),
            from: Some(mapping::timestamp(from)),
            to: Some(mapping::timestamp(to)),
            state: proto::OperationState::Unspecified as i32,
            figi: String::new(),
        };
        let response = self
            .call(
                "OperationsService/GetOperations",
                client.get_operations(request),
            )
            .await?;
        Ok(response
            .operations
            .into_iter()
            .map(mapping::operation)
            .collect())
    }

    async fn get_trading_statuses(
        &self,
        instrument_ids: &[String],
    ) -> Result<Vec<InstrumentTradingStatus>, InvestApiError> {
        let mut client = self.market_data();
        let request = proto::GetTradingStatusesRequest {
            instrument_id: instrument_ids.to_vec(),
        };
        let response = self
            .call(
                "MarketDataService/GetTradingStatuses",
                client.get_trading_statuses(request),
            )
            .await?;
        Ok(response
            .trading_statuses
            .into_iter()
            .map(mapping::trading_status)
            .collect())
    }
}
