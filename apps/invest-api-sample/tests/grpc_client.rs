//! gRPC Client Integration Tests
//!
//! Runs an in-process tonic server speaking the brokerage contract and
//! drives `GrpcInvestApi` against it over a local TCP port.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::codegen::{Body, BoxFuture, Service, StdError, http};
use tonic::metadata::{MetadataMap, MetadataValue};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::transport::Server;

use invest_api_sample::domain::market::TradingStatus;
use invest_api_sample::domain::users::{AccessLevel, AccountStatus, AccountType};
use invest_api_sample::infrastructure::invest_api::proto;
use invest_api_sample::{GrpcInvestApi, InvestApiError, InvestApiPort, SampleConfig};

const TOKEN: &str = "t.integration";
const APP_NAME: &str = "sample-integration";
const UID: &str = "ba64a3c7-dd1d-4f19-8758-94aac17d971b";

/// What the server saw of one request.
#[derive(Debug, Clone)]
struct SeenRequest {
    path: String,
    authorization: Option<String>,
    app_name: Option<String>,
}

type Seen = Arc<Mutex<Vec<SeenRequest>>>;

trait ServiceName: 'static {
    const NAME: &'static str;
}

struct Users;

impl ServiceName for Users {
    const NAME: &'static str = "tinkoff.public.invest.api.contract.v1.UsersService";
}

struct MarketData;

impl ServiceName for MarketData {
    const NAME: &'static str = "tinkoff.public.invest.api.contract.v1.MarketDataService";
}

/// Contract server for one service name; every instance answers all methods.
struct FakeService<S> {
    seen: Seen,
    _name: PhantomData<fn() -> S>,
}

impl<S> FakeService<S> {
    fn new(seen: Seen) -> Self {
        Self {
            seen,
            _name: PhantomData,
        }
    }
}

impl<S> Clone for FakeService<S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.seen))
    }
}

impl<S: ServiceName> NamedService for FakeService<S> {
    const NAME: &'static str = S::NAME;
}

type Handler<Req, Resp> = fn(tonic::Request<Req>) -> Result<tonic::Response<Resp>, tonic::Status>;

struct Unary<Req, Resp>(Handler<Req, Resp>);

impl<Req, Resp> UnaryService<Req> for Unary<Req, Resp>
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    type Response = Resp;
    type Future = BoxFuture<tonic::Response<Resp>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        let result = (self.0)(request);
        Box::pin(async move { result })
    }
}

async fn unary<Req, Resp, B>(
    request: http::Request<B>,
    handler: Handler<Req, Resp>,
) -> http::Response<tonic::body::Body>
where
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    let mut grpc = Grpc::new(tonic_prost::ProstCodec::default());
    grpc.unary(Unary(handler), request).await
}

fn header(request: &http::Request<impl Body>, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

impl<S, B> Service<http::Request<B>> for FakeService<S>
where
    S: ServiceName,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let path = request.uri().path().to_string();
        self.seen.lock().unwrap().push(SeenRequest {
            path: path.clone(),
            authorization: header(&request, "authorization"),
            app_name: header(&request, "x-app-name"),
        });

        Box::pin(async move {
            let response = match path.rsplit('/').next() {
                Some("GetAccounts") => unary(request, get_accounts).await,
                Some("GetInfo") => unary(request, get_info).await,
                Some("GetTradingStatuses") => unary(request, get_trading_statuses).await,
                _ => tonic::Status::unimplemented(path.clone()).into_http(),
            };
            Ok(response)
        })
    }
}

fn get_accounts(
    _request: tonic::Request<proto::GetAccountsRequest>,
) -> Result<tonic::Response<proto::GetAccountsResponse>, tonic::Status> {
    let mut response = tonic::Response::new(proto::GetAccountsResponse {
        accounts: vec![proto::Account {
            id: "2000".to_string(),
            r#type: proto::AccountType::TinkoffIis as i32,
            name: "ИИС".to_string(),
            status: proto::AccountStatus::Open as i32,
            opened_date: Some(prost_types::Timestamp {
                seconds: 1_651_795_200,
                nanos: 0,
            }),
            closed_date: None,
            access_level: proto::AccessLevel::AccountAccessLevelFullAccess as i32,
        }],
    });
    response
        .metadata_mut()
        .insert("x-tracking-id", MetadataValue::from_static("trk-accounts"));
    Ok(response)
}

fn get_info(
    _request: tonic::Request<proto::GetInfoRequest>,
) -> Result<tonic::Response<proto::GetInfoResponse>, tonic::Status> {
    let mut metadata = MetadataMap::new();
    metadata.insert("x-tracking-id", MetadataValue::from_static("trk-info"));
    Err(tonic::Status::with_metadata(
        tonic::Code::PermissionDenied,
        "40002",
        metadata,
    ))
}

fn get_trading_statuses(
    request: tonic::Request<proto::GetTradingStatusesRequest>,
) -> Result<tonic::Response<proto::GetTradingStatusesResponse>, tonic::Status> {
    let trading_statuses = request
        .into_inner()
        .instrument_id
        .into_iter()
        .map(|instrument_uid| proto::GetTradingStatusResponse {
            figi: "BBG000B9XRY4".to_string(),
            trading_status: proto::SecurityTradingStatus::BreakInTrading as i32,
            limit_order_available_flag: true,
            market_order_available_flag: false,
            api_trade_available_flag: true,
            instrument_uid,
        })
        .collect();
    Ok(tonic::Response::new(proto::GetTradingStatusesResponse {
        trading_statuses,
    }))
}

/// Start the contract server on a random port and connect a client to it.
async fn setup() -> (GrpcInvestApi, Seen, tokio::task::JoinHandle<()>) {
    let seen = Seen::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let users = FakeService::<Users>::new(Arc::clone(&seen));
    let market_data = FakeService::<MarketData>::new(Arc::clone(&seen));
    let server = tokio::spawn(async move {
        Server::builder()
            .add_service(users)
            .add_service(market_data)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    let endpoint = format!("http://{addr}");
    let config = SampleConfig::from_lookup(|key| match key {
        "INVEST_TOKEN" => Some(TOKEN.to_string()),
        "INVEST_APP_NAME" => Some(APP_NAME.to_string()),
        "INVEST_ENDPOINT" => Some(endpoint.clone()),
        _ => None,
    })
    .unwrap();

    let api = GrpcInvestApi::connect(&config, CancellationToken::new())
        .await
        .unwrap();

    (api, seen, server)
}

fn seen_paths(seen: &Seen) -> Vec<String> {
    seen.lock().unwrap().iter().map(|r| r.path.clone()).collect()
}

#[tokio::test]
async fn get_accounts_decodes_and_sends_metadata() {
    let (api, seen, server) = setup().await;

    let accounts = api.get_accounts().await.unwrap();

    assert_eq!(accounts.len(), 1);
    let account = &accounts[0];
    assert_eq!(account.id, "2000");
    assert_eq!(account.name, "ИИС");
    assert_eq!(account.account_type, AccountType::Iis);
    assert_eq!(account.status, AccountStatus::Open);
    assert_eq!(account.access_level, AccessLevel::FullAccess);
    assert_eq!(
        account.opened_date.map(|d| d.format("%Y-%m-%d").to_string()),
        Some("2022-05-06".to_string())
    );

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/tinkoff.public.invest.api.contract.v1.UsersService/GetAccounts"
    );
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer t.integration")
    );
    assert_eq!(requests[0].app_name.as_deref(), Some(APP_NAME));

    server.abort();
}

#[tokio::test]
async fn get_trading_statuses_round_trips_instrument_ids() {
    let (api, seen, server) = setup().await;

    let statuses = api.get_trading_statuses(&[UID.to_string()]).await.unwrap();

    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].instrument_uid, UID);
    assert_eq!(statuses[0].status, TradingStatus::BreakInTrading);
    assert!(statuses[0].limit_order_available);
    assert!(!statuses[0].market_order_available);
    assert_eq!(
        statuses[0].to_string(),
        format!("{UID} BREAK_IN_TRADING limit=true market=false api=true")
    );
    assert_eq!(
        seen_paths(&seen),
        ["/tinkoff.public.invest.api.contract.v1.MarketDataService/GetTradingStatuses"]
    );

    server.abort();
}

#[tokio::test]
async fn failed_call_carries_status_and_tracking_id() {
    let (api, seen, server) = setup().await;

    let err = api.get_info().await.unwrap_err();

    match err {
        InvestApiError::Rpc {
            method,
            code,
            message,
            tracking_id,
        } => {
            assert_eq!(method, "UsersService/GetInfo");
            assert_eq!(code, tonic::Code::PermissionDenied);
            assert_eq!(message, "40002");
            assert_eq!(tracking_id.as_deref(), Some("trk-info"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        seen_paths(&seen),
        ["/tinkoff.public.invest.api.contract.v1.UsersService/GetInfo"]
    );

    server.abort();
}

#[tokio::test]
async fn every_call_carries_auth_metadata() {
    let (api, seen, server) = setup().await;

    api.get_accounts().await.unwrap();
    api.get_trading_statuses(&[UID.to_string()]).await.unwrap();
    let _ = api.get_info().await;

    let requests = seen.lock().unwrap().clone();
    assert_eq!(requests.len(), 3);
    for request in requests {
        assert_eq!(
            request.authorization.as_deref(),
            Some("Bearer t.integration"),
            "{}",
            request.path
        );
        assert_eq!(request.app_name.as_deref(), Some(APP_NAME), "{}", request.path);
    }

    server.abort();
}
