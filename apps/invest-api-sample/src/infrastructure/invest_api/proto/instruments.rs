// @generated
// Subset of instruments.proto used by the samples.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct InstrumentsRequest {
    #[prost(enumeration = "super::common::InstrumentStatus", tag = "1")]
    pub instrument_status: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SharesResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<Share>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Share {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub lot: i32,
    #[prost(string, tag = "6")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(enumeration = "super::common::SecurityTradingStatus", tag = "25")]
    pub trading_status: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BondsResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<Bond>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bond {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub lot: i32,
    #[prost(string, tag = "6")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(enumeration = "super::common::SecurityTradingStatus", tag = "31")]
    pub trading_status: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EtfsResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<Etf>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Etf {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub lot: i32,
    #[prost(string, tag = "6")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(enumeration = "super::common::SecurityTradingStatus", tag = "25")]
    pub trading_status: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CurrenciesResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<Currency>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Currency {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub lot: i32,
    #[prost(string, tag = "6")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "16")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(enumeration = "super::common::SecurityTradingStatus", tag = "20")]
    pub trading_status: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FuturesResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<Future>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Future {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub lot: i32,
    #[prost(string, tag = "5")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "14")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(enumeration = "super::common::SecurityTradingStatus", tag = "25")]
    pub trading_status: i32,
}
/// Generated client implementations.
pub mod instruments_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct InstrumentsServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> InstrumentsServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        pub async fn shares(
            &mut self,
            request: impl tonic::IntoRequest<super::InstrumentsRequest>,
        ) -> std::result::Result<tonic::Response<super::SharesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/tinkoff.public.invest.api.contract.v1.InstrumentsService/Shares",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("tinkoff.public.invest.api.contract.v1.InstrumentsService", "Shares"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn bonds(
            &mut self,
            request: impl tonic::IntoRequest<super::InstrumentsRequest>,
        ) -> std::result::Result<tonic::Response<super::BondsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/tinkoff.public.invest.api.contract.v1.InstrumentsService/Bonds",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("tinkoff.public.invest.api.contract.v1.InstrumentsService", "Bonds"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn etfs(
            &mut self,
            request: impl tonic::IntoRequest<super::InstrumentsRequest>,
        ) -> std::result::Result<tonic::Response<super::EtfsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/tinkoff.public.invest.api.contract.v1.InstrumentsService/Etfs",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("tinkoff.public.invest.api.contract.v1.InstrumentsService", "Etfs"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn currencies(
            &mut self,
            request: impl tonic::IntoRequest<super::InstrumentsRequest>,
        ) -> std::result::Result<tonic::Response<super::CurrenciesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/tinkoff.public.invest.api.contract.v1.InstrumentsService/Currencies",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("tinkoff.public.invest.api.contract.v1.InstrumentsService", "Currencies"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn futures(
            &mut self,
            request: impl tonic::IntoRequest<super::InstrumentsRequest>,
        ) -> std::result::Result<tonic::Response<super::FuturesResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/tinkoff.public.invest.api.contract.v1.InstrumentsService/Futures",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("tinkoff.public.invest.api.contract.v1.InstrumentsService", "Futures"));
            self.inner.unary(req, path, codec).await
        }
    }
}
