//! Request Metadata Interceptor
//!
//! Every call to the API must carry:
//!
//! - `authorization: Bearer <token>`
//! - `x-app-name: <application name>` (identifies the client in API statistics)

use tonic::metadata::errors::InvalidMetadataValue;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Metadata key carrying the application name.
pub const APP_NAME_HEADER: &str = "x-app-name";

/// Adds authentication and application metadata to outgoing requests.
#[derive(Clone)]
pub struct AuthInterceptor {
    authorization: MetadataValue<Ascii>,
    app_name: MetadataValue<Ascii>,
}

impl AuthInterceptor {
    /// Build the interceptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or application name contains characters
    /// not allowed in ASCII metadata.
    pub fn new(token: &str, app_name: &str) -> Result<Self, InvalidMetadataValue> {
        let mut authorization: MetadataValue<Ascii> = format!("Bearer {token}").parse()?;
        authorization.set_sensitive(true);

        Ok(Self {
            authorization,
            app_name: app_name.parse()?,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let metadata = request.metadata_mut();
        metadata.insert("authorization", self.authorization.clone());
        metadata.insert(APP_NAME_HEADER, self.app_name.clone());
        Ok(request)
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("authorization", &"[REDACTED]")
            .field("app_name", &self.app_name)
            .finish()
    }
}
