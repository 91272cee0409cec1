//! Request-body extraction. Payload types in this crate carry `validator`
//! annotations; `ValidatedJson` runs them right after deserialization so a
//! handler only ever sees a payload that passed both.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// `Json<T>` followed by `T::validate`. Both kinds of rejection map onto
/// the crate's error envelope through `AppError`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;
        Ok(Self(payload))
    }
}
