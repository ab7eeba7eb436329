use anyhow::{Result, bail};
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::AppState;
use super::pages::{self, CONVERSION_ERROR, FormValues};
use crate::core::codes::{self, normalize_code};
use crate::core::converter::validate_amount;

/// Fields of the conversion form. All optional so a partial submission
/// reaches the handler instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionForm {
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub amount: Option<String>,
}

impl ConversionForm {
    fn values(&self) -> FormValues<'_> {
        FormValues {
            from_currency: self.from_currency.as_deref().unwrap_or_default(),
            to_currency: self.to_currency.as_deref().unwrap_or_default(),
            amount: self.amount.as_deref().unwrap_or_default(),
        }
    }

    fn is_complete(&self) -> bool {
        self.from_currency.is_some() && self.to_currency.is_some() && self.amount.is_some()
    }

    /// Checks the submission without touching the network.
    fn validate(&self) -> Result<(f64, String, String)> {
        let values = self.values();
        let amount = validate_amount(values.amount.trim().parse::<f64>()?)?;
        for code in [values.from_currency, values.to_currency] {
            if !codes::validate_currency_code(code) {
                bail!("Invalid currency code: {code}");
            }
        }
        Ok((
            amount,
            normalize_code(values.from_currency),
            normalize_code(values.to_currency),
        ))
    }
}

fn rejected(form: &ConversionForm) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(pages::home(&form.values(), Some(CONVERSION_ERROR))),
    )
        .into_response()
}

pub async fn home() -> Html<String> {
    Html(pages::home(&FormValues::default(), None))
}

pub async fn table() -> Html<String> {
    Html(pages::table(codes::all_currencies()))
}

pub async fn conversion(Form(form): Form<ConversionForm>) -> Response {
    match form.validate() {
        Ok((amount, from, to)) => {
            let location =
                format!("/convert?from_currency={from}&to_currency={to}&amount={amount}");
            debug!("Redirecting to {}", location);
            Redirect::to(&location).into_response()
        }
        Err(e) => {
            warn!(error = %e, form = ?form, "Rejected conversion form");
            rejected(&form)
        }
    }
}

pub async fn convert(State(state): State<AppState>, Query(form): Query<ConversionForm>) -> Response {
    if !form.is_complete() {
        return Redirect::to("/").into_response();
    }

    let (amount, from, to) = match form.validate() {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, form = ?form, "Rejected conversion request");
            return rejected(&form);
        }
    };

    match state.converter.convert_currency(amount, &from, &to).await {
        Ok(result) => Html(pages::converted(&result)).into_response(),
        Err(e) => {
            warn!(error = %e, %from, %to, amount, "Currency conversion failed");
            rejected(&form)
        }
    }
}
