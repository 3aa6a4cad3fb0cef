use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::api::{
    AdminLoginRequest, AdminLoginResponse, CreateContactRequest, CreateDonationRequest,
    ErrorResponse, EventInput, ListDonationsResponse,
};
use shared::models::{BlogPost, ContactSubmission, Donation, Event};
use shared::RawEventRecord;
use uuid::Uuid;

const API_BASE_URL: &str = "/api";

pub struct ApiService;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn with_token(builder: RequestBuilder, token: &Uuid) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

fn describe_error(body: ErrorResponse) -> String {
    match body.details {
        Some(details) => format!("{}: {}", body.error, details),
        None => body.error,
    }
}

/// Turn a non-2xx response into a readable message, preferring the
/// server's own error text.
async fn error_message(response: Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => describe_error(body),
        Err(_) => format!("HTTP error: {}", response.status()),
    }
}

async fn dispatch(request: Request) -> Result<Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(response)
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let request = builder
        .build()
        .map_err(|e| format!("Failed to build request: {:?}", e))?;
    dispatch(request).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, String> {
    let request = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {:?}", e))?;
    dispatch(request).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {:?}", e))
}

impl ApiService {
    pub async fn list_events() -> Result<Vec<RawEventRecord>, String> {
        parse(send(Request::get(&url("/events"))).await?).await
    }

    pub async fn list_blog_posts() -> Result<Vec<BlogPost>, String> {
        parse(send(Request::get(&url("/blog"))).await?).await
    }

    pub async fn create_donation(request: &CreateDonationRequest) -> Result<Donation, String> {
        parse(send_json(Request::post(&url("/donations")), request).await?).await
    }

    pub async fn submit_contact(request: &CreateContactRequest) -> Result<ContactSubmission, String> {
        parse(send_json(Request::post(&url("/contact")), request).await?).await
    }

    pub async fn admin_login(password: String) -> Result<Uuid, String> {
        let request = AdminLoginRequest { password };
        let response: AdminLoginResponse =
            parse(send_json(Request::post(&url("/admin/login")), &request).await?).await?;
        Ok(response.token)
    }

    pub async fn admin_logout(token: &Uuid) -> Result<(), String> {
        send(with_token(Request::post(&url("/admin/logout")), token)).await?;
        Ok(())
    }

    pub async fn list_donations(token: &Uuid) -> Result<ListDonationsResponse, String> {
        parse(send(with_token(Request::get(&url("/admin/donations")), token)).await?).await
    }

    pub async fn list_admin_events(token: &Uuid) -> Result<Vec<Event>, String> {
        parse(send(with_token(Request::get(&url("/admin/events")), token)).await?).await
    }

    pub async fn create_event(token: &Uuid, input: &EventInput) -> Result<Event, String> {
        let builder = with_token(Request::post(&url("/admin/events")), token);
        parse(send_json(builder, input).await?).await
    }

    pub async fn update_event(token: &Uuid, id: Uuid, input: &EventInput) -> Result<Event, String> {
        let builder = with_token(Request::put(&url(&format!("/admin/events/{}", id))), token);
        parse(send_json(builder, input).await?).await
    }

    pub async fn delete_event(token: &Uuid, id: Uuid) -> Result<(), String> {
        let builder = with_token(Request::delete(&url(&format!("/admin/events/{}", id))), token);
        send(builder).await?;
        Ok(())
    }

    pub async fn toggle_event(token: &Uuid, id: Uuid) -> Result<Event, String> {
        let builder = with_token(Request::post(&url(&format!("/admin/events/{}/toggle", id))), token);
        parse(send(builder).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_appends_details() {
        assert_eq!(
            describe_error(ErrorResponse::new("Invalid or expired session")),
            "Invalid or expired session"
        );
        assert_eq!(
            describe_error(ErrorResponse::with_details("Validation failed", "email: invalid")),
            "Validation failed: email: invalid"
        );
    }

    #[test]
    fn test_url_prefixes_api_base() {
        assert_eq!(url("/admin/events"), "/api/admin/events");
    }
}
