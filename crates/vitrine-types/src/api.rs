//! Envelopes and authentication payloads exchanged with the storefront API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

/// Spring Data page, `number` being the zero-based page index
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number + 1 >= self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub access_token: String,
    pub token_type: String,
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A document that is either wrapped in an [`ApiResponse`] or bare
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Document<T> {
    Envelope(ApiResponse<T>),
    Bare(T),
}

impl<T> Document<T> {
    pub fn into_inner(self) -> T {
        match self {
            Document::Envelope(resp) => resp.data,
            Document::Bare(data) => data,
        }
    }
}

/// A collection sent either as a plain array or as one page
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page(PaginatedResponse<T>),
    List(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page(page) => page.content,
            Listing::List(items) => items,
        }
    }
}
