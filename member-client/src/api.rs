//! Typed member API
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | create | POST | `crear` |
//! | get | GET | `{id}` |
//! | update | PUT | `actualizar/{id}` |
//! | delete | DELETE | `eliminar/{id}` |

use shared::{Member, MemberId, MemberPayload};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Member resource client over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct MemberApi<C> {
    http: C,
}

impl<C: HttpClient> MemberApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Create a member. The response body is ignored.
    pub async fn create(&self, payload: &MemberPayload) -> ClientResult<()> {
        self.http.post("crear", payload).await?;
        Ok(())
    }

    /// Fetch a member by id
    pub async fn get(&self, id: &MemberId) -> ClientResult<Member> {
        let body = self.http.get(&segment(id)).await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }

    /// Replace a member's fields. The response body is ignored.
    pub async fn update(&self, id: &MemberId, payload: &MemberPayload) -> ClientResult<()> {
        self.http
            .put(&format!("actualizar/{}", segment(id)), payload)
            .await?;
        Ok(())
    }

    /// Delete a member. The response body is ignored.
    pub async fn delete(&self, id: &MemberId) -> ClientResult<()> {
        self.http
            .delete(&format!("eliminar/{}", segment(id)))
            .await?;
        Ok(())
    }
}

/// The id is user input; keep it inside one path segment.
fn segment(id: &MemberId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}
