//! User Endpoints
//!
//! Token login and registration. Neither needs a stored credential.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{json_body, ApiClient, Body, KeyValueStore, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Credential, NewUser};

/// Characters left as-is in `application/x-www-form-urlencoded` values
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');

fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, FORM_VALUE),
                utf8_percent_encode(v, FORM_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /users/token`; the caller decides whether to persist the result
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Credential> {
        let body = Body::Form(form_encode(&[("username", username), ("password", password)]));
        self.send_json(Method::Post, "/users/token", body, "Login failed")
            .await
    }

    /// `POST /users/`; the response body is not used beyond success
    pub async fn register(&self, user: &NewUser) -> ApiResult<()> {
        self.send(Method::Post, "/users/", json_body(user)?, "Registration failed")
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, MockTransport};

    #[test]
    fn test_form_encode_escapes_reserved_characters() {
        let encoded = form_encode(&[("username", "jane_doe"), ("password", "p@ss w&rd=1")]);
        assert_eq!(encoded, "username=jane_doe&password=p%40ss%20w%26rd%3D1");
    }

    #[tokio::test]
    async fn test_login_posts_form_and_parses_credential() {
        let transport = MockTransport::new();
        transport.push_raw(200, r#"{"access_token":"abc.def","token_type":"bearer"}"#);
        let api = client(&transport, None);

        let cred = api.login("jane", "secret123").await.unwrap();

        assert_eq!(cred.header_value(), "bearer abc.def");
        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://api.test/users/token");
        assert_eq!(sent[0].body, Body::Form("username=jane&password=secret123".into()));
        assert_eq!(sent[0].authorization, None);
    }

    #[tokio::test]
    async fn test_login_failure_reports_detail() {
        let transport = MockTransport::new();
        transport.push_raw(401, r#"{"detail":"Incorrect username or password"}"#);
        let api = client(&transport, None);

        let err = api.login("jane", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
    }

    #[tokio::test]
    async fn test_register_sends_user_role() {
        let transport = MockTransport::new();
        transport.push_raw(200, r#"{"message":"User created successfully"}"#);
        let api = client(&transport, None);
        let user = NewUser {
            full_name: "Jane Doe".into(),
            username: "jane".into(),
            email: "jane@example.com".into(),
            password: "secret123".into(),
            role: "user".into(),
        };

        api.register(&user).await.unwrap();

        match &transport.requests()[0].body {
            Body::Json(json) => assert!(json.contains(r#""role":"user""#)),
            other => panic!("expected JSON body, got {:?}", other),
        }
    }
}
