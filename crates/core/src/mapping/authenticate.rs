use tradeline_domain::AuthenticateResponse;

use crate::api::AccessToken;

pub fn map_authenticate_response(token: AccessToken) -> AuthenticateResponse {
    AuthenticateResponse::new(token.access_token, token.refresh_token, token.expires_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_token_fields() {
        let token = AccessToken {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
            token_type: Some("bearer".to_string()),
            scope: None,
        };

        let response = map_authenticate_response(token);

        assert_eq!(response.access_token(), "access");
        assert_eq!(response.refresh_token(), "refresh");
        assert_eq!(response.expires_in(), 3600);
    }
}
