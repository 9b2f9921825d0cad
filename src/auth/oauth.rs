//! Interactive OAuth2 authorization-code flow against Google.
//!
//! First run only: print the authorization URL, block on the prompt for the
//! code Google shows after consent, and exchange it for a token. The
//! out-of-band redirect is used so no local HTTP server is needed.

use anyhow::{Context, Result};
use oauth2::basic::{BasicClient, BasicTokenResponse};
use oauth2::reqwest;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, PkceCodeChallenge, RedirectUrl,
    Scope, TokenUrl,
};

use crate::prompt::Prompt;

/// Google OAuth2 authorization endpoint
const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth2 token-exchange endpoint
const TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v3/token";

/// Out-of-band redirect: Google displays the code for the operator to paste
const REDIRECT_URL: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Scope granting full management of the channel's videos and playlists
const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube";

pub struct Authenticator {
    client_id: String,
    client_secret: String,
}

impl Authenticator {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    /// Run the authorization-code exchange, blocking on the prompt for the
    /// operator's code.
    pub async fn authenticate(&self, prompt: &mut impl Prompt) -> Result<BasicTokenResponse> {
        let client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.clone()))
            .set_auth_uri(
                AuthUrl::new(AUTH_URL.to_string()).context("Invalid authorization endpoint URL")?,
            )
            .set_token_uri(
                TokenUrl::new(TOKEN_URL.to_string()).context("Invalid token endpoint URL")?,
            )
            .set_redirect_uri(
                RedirectUrl::new(REDIRECT_URL.to_string()).context("Invalid redirect URL")?,
            );

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let (auth_url, _csrf_token) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(YOUTUBE_SCOPE.to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        println!("Authorize this app by visiting:\n\n    {}\n", auth_url);
        let code = prompt.ask("Enter the code from that page:")?;

        let http_client = reqwest::ClientBuilder::new()
            // Following redirects opens the client up to SSRF vulnerabilities.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build token-exchange HTTP client")?;

        client
            .exchange_code(AuthorizationCode::new(code))
            .set_pkce_verifier(pkce_verifier)
            .request_async(&http_client)
            .await
            .context("Failed to exchange authorization code for a token")
    }
}
