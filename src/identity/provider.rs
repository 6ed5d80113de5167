//! Pseudonymous voter identity derivation.

use serde_json::json;
use url::Url;
use uuid::Uuid;

use crate::error::AppError;
use crate::identity::store::TokenStore;

/// The three link parameters that together define one voting context.
///
/// Absent parameters are carried as empty strings, so `club=x` alone and
/// `club=x&invite=y` are distinct contexts with distinct identities; a
/// voter may hold different tokens in different clubs or semesters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkContext {
    pub club: String,
    pub invite: String,
    pub semester: String,
}

impl LinkContext {
    /// Builds a context from optional link parameters.
    pub fn new(club: Option<&str>, invite: Option<&str>, semester: Option<&str>) -> Self {
        Self {
            club: club.unwrap_or_default().to_string(),
            invite: invite.unwrap_or_default().to_string(),
            semester: semester.unwrap_or_default().to_string(),
        }
    }

    /// Parses a full share link of the form
    /// `https://host/path?club=<slug>&invite=<code>&semester=<id>`.
    ///
    /// Missing parameters are treated as empty; unknown parameters are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the string is not an absolute
    /// URL.
    pub fn from_share_url(link: &str) -> Result<Self, AppError> {
        let url = Url::parse(link).map_err(|e| {
            AppError::bad_request(
                "Invalid share link",
                json!({ "link": link, "reason": e.to_string() }),
            )
        })?;

        let mut ctx = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "club" => ctx.club = value.into_owned(),
                "invite" => ctx.invite = value.into_owned(),
                "semester" => ctx.semester = value.into_owned(),
                _ => {}
            }
        }

        Ok(ctx)
    }

    /// The storage key for this context: `<club>|<invite>|<semester>`.
    pub fn context_key(&self) -> String {
        format!("{}|{}|{}", self.club, self.invite, self.semester)
    }
}

/// Derives and persists one stable pseudonymous token per link context.
pub struct VoterIdentity<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> VoterIdentity<S> {
    /// Creates an identity provider over a token store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the voter token for a context, minting it on first use.
    ///
    /// The first call per context generates a fresh UUID v4 and writes
    /// exactly one store entry; every later call returns that same value.
    /// No network is involved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unavailable,
    /// which is fatal for the session, since voting requires a token.
    pub fn voter_token(&self, ctx: &LinkContext) -> Result<String, AppError> {
        let key = ctx.context_key();

        if let Some(existing) = self.store.get(&key)? {
            return Ok(existing);
        }

        let token = Uuid::new_v4().to_string();
        self.store.put(&key, &token)?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::store::MemoryTokenStore;

    #[test]
    fn test_same_context_returns_same_token() {
        let identity = VoterIdentity::new(MemoryTokenStore::new());
        let ctx = LinkContext::new(Some("wed-club"), Some("x7kq2m9f"), None);

        let first = identity.voter_token(&ctx).unwrap();
        let second = identity.voter_token(&ctx).unwrap();

        assert_eq!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_different_contexts_get_different_tokens() {
        let identity = VoterIdentity::new(MemoryTokenStore::new());

        let here = LinkContext::new(Some("wed-club"), Some("code-a"), None);
        let there = LinkContext::new(Some("wed-club"), Some("code-b"), None);
        let elsewhere = LinkContext::new(Some("wed-club"), Some("code-a"), Some("sem-1"));

        let a = identity.voter_token(&here).unwrap();
        let b = identity.voter_token(&there).unwrap();
        let c = identity.voter_token(&elsewhere).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_context_key_joins_even_empty_parts() {
        let ctx = LinkContext::new(Some("wed-club"), None, None);
        assert_eq!(ctx.context_key(), "wed-club||");

        assert_eq!(LinkContext::default().context_key(), "||");
    }

    #[test]
    fn test_context_from_share_url() {
        let ctx = LinkContext::from_share_url(
            "https://books.example.com/?club=wed-club&invite=x7kq2m9f&semester=abc",
        )
        .unwrap();

        assert_eq!(ctx.club, "wed-club");
        assert_eq!(ctx.invite, "x7kq2m9f");
        assert_eq!(ctx.semester, "abc");
    }

    #[test]
    fn test_context_from_share_url_with_missing_params() {
        let ctx = LinkContext::from_share_url("https://books.example.com/?club=wed-club").unwrap();

        assert_eq!(ctx.club, "wed-club");
        assert!(ctx.invite.is_empty());
        assert!(ctx.semester.is_empty());
    }

    #[test]
    fn test_context_from_invalid_url() {
        assert!(LinkContext::from_share_url("not a url").is_err());
    }
}
